// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer providing typed reads over configuration sources.

pub mod accessor;

pub use accessor::{Read, ReadOutcome, TypedAccessor};
