// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the loaded configuration store, the untyped value with its
//! conversion rules, the tokenizer's line events, and the error types. It has no
//! knowledge of files or of how values are defaulted.

pub mod errors;
pub mod line;
pub mod raw_value;
pub mod store;

// Re-export commonly used types
pub use errors::{IniError, InvalidValue, Result};
pub use line::Line;
pub use raw_value::{FromRaw, RawValue};
pub use store::{Configuration, Entry, Section};
