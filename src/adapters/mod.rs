// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! The INI adapter implements the `ConfigParser` port for INI text and the
//! `ConfigSource` port for loaded files.

pub mod ini_file;

pub use ini_file::{IniFileAdapter, IniParser};
