// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture INI configuration crate.
//!
//! This crate loads an INI file (sections of `key = value` pairs) into an
//! immutable, ordered store and exposes typed accessors that convert raw string
//! values into Rust types. A read never fails: when the section or key is absent,
//! or the value does not convert, the caller's default is returned and the read
//! reports that the default was used.
//!
//! # Architecture
//!
//! - **Domain Layer**: the store (`Configuration`, `Section`, `Entry`), `RawValue`
//!   with its conversion rules, line events and errors
//! - **Ports**: `ConfigParser` and `ConfigSource` traits
//! - **Adapters**: the INI tokenizer (`IniParser`) and loader (`IniFileAdapter`)
//! - **Service**: the typed accessor layer (`TypedAccessor`)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexini::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = hexini::load("test.ini")?;
//!
//! let kind = config.read_string(Some("main"), "type", "test");
//! let port = config.read_u16(Some("server"), "port", 8080);
//! let addr = config.read_ipv4_socket_addr(Some("addr"), "ipv4", "127.0.0.1:0");
//! let name = config.read_string(None, "名字", "");
//!
//! println!("{} {} {} {}", kind.value(), port.value(), addr.value(), name.value());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use std::path::Path;

/// Loads an INI file into a [`Configuration`](domain::Configuration).
///
/// # Errors
///
/// Returns `IniError::LoadError` carrying the OS reason when the file cannot be
/// opened or read, and `IniError::InvalidEncoding` when it is not UTF-8.
/// Malformed lines are skipped and never cause an error.
pub fn load<P: AsRef<Path>>(path: P) -> domain::Result<domain::Configuration> {
    adapters::IniFileAdapter::from_file(path).map(adapters::IniFileAdapter::into_configuration)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{IniFileAdapter, IniParser};
    pub use crate::domain::{Configuration, Entry, IniError, RawValue, Result, Section};
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{Read, ReadOutcome, TypedAccessor};
}
