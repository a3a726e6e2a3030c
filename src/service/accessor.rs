// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessor layer.
//!
//! Every accessor follows the same contract: look the key up, convert the raw
//! value, and fall back to the caller's default when the section or key is absent
//! or the value does not convert. None of these outcomes is an error; the
//! returned [`Read`] records whether the default was used.
//!
//! # Examples
//!
//! ```rust
//! use hexini::prelude::*;
//! use std::net::{Ipv4Addr, SocketAddrV4};
//!
//! let config: Configuration = "[main]\ntype=test\n[addr]\nipv4=10.0.0.1:8080\n"
//!     .parse()
//!     .unwrap();
//!
//! let kind = config.read_string(Some("main"), "type", "fallback");
//! assert_eq!(kind.value(), "test");
//! assert!(kind.is_found());
//!
//! let missing = config.read_string(Some("main"), "missing", "fallback");
//! assert_eq!(missing.value(), "fallback");
//! assert!(missing.is_default());
//!
//! let addr = config.read_ipv4_socket_addr(Some("addr"), "ipv4", "127.0.0.1:0");
//! assert_eq!(*addr.value(), SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 8080));
//! ```

use crate::domain::{FromRaw, RawValue};
use crate::ports::ConfigSource;
use std::net::{Ipv4Addr, SocketAddrV4};

/// Whether a typed read used the stored value or the caller's default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadOutcome {
    /// The key was present and its value converted.
    Found,
    /// The section or key was absent, or the value failed to convert.
    Defaulted,
}

/// The result of a typed read: the value handed to the caller and its outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Read<T> {
    value: T,
    outcome: ReadOutcome,
}

impl<T> Read<T> {
    /// Creates a read that used the stored value.
    pub fn found(value: T) -> Self {
        Self {
            value,
            outcome: ReadOutcome::Found,
        }
    }

    /// Creates a read that used the default.
    pub fn defaulted(value: T) -> Self {
        Self {
            value,
            outcome: ReadOutcome::Defaulted,
        }
    }

    /// Returns a reference to the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the outcome of the read.
    pub fn outcome(&self) -> ReadOutcome {
        self.outcome
    }

    /// Returns `true` if the stored value was used.
    pub fn is_found(&self) -> bool {
        self.outcome == ReadOutcome::Found
    }

    /// Returns `true` if the default was used.
    pub fn is_default(&self) -> bool {
        self.outcome == ReadOutcome::Defaulted
    }

    /// Consumes the read, returning the value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Looks a key up, logging when it is absent.
fn lookup<'a, S>(source: &'a S, section: Option<&str>, key: &str) -> Option<&'a RawValue>
where
    S: ConfigSource + ?Sized,
{
    let raw = source.find(section, key);
    if raw.is_none() {
        tracing::debug!(
            "Key '{}' not found in section {:?} of source '{}', using default",
            key,
            section,
            source.name()
        );
    }
    raw
}

/// Copies at most `buf.len() - 1` bytes of `text` into `buf` and terminates it.
///
/// The cut is moved back to a character boundary so the payload stays valid
/// UTF-8. Returns the payload length.
fn copy_bounded(text: &str, buf: &mut [u8]) -> usize {
    let Some(capacity) = buf.len().checked_sub(1) else {
        return 0;
    };

    let mut len = text.len().min(capacity);
    while !text.is_char_boundary(len) {
        len -= 1;
    }

    buf[..len].copy_from_slice(&text.as_bytes()[..len]);
    buf[len] = 0;
    len
}

/// Typed reads with default fallback over any [`ConfigSource`].
///
/// Implemented for every source, including `dyn ConfigSource`.
pub trait TypedAccessor: ConfigSource {
    /// Reads and converts a value, falling back to `default`.
    ///
    /// This is the single routine behind the width-specific wrappers below.
    fn read<T: FromRaw>(&self, section: Option<&str>, key: &str, default: T) -> Read<T> {
        let Some(raw) = lookup(self, section, key) else {
            return Read::defaulted(default);
        };

        match raw.convert::<T>(key) {
            Ok(value) => Read::found(value),
            Err(e) => {
                tracing::debug!("Using default for section {:?}: {}", section, e);
                Read::defaulted(default)
            }
        }
    }

    /// Reads a string, returning a freshly owned copy of the value or default.
    fn read_string(&self, section: Option<&str>, key: &str, default: &str) -> Read<String> {
        match lookup(self, section, key) {
            Some(raw) => Read::found(raw.as_string()),
            None => Read::defaulted(default.to_string()),
        }
    }

    /// Reads a string into caller-provided storage.
    ///
    /// At most `buf.len() - 1` bytes of payload are written, cut back to a UTF-8
    /// character boundary, followed by a `0` byte. Truncation is silent. A `None`
    /// default writes an empty payload. The returned value is the payload length;
    /// an empty buffer receives nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexini::prelude::*;
    ///
    /// let config: Configuration = "[main]\nlen = 123456".parse().unwrap();
    /// let mut buf = [0xffu8; 4];
    /// let read = config.read_string_bounded(Some("main"), "len", &mut buf, None);
    /// assert_eq!(*read.value(), 3);
    /// assert_eq!(&buf, b"123\0");
    /// ```
    fn read_string_bounded(
        &self,
        section: Option<&str>,
        key: &str,
        buf: &mut [u8],
        default: Option<&str>,
    ) -> Read<usize> {
        match lookup(self, section, key) {
            Some(raw) => Read::found(copy_bounded(raw.as_str(), buf)),
            None => Read::defaulted(copy_bounded(default.unwrap_or(""), buf)),
        }
    }

    /// Reads a native `int`, which is 32 bits wide.
    fn read_int(&self, section: Option<&str>, key: &str, default: i32) -> Read<i32> {
        self.read(section, key, default)
    }

    /// Reads an `i8`.
    fn read_i8(&self, section: Option<&str>, key: &str, default: i8) -> Read<i8> {
        self.read(section, key, default)
    }

    /// Reads an `i16`.
    fn read_i16(&self, section: Option<&str>, key: &str, default: i16) -> Read<i16> {
        self.read(section, key, default)
    }

    /// Reads an `i32`.
    fn read_i32(&self, section: Option<&str>, key: &str, default: i32) -> Read<i32> {
        self.read(section, key, default)
    }

    /// Reads an `i64`.
    fn read_i64(&self, section: Option<&str>, key: &str, default: i64) -> Read<i64> {
        self.read(section, key, default)
    }

    /// Reads a native `unsigned`, which is 32 bits wide.
    fn read_unsigned(&self, section: Option<&str>, key: &str, default: u32) -> Read<u32> {
        self.read(section, key, default)
    }

    /// Reads a `u8`.
    fn read_u8(&self, section: Option<&str>, key: &str, default: u8) -> Read<u8> {
        self.read(section, key, default)
    }

    /// Reads a `u16`.
    fn read_u16(&self, section: Option<&str>, key: &str, default: u16) -> Read<u16> {
        self.read(section, key, default)
    }

    /// Reads a `u32`.
    fn read_u32(&self, section: Option<&str>, key: &str, default: u32) -> Read<u32> {
        self.read(section, key, default)
    }

    /// Reads a `u64`.
    fn read_u64(&self, section: Option<&str>, key: &str, default: u64) -> Read<u64> {
        self.read(section, key, default)
    }

    /// Reads a finite single precision float.
    fn read_float(&self, section: Option<&str>, key: &str, default: f32) -> Read<f32> {
        self.read(section, key, default)
    }

    /// Reads a finite double precision float.
    fn read_double(&self, section: Option<&str>, key: &str, default: f64) -> Read<f64> {
        self.read(section, key, default)
    }

    /// Reads a boolean.
    fn read_bool(&self, section: Option<&str>, key: &str, default: bool) -> Read<bool> {
        self.read(section, key, default)
    }

    /// Reads an `A.B.C.D:PORT` socket address.
    ///
    /// The default is a string in the same format and is parsed by the same rule.
    /// An invalid default yields `0.0.0.0:0`.
    fn read_ipv4_socket_addr(
        &self,
        section: Option<&str>,
        key: &str,
        default: &str,
    ) -> Read<SocketAddrV4> {
        if let Some(raw) = lookup(self, section, key) {
            match raw.as_socket_addr_v4(key) {
                Ok(addr) => return Read::found(addr),
                Err(e) => tracing::debug!("Using default for section {:?}: {}", section, e),
            }
        }

        let addr = SocketAddrV4::from_raw(default, key).unwrap_or_else(|e| {
            tracing::warn!("Invalid default socket address '{}': {}", default, e);
            SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)
        });
        Read::defaulted(addr)
    }
}

impl<S: ConfigSource + ?Sized> TypedAccessor for S {}
