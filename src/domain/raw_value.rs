// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw INI value type with type-safe conversions.
//!
//! This module provides the `RawValue` type, which holds the untyped string of an
//! entry exactly as it appeared in the file (after trimming), and the [`FromRaw`]
//! trait that describes how each supported scalar type is parsed out of it.
//!
//! # Conversion rules
//!
//! - Integers accept an optional `+`/`-` sign followed by decimal digits, or by a
//!   `0x`/`0X` prefix and hexadecimal digits. Octal is not recognised, so `010` is
//!   ten. Values outside the target width are rejected, never wrapped.
//! - Floats accept decimal and scientific notation. Infinite and NaN results are
//!   rejected, including literals such as `inf` and magnitudes that overflow.
//! - Booleans accept `true`/`yes`/`on`/`1` and `false`/`no`/`off`/`0`, ignoring case.
//! - IPv4 socket addresses use the `A.B.C.D:PORT` form.

use crate::domain::errors::{IniError, InvalidValue, Result};
use std::fmt;
use std::net::SocketAddrV4;
use std::str::FromStr;

/// An untyped configuration value.
///
/// # Examples
///
/// ```
/// use hexini::domain::RawValue;
///
/// let value = RawValue::new("0x2A".to_string());
/// assert_eq!(value.as_str(), "0x2A");
/// assert_eq!(value.convert::<u8>("int.uint8").unwrap(), 42);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawValue(String);

impl RawValue {
    /// Creates a new `RawValue` from a `String`.
    pub fn new(value: String) -> Self {
        RawValue(value)
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexini::domain::RawValue;
    ///
    /// let value = RawValue::from("shen zhen");
    /// assert_eq!(value.as_str(), "shen zhen");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns `true` if the raw value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the value into any type implementing [`FromRaw`].
    ///
    /// `key` is only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexini::domain::RawValue;
    ///
    /// let value = RawValue::from("-128");
    /// assert_eq!(value.convert::<i8>("int.int8").unwrap(), -128);
    /// assert!(value.convert::<u8>("int.uint8").is_err());
    /// ```
    pub fn convert<T: FromRaw>(&self, key: &str) -> Result<T> {
        T::from_raw(&self.0, key)
    }

    /// Converts the value to a boolean.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        self.convert(key)
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.convert(key)
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.convert(key)
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, key: &str) -> Result<u32> {
        self.convert(key)
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.convert(key)
    }

    /// Converts the value to a finite `f32`.
    pub fn as_f32(&self, key: &str) -> Result<f32> {
        self.convert(key)
    }

    /// Converts the value to a finite `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.convert(key)
    }

    /// Converts the value to an IPv4 socket address.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexini::domain::RawValue;
    ///
    /// let addr = RawValue::from("10.0.0.1:8080").as_socket_addr_v4("addr.ipv4").unwrap();
    /// assert_eq!(addr.port(), 8080);
    /// ```
    pub fn as_socket_addr_v4(&self, key: &str) -> Result<SocketAddrV4> {
        self.convert(key)
    }

    /// Parses the value into any type that implements `FromStr`.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| IniError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

/// Types that can be parsed out of a raw INI value.
///
/// This is the single conversion routine behind every typed accessor. Integer
/// widths share one implementation generated by a macro.
pub trait FromRaw: Sized {
    /// Human readable name of the target type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Parses `raw`, labelling any failure with `key`.
    fn from_raw(raw: &str, key: &str) -> Result<Self>;
}

/// Splits an integer literal into a signed digit string and its radix.
fn split_radix(raw: &str) -> std::result::Result<(String, u32), InvalidValue> {
    if raw.is_empty() {
        return Err(InvalidValue::Empty);
    }

    let (sign, rest) = if let Some(rest) = raw.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        ("", rest)
    } else {
        ("", raw)
    };

    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };

    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(InvalidValue::InvalidDigit(raw.to_string()));
    }

    Ok((format!("{}{}", sign, digits), radix))
}

macro_rules! impl_from_raw_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromRaw for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_raw(raw: &str, key: &str) -> Result<Self> {
                    let (digits, radix) = split_radix(raw).map_err(|e| {
                        IniError::from_invalid_value(key.to_string(), Self::TYPE_NAME, e)
                    })?;
                    <$t>::from_str_radix(&digits, radix).map_err(|e| {
                        IniError::from_parse_int_error(key.to_string(), Self::TYPE_NAME, e)
                    })
                }
            }
        )*
    };
}

impl_from_raw_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_from_raw_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromRaw for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_raw(raw: &str, key: &str) -> Result<Self> {
                    let value = raw.parse::<$t>().map_err(|e| {
                        IniError::from_parse_float_error(key.to_string(), Self::TYPE_NAME, e)
                    })?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(IniError::from_invalid_value(
                            key.to_string(),
                            Self::TYPE_NAME,
                            InvalidValue::NonFinite(raw.to_string()),
                        ))
                    }
                }
            }
        )*
    };
}

impl_from_raw_float!(f32, f64);

impl FromRaw for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_raw(raw: &str, key: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(IniError::from_invalid_value(
                key.to_string(),
                Self::TYPE_NAME,
                InvalidValue::NotBoolean(raw.to_string()),
            )),
        }
    }
}

impl FromRaw for String {
    const TYPE_NAME: &'static str = "string";

    fn from_raw(raw: &str, _key: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromRaw for SocketAddrV4 {
    const TYPE_NAME: &'static str = "ipv4 socket address";

    fn from_raw(raw: &str, key: &str) -> Result<Self> {
        raw.parse::<SocketAddrV4>()
            .map_err(|e| IniError::TypeConversionError {
                key: key.to_string(),
                target_type: Self::TYPE_NAME.to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue(s.to_string())
    }
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        value.0
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
