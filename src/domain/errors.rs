// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the INI configuration crate.
//!
//! Only loading can fail from a caller's point of view. Conversion errors exist so
//! that [`RawValue`](crate::domain::RawValue) can report why a value was rejected;
//! the typed accessor layer logs them and falls back to the caller's default.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for INI configuration operations.
///
/// # Examples
///
/// ```
/// use hexini::domain::errors::IniError;
///
/// fn open() -> Result<(), IniError> {
///     Err(IniError::FileTooLarge {
///         size: 20 * 1024 * 1024,
///         max: 10 * 1024 * 1024,
///     })
/// }
///
/// assert!(open().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IniError {
    /// The configuration file could not be opened or read.
    #[error("Failed to load configuration file '{}': {source}", .path.display())]
    LoadError {
        /// The path that was being loaded
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid UTF-8.
    #[error(
        "Configuration file '{}' is not valid UTF-8 (invalid byte at offset {valid_up_to})",
        .path.display()
    )]
    InvalidEncoding {
        /// The path that was being loaded
        path: PathBuf,
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// The configuration file exceeds the maximum accepted size.
    #[error("Configuration file too large: {size} bytes (max {max} bytes)")]
    FileTooLarge {
        /// Size of the file in bytes
        size: u64,
        /// Maximum accepted size in bytes
        max: u64,
    },

    /// Failed to convert a raw value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred while locating or preparing a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Reason a raw string was rejected by a conversion that has no std error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidValue {
    /// The value was empty.
    #[error("empty value")]
    Empty,
    /// The value contained characters that are not digits of the detected radix.
    #[error("invalid digit in '{0}'")]
    InvalidDigit(String),
    /// The value parsed as a float but is infinite or NaN.
    #[error("non-finite number '{0}'")]
    NonFinite(String),
    /// The value is not one of the accepted boolean spellings.
    #[error("'{0}' is not a boolean")]
    NotBoolean(String),
}

impl IniError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, target_type: &str, err: ParseIntError) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, target_type: &str, err: ParseFloatError) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from an [`InvalidValue`].
    pub fn from_invalid_value(key: String, target_type: &str, err: InvalidValue) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: target_type.to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for INI configuration operations.
pub type Result<T> = std::result::Result<T, IniError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_load_error_keeps_os_reason() {
        let error = IniError::LoadError {
            path: PathBuf::from("/etc/app.ini"),
            source: std::io::Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("/etc/app.ini"));
        assert!(error.to_string().contains("no such file"));
        match error {
            IniError::LoadError { source, .. } => assert_eq!(source.kind(), ErrorKind::NotFound),
            _ => panic!("expected LoadError"),
        }
    }

    #[test]
    fn test_file_too_large() {
        let error = IniError::FileTooLarge { size: 11, max: 10 };
        assert_eq!(
            error.to_string(),
            "Configuration file too large: 11 bytes (max 10 bytes)"
        );
    }

    #[test]
    fn test_invalid_encoding() {
        let error = IniError::InvalidEncoding {
            path: PathBuf::from("test.ini"),
            valid_up_to: 14,
        };
        assert_eq!(
            error.to_string(),
            "Configuration file 'test.ini' is not valid UTF-8 (invalid byte at offset 14)"
        );
    }

    #[test]
    fn test_source_error() {
        let error = IniError::SourceError {
            source_name: "ini-file".to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'ini-file' error: Failed to determine project directories"
        );
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "300".parse::<u8>().unwrap_err();
        let error = IniError::from_parse_int_error("int.uint8".to_string(), "u8", parse_err);
        assert!(matches!(error, IniError::TypeConversionError { .. }));
        assert!(error.to_string().contains("int.uint8"));
        assert!(error.to_string().contains("u8"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "abc".parse::<f64>().unwrap_err();
        let error = IniError::from_parse_float_error("float.double".to_string(), "f64", parse_err);
        assert!(error.to_string().contains("f64"));
    }

    #[test]
    fn test_from_invalid_value() {
        let error = IniError::from_invalid_value(
            "float.float".to_string(),
            "f32",
            InvalidValue::NonFinite("inf".to_string()),
        );
        assert!(error.to_string().contains("non-finite number 'inf'"));
    }
}
