// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the text of a
//! configuration file into a [`Configuration`].

use crate::domain::{Configuration, Result};

/// A trait for parsing configuration text.
///
/// Parsers classify text line by line and build the sectioned store. A parser
/// may be lenient and skip lines it does not understand; the INI parser does.
///
/// # Examples
///
/// ```rust
/// use hexini::ports::ConfigParser;
/// use hexini::domain::{Configuration, Result};
///
/// struct EmptyParser;
///
/// impl ConfigParser for EmptyParser {
///     fn parse(&self, _content: &str) -> Result<Configuration> {
///         Ok(Configuration::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// let parser = EmptyParser;
/// assert!(parser.parse("anything").unwrap().is_empty());
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a [`Configuration`].
    ///
    /// # Returns
    ///
    /// * `Ok(Configuration)` - The fully built configuration
    /// * `Err(IniError)` - The content could not be parsed at all
    fn parse(&self, content: &str) -> Result<Configuration>;

    /// Returns the file extensions (without the leading dot) this parser supports.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one this parser supports, ignoring case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
