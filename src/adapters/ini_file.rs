// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file configuration source adapter.
//!
//! This module provides the line tokenizer ([`IniParser`]) and the file loader
//! ([`IniFileAdapter`]).
//!
//! # Format
//!
//! ```ini
//! ; pairs before any header go to the unnamed section
//! 名字 = damon
//!
//! [main]
//! type = test
//! # comment
//! phone num = 123456789
//! ```
//!
//! Parsing is lenient: lines that are neither blank, a comment, a `[section]`
//! header nor a `key = value` pair are skipped, and loading carries on.

use crate::domain::{Configuration, IniError, Line, RawValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Maximum allowed file size for INI configuration files (10MB)
const MAX_INI_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used when loading from the OS configuration directory.
const DEFAULT_FILE_NAME: &str = "config.ini";

const SOURCE_NAME: &str = "ini-file";

/// INI parser implementation.
///
/// # Examples
///
/// ```rust
/// use hexini::adapters::IniParser;
/// use hexini::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let config = parser.parse("[database]\nhost = localhost\nport = 5432").unwrap();
/// assert_eq!(config.find(Some("database"), "port").unwrap().as_str(), "5432");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    /// Classifies a single line of text.
    ///
    /// Trimming is Unicode-aware, and the returned slices borrow from `line`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexini::adapters::IniParser;
    /// use hexini::domain::Line;
    ///
    /// let parser = IniParser::new();
    /// assert_eq!(parser.parse_line("  [ main ] "), Line::Section("main"));
    /// assert_eq!(
    ///     parser.parse_line("a = b = c"),
    ///     Line::Pair { key: "a", value: "b = c" }
    /// );
    /// assert_eq!(parser.parse_line("[main"), Line::Malformed);
    /// assert_eq!(parser.parse_line("[x] = [y]"), Line::Malformed);
    /// ```
    pub fn parse_line<'a>(&self, line: &'a str) -> Line<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }
        if trimmed.starts_with(';') || trimmed.starts_with('#') {
            return Line::Comment;
        }
        if let Some(rest) = trimmed.strip_prefix('[') {
            // The name ends at the first `]`, which must close the line
            return match rest.split_once(']') {
                Some((name, "")) if !name.contains('[') => Line::Section(name.trim()),
                _ => Line::Malformed,
            };
        }
        match trimmed.split_once('=') {
            Some((key, value)) => Line::Pair {
                key: key.trim(),
                value: value.trim(),
            },
            None => Line::Malformed,
        }
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<Configuration> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut config = Configuration::new();
        let mut current: Option<&str> = None;

        for (index, line) in content.lines().enumerate() {
            match self.parse_line(line) {
                Line::Section(name) => {
                    config.section_mut(Some(name));
                    current = Some(name);
                }
                Line::Pair { key, value } => {
                    config.insert(current, key, value);
                }
                Line::Malformed => {
                    tracing::debug!("Skipping malformed INI line {}: '{}'", index + 1, line.trim());
                }
                Line::Blank | Line::Comment => {}
            }
        }

        tracing::debug!(
            "Parsed INI content: {} sections, {} entries",
            config.len(),
            config.entry_count()
        );
        Ok(config)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "conf", "cfg"]
    }
}

impl FromStr for Configuration {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        IniParser::new().parse(s)
    }
}

impl ConfigSource for Configuration {
    fn name(&self) -> &str {
        "ini"
    }

    fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue> {
        Configuration::find(self, section, key)
    }

    fn section_names(&self) -> Vec<Option<&str>> {
        Configuration::section_names(self)
    }
}

/// Configuration source adapter for INI files.
///
/// Loading reads the whole file, tokenizes it and builds a [`Configuration`]. The
/// result is immutable; there is no reload.
///
/// # Examples
///
/// ```rust,no_run
/// use hexini::adapters::IniFileAdapter;
/// use hexini::ports::ConfigSource;
///
/// // Load from a specific file
/// let adapter = IniFileAdapter::from_file("/path/to/test.ini").unwrap();
///
/// // Load from default OS location
/// let adapter = IniFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Canonical path of the INI file
    file_path: PathBuf,
    /// Parsed configuration
    configuration: Configuration,
}

impl IniFileAdapter {
    /// Loads an INI file from a specific path.
    ///
    /// # Errors
    ///
    /// * `IniError::LoadError` - the file cannot be opened or read; the source
    ///   carries the OS reason
    /// * `IniError::FileTooLarge` - the file exceeds 10MB
    /// * `IniError::InvalidEncoding` - the file is not valid UTF-8
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |source| IniError::LoadError {
            path: path.to_path_buf(),
            source,
        };

        let canonical_path = path.canonicalize().map_err(load_error)?;

        // Check file size before reading
        let metadata = fs::metadata(&canonical_path).map_err(load_error)?;
        if metadata.len() > MAX_INI_FILE_SIZE {
            return Err(IniError::FileTooLarge {
                size: metadata.len(),
                max: MAX_INI_FILE_SIZE,
            });
        }

        let bytes = fs::read(&canonical_path).map_err(load_error)?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid_up_to = e.utf8_error().valid_up_to();
            tracing::warn!(
                "Configuration file '{}' is not valid UTF-8 after byte {}",
                canonical_path.display(),
                valid_up_to
            );
            IniError::InvalidEncoding {
                path: path.to_path_buf(),
                valid_up_to,
            }
        })?;

        let configuration = IniParser::new().parse(&content)?;
        tracing::debug!("Loaded INI configuration from '{}'", canonical_path.display());

        Ok(Self {
            file_path: canonical_path,
            configuration,
        })
    }

    /// Loads `config.ini` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Loads a custom file name from the OS-appropriate configuration directory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use hexini::adapters::IniFileAdapter;
    ///
    /// let adapter = IniFileAdapter::with_filename("myapp", "com.example", "settings.ini").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| IniError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the loaded file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the loaded configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Consumes the adapter, returning the loaded configuration.
    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }
}

impl ConfigSource for IniFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue> {
        self.configuration.find(section, key)
    }

    fn section_names(&self) -> Vec<Option<&str>> {
        self.configuration.section_names()
    }
}
