// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a mock source for exercising the typed accessor layer
//! without going through files, plus a helper for writing temporary INI files.

use hexini::domain::RawValue;
use hexini::ports::ConfigSource;
use std::collections::HashMap;

/// A mock configuration source for testing.
#[derive(Debug, Clone, Default)]
pub struct MockConfigSource {
    name: String,
    values: HashMap<(Option<String>, String), RawValue>,
    order: Vec<Option<String>>,
}

impl MockConfigSource {
    /// Creates a new, empty mock source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(
        mut self,
        section: Option<&str>,
        key: impl Into<String>,
        value: impl Into<RawValue>,
    ) -> Self {
        let section = section.map(str::to_string);
        if !self.order.contains(&section) {
            self.order.push(section.clone());
        }
        self.values.insert((section, key.into()), value.into());
        self
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue> {
        self.values
            .get(&(section.map(str::to_string), key.to_string()))
    }

    fn section_names(&self) -> Vec<Option<&str>> {
        self.order.iter().map(Option::as_deref).collect()
    }
}

/// Creates a temporary INI file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
pub fn create_temp_ini(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a mock configuration source with common test values.
pub fn create_test_source() -> MockConfigSource {
    MockConfigSource::new("test")
        .with_value(Some("main"), "type", "test")
        .with_value(Some("int"), "int", "42")
        .with_value(Some("int"), "uint8", "300")
        .with_value(Some("float"), "double", "3.14")
        .with_value(None, "名字", "damon")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexini::service::TypedAccessor;

    #[test]
    fn test_mock_source_basic() {
        let source = MockConfigSource::new("test").with_value(Some("s"), "key", "value");

        assert_eq!(source.name(), "test");
        assert_eq!(source.find(Some("s"), "key").unwrap().as_str(), "value");
        assert!(source.find(None, "key").is_none());
    }

    #[test]
    fn test_mock_source_section_order() {
        let source = MockConfigSource::new("test")
            .with_value(Some("b"), "k", "1")
            .with_value(None, "k", "2")
            .with_value(Some("b"), "j", "3");

        assert_eq!(source.section_names(), vec![Some("b"), None]);
    }

    #[test]
    fn test_accessors_over_mock_source() {
        let source = create_test_source();

        assert_eq!(*source.read_int(Some("int"), "int", 0).value(), 42);
        assert!(source.read_u8(Some("int"), "uint8", 1).is_default());
        assert_eq!(*source.read_double(Some("float"), "double", 0.0).value(), 3.14);
        assert_eq!(source.read_string(None, "名字", "").value(), "damon");
        assert_eq!(source.read_string(Some("main"), "type", "x").value(), "test");
    }

    #[test]
    fn test_create_temp_ini() {
        let file = create_temp_ini("[main]\ntype = test\n");
        let config = hexini::load(file.path()).unwrap();
        assert_eq!(config.find(Some("main"), "type").unwrap().as_str(), "test");
    }
}
