// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory configuration store.
//!
//! A [`Configuration`] is an ordered set of [`Section`]s, each an ordered set of
//! [`Entry`]s. Order is first appearance in the source text. The store is built by
//! a parser and is read-only afterwards.
//!
//! Two policies apply while building:
//!
//! - a section header that was already seen reopens the existing section, so its
//!   entries accumulate;
//! - a key repeated within a section replaces the earlier value in place.

use crate::domain::RawValue;
use std::collections::HashMap;

/// One `key = value` pair of a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: RawValue,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key of the entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw value of the entry.
    pub fn value(&self) -> &RawValue {
        &self.value
    }
}

/// A named group of entries.
///
/// The name is `None` for the implicit section that holds pairs appearing before
/// the first header. A literal `[]` header produces a distinct section named `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    name: Option<String>,
    entries: Vec<Entry>,
    /// Key to position in `entries`
    index: HashMap<String, usize>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the section name, `None` for the unnamed section.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Looks up a key in this section.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.index.get(key).map(|&i| &self.entries[i].value)
    }

    /// Returns the entries in order of first appearance.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns an iterator over the keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces a value, returning the previous one.
    pub(crate) fn insert(&mut self, key: &str, value: RawValue) -> Option<RawValue> {
        if let Some(i) = self.index.get(key).copied() {
            return Some(std::mem::replace(&mut self.entries[i].value, value));
        }

        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push(Entry {
            key: key.to_string(),
            value,
        });
        None
    }
}

/// A loaded INI configuration.
///
/// # Examples
///
/// ```
/// use hexini::domain::Configuration;
///
/// let config: Configuration = "[main]\ntype = test\n".parse().unwrap();
/// assert_eq!(config.find(Some("main"), "type").unwrap().as_str(), "test");
/// assert!(config.find(Some("main"), "missing").is_none());
/// assert!(config.find(None, "type").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    sections: Vec<Section>,
    /// Position of the unnamed section, if present
    unnamed: Option<usize>,
    /// Named section to position in `sections`
    named: HashMap<String, usize>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the raw value of `key` in `section`.
    ///
    /// Names are compared case-sensitively. `None` matches only the unnamed
    /// section.
    pub fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Returns `true` if `section` holds `key`.
    pub fn contains(&self, section: Option<&str>, key: &str) -> bool {
        self.find(section, key).is_some()
    }

    /// Returns the section with the given name.
    pub fn section(&self, name: Option<&str>) -> Option<&Section> {
        self.position(name).map(|i| &self.sections[i])
    }

    /// Returns `true` if a section with the given name exists.
    pub fn has_section(&self, name: Option<&str>) -> bool {
        self.position(name).is_some()
    }

    /// Returns an iterator over the sections in order of first appearance.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Returns the section names in order of first appearance.
    pub fn section_names(&self) -> Vec<Option<&str>> {
        self.sections.iter().map(Section::name).collect()
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    fn position(&self, name: Option<&str>) -> Option<usize> {
        match name {
            None => self.unnamed,
            Some(name) => self.named.get(name).copied(),
        }
    }

    /// Returns the section with the given name, creating it at the end if needed.
    pub(crate) fn section_mut(&mut self, name: Option<&str>) -> &mut Section {
        let i = match self.position(name) {
            Some(i) => i,
            None => {
                let i = self.sections.len();
                self.sections.push(Section::new(name.map(str::to_string)));
                match name {
                    None => self.unnamed = Some(i),
                    Some(name) => {
                        self.named.insert(name.to_string(), i);
                    }
                }
                i
            }
        };
        &mut self.sections[i]
    }

    /// Inserts a value, replacing any earlier value of the same key.
    pub(crate) fn insert(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: impl Into<RawValue>,
    ) -> Option<RawValue> {
        self.section_mut(section).insert(key, value.into())
    }
}
