// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which the typed
//! accessor layer reads raw values. A loaded [`Configuration`](crate::domain::Configuration)
//! and the [`IniFileAdapter`](crate::adapters::IniFileAdapter) both implement it.

use crate::domain::RawValue;

/// A read-only source of sectioned raw values.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Sources are never mutated after they are
/// built, so shared reads need no locking.
///
/// # Examples
///
/// ```rust
/// use hexini::ports::ConfigSource;
/// use hexini::domain::RawValue;
///
/// struct MySource {
///     value: RawValue,
/// }
///
/// impl ConfigSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue> {
///         (section == Some("main") && key == "type").then_some(&self.value)
///     }
///
///     fn section_names(&self) -> Vec<Option<&str>> {
///         vec![Some("main")]
///     }
/// }
///
/// let source = MySource { value: RawValue::from("test") };
/// assert!(source.contains(Some("main"), "type"));
/// assert!(!source.contains(None, "type"));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used in log messages.
    fn name(&self) -> &str;

    /// Looks up the raw value for `key` in `section`.
    ///
    /// `None` as the section selects the unnamed section holding pairs that appear
    /// before any header. A missing section or key yields `None`; it is not an
    /// error.
    fn find(&self, section: Option<&str>, key: &str) -> Option<&RawValue>;

    /// Returns the names of all sections in order of first appearance.
    fn section_names(&self) -> Vec<Option<&str>>;

    /// Returns `true` if `section` holds `key`.
    fn contains(&self, section: Option<&str>, key: &str) -> bool {
        self.find(section, key).is_some()
    }
}
