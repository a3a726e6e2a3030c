// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural events produced by the line tokenizer.

/// The classification of a single line of INI text.
///
/// Borrowed slices point into the line that was classified and are already
/// trimmed of surrounding whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// An empty or whitespace-only line.
    Blank,
    /// A line whose first non-whitespace character is `;` or `#`.
    Comment,
    /// A `[name]` section header.
    Section(&'a str),
    /// A `key = value` pair, split on the first `=`.
    Pair {
        /// Text left of the first `=`
        key: &'a str,
        /// Text right of the first `=`
        value: &'a str,
    },
    /// A line that is none of the above, such as an unterminated header.
    Malformed,
}
