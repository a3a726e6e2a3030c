// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that parsing and typed reads behave for arbitrary inputs.

use hexini::prelude::*;
use proptest::prelude::*;

// Keys and values without structural characters or surrounding whitespace,
// including multi-byte text.
const KEY_PATTERN: &str =
    "[a-zA-Z0-9_.$%^@!\\p{Han}\\p{Greek}-]([a-zA-Z0-9_.$%^@! \\p{Han}\\p{Greek}-]{0,12}[a-zA-Z0-9\\p{Han}])?";
const VALUE_PATTERN: &str =
    "([a-zA-Z0-9_:/.=#;\\[\\]\\p{Han}]([a-zA-Z0-9_:/.=#;\\[\\]\\p{Han} -]{0,16}[a-zA-Z0-9\\p{Han}])?)?";
const SECTION_PATTERN: &str = "[a-zA-Z0-9_\\p{Han}][a-zA-Z0-9_ \\p{Han}]{0,8}[a-zA-Z0-9_\\p{Han}]";

// Test that well-formed triples round-trip through the parser
proptest! {
    #[test]
    fn test_round_trip_triples(
        section in SECTION_PATTERN,
        key in KEY_PATTERN,
        value in VALUE_PATTERN,
    ) {
        let content = format!("[{}]\n  {} =  {}  \n", section, key, value);
        let config: Configuration = content.parse().unwrap();
        prop_assert_eq!(
            config.find(Some(section.as_str()), &key).map(RawValue::as_str),
            Some(value.as_str())
        );
    }
}

// Test that the last of several values for one key wins
proptest! {
    #[test]
    fn test_last_value_wins(values in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let mut content = String::new();
        for value in &values {
            content.push_str(&format!("[s]\nkey = {}\n", value));
        }
        let config: Configuration = content.parse().unwrap();
        prop_assert_eq!(config.len(), 1);
        prop_assert_eq!(config.section(Some("s")).unwrap().len(), 1);
        prop_assert_eq!(
            config.read_string(Some("s"), "key", "").into_value(),
            values.last().unwrap().clone()
        );
    }
}

// Test that absent keys always yield the default
proptest! {
    #[test]
    fn test_absent_key_yields_default(key in "[a-z]{1,8}", default in any::<i64>()) {
        let config = Configuration::new();
        let read = config.read_i64(Some("s"), &key, default);
        prop_assert!(read.is_default());
        prop_assert_eq!(*read.value(), default);
    }
}

// Test integer parsing for every value of a width
proptest! {
    #[test]
    fn test_i64_round_trip(n in any::<i64>()) {
        let config: Configuration = format!("n = {}", n).parse().unwrap();
        prop_assert_eq!(config.read_i64(None, "n", 0), Read::found(n));
    }

    #[test]
    fn test_u32_hex_round_trip(n in any::<u32>()) {
        let config: Configuration = format!("n = {:#x}", n).parse().unwrap();
        prop_assert_eq!(config.read_u32(None, "n", 0), Read::found(n));
    }
}

// Test that values outside a width fall back to the default
proptest! {
    #[test]
    fn test_out_of_range_uses_default(n in any::<i64>(), default in any::<i16>()) {
        prop_assume!(n < i16::MIN as i64 || n > i16::MAX as i64);
        let config: Configuration = format!("n = {}", n).parse().unwrap();
        prop_assert_eq!(config.read_i16(None, "n", default), Read::defaulted(default));
    }

    #[test]
    fn test_negative_unsigned_uses_default(n in i64::MIN..0i64, default in any::<u64>()) {
        let config: Configuration = format!("n = {}", n).parse().unwrap();
        prop_assert_eq!(config.read_u64(None, "n", default), Read::defaulted(default));
    }
}

// Test float parsing
proptest! {
    #[test]
    fn test_f64_round_trip(n in prop::num::f64::NORMAL) {
        let config: Configuration = format!("n = {}", n).parse().unwrap();
        prop_assert_eq!(config.read_double(None, "n", 0.0), Read::found(n));
    }
}

// Test that non-numeric strings never parse as integers
proptest! {
    #[test]
    fn test_non_numeric_uses_default(s in "[g-zG-Z][a-zA-Z0-9]*") {
        let config: Configuration = format!("n = {}", s).parse().unwrap();
        prop_assert!(config.read_int(None, "n", 0).is_default());
    }
}

// Test that bounded reads never overrun and always terminate
proptest! {
    #[test]
    fn test_bounded_read_stays_in_bounds(
        value in "[a-z\\p{Han}]{0,40}",
        len in 1usize..32,
    ) {
        let config: Configuration = format!("k = {}", value).parse().unwrap();
        let mut buf = vec![0xffu8; len];
        let written = config.read_string_bounded(None, "k", &mut buf, None).into_value();

        prop_assert!(written < len);
        prop_assert_eq!(buf[written], 0);
        prop_assert!(value.as_bytes().starts_with(&buf[..written]));
        prop_assert!(std::str::from_utf8(&buf[..written]).is_ok());
    }
}

// Test that arbitrary text never makes the parser fail
proptest! {
    #[test]
    fn test_parser_never_fails(content in "\\PC*(\n\\PC*){0,8}") {
        prop_assert!(content.parse::<Configuration>().is_ok());
    }
}
