//! Property-based tests for column normalization.

use proptest::prelude::*;

use super::normalize::{normalize_key, resolve_column};

/// Strategy to generate arbitrary header strings, including punctuation runs,
/// unicode, and surrounding whitespace.
fn header() -> impl Strategy<Value = String> {
    "[ \\t]*[A-Za-z0-9 _./()#$-]{0,40}[ \\t]*"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalizing a header twice yields the same key.
    #[test]
    fn prop_normalize_key_idempotent(header in header()) {
        let once = normalize_key(&header);
        prop_assert_eq!(normalize_key(&once), once);
    }

    /// Normalized keys only contain lowercase alphanumerics and single
    /// underscores, never at the edges.
    #[test]
    fn prop_normalize_key_shape(header in header()) {
        let key = normalize_key(&header);

        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!key.starts_with('_'));
        prop_assert!(!key.ends_with('_'));
        prop_assert!(!key.contains("__"));
    }

    /// Column resolution is insensitive to case and surrounding whitespace.
    #[test]
    fn prop_resolve_column_case_insensitive(header in header()) {
        prop_assert_eq!(
            resolve_column(&header),
            resolve_column(&header.to_ascii_uppercase())
        );
        prop_assert_eq!(
            resolve_column(&header),
            resolve_column(&format!("  {header}  "))
        );
    }
}
