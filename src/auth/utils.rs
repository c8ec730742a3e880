//! Small helpers shared by the auth components.

use std::time::SystemTime;

/// Normalize a login identifier for lookup.
///
/// Only surrounding whitespace is removed; case is kept because identifiers
/// are compared exactly as stored.
pub(crate) fn normalize_identifier(identifier: &str) -> &str {
    identifier.trim()
}

pub(crate) fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identifier_trims_but_keeps_case() {
        assert_eq!(normalize_identifier("  Alice@Example.com\t"), "Alice@Example.com");
        assert_eq!(normalize_identifier("a@b.com"), "a@b.com");
    }

    #[test]
    fn now_unix_seconds_is_after_2020() {
        assert!(now_unix_seconds() > 1_577_836_800);
    }
}
