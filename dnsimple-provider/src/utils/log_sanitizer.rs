//! Log sanitization utilities
//!
//! Response bodies can carry DKIM keys, verification tokens and other record
//! contents. Debug and error logs only ever see a bounded prefix.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Returns the original string if it has at most `TRUNCATE_LIMIT` characters,
/// otherwise the first `TRUNCATE_LIMIT` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = r#"{"data":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "v=DKIM1; k=rsa; p=".to_string() + &"A".repeat(TRUNCATE_LIMIT * 2);
        let result = truncate_for_log(&s);
        assert!(result.starts_with("v=DKIM1; k=rsa; p="));
        assert!(result.ends_with(&format!("total {} bytes]", s.len())));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(TRUNCATE_LIMIT + 1);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"é".repeat(TRUNCATE_LIMIT)));
        assert!(result.contains("... [truncated"));
    }
}
