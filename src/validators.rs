//! Pure field validators. No I/O; failures name the offending field and are
//! mapped to HTTP responses by the error layer, not here.

use crate::error::{AppError, AppResult};

/// Reject when a required string field is empty after trimming whitespace.
pub fn require_non_empty(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Syntactic wallet-address check: exactly 42 characters with a `0x` prefix.
/// No checksum or signature verification.
pub fn require_wallet_address(field: &'static str, value: &str) -> AppResult<()> {
    require_non_empty(field, value)?;
    if value.len() != 42 || !value.starts_with("0x") {
        return Err(AppError::Validation(format!(
            "{} must be a 42-character address starting with 0x",
            field
        )));
    }
    Ok(())
}

/// Return the value only when it is present and non-empty after trimming.
/// Used by partial updates that ignore empty fields instead of clearing them.
pub fn provided(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_accepts_regular_strings() {
        assert!(require_non_empty("title", "My Game").is_ok());
    }

    #[test]
    fn non_empty_rejects_whitespace_only() {
        assert!(require_non_empty("title", "").is_err());
        assert!(require_non_empty("title", "   ").is_err());
        assert!(require_non_empty("title", "\t\n").is_err());
    }

    #[test]
    fn non_empty_error_names_the_field() {
        let err = require_non_empty("creator_wallet_address", "").unwrap_err();
        assert!(err.to_string().contains("creator_wallet_address"));
    }

    #[test]
    fn wallet_address_accepts_valid_format() {
        let addr = format!("0x{}", "a".repeat(40));
        assert!(require_wallet_address("wallet_address", &addr).is_ok());
    }

    #[test]
    fn wallet_address_rejects_bad_length() {
        assert!(require_wallet_address("wallet_address", "0xabc").is_err());
        let long = format!("0x{}", "a".repeat(41));
        assert!(require_wallet_address("wallet_address", &long).is_err());
    }

    #[test]
    fn wallet_address_rejects_missing_prefix() {
        let addr = "a".repeat(42);
        assert!(require_wallet_address("wallet_address", &addr).is_err());
    }

    #[test]
    fn provided_filters_empty_values() {
        assert_eq!(provided(&None), None);
        assert_eq!(provided(&Some("".to_string())), None);
        assert_eq!(provided(&Some("  ".to_string())), None);
        assert_eq!(provided(&Some("Twitter".to_string())), Some("Twitter"));
    }
}
