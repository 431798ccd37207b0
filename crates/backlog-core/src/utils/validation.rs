//! Input validation shared by option factories, resource operations and the
//! configuration layer.

use crate::Result;
use crate::error::{ClientError, ValidationError};

/// Backlog space URL as entered by the user.
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ClientError::new("URL cannot be empty").into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::new(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(ClientError::new("API key cannot be empty").into());
    }
    Ok(())
}

pub(crate) fn require_range(name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || max < value {
        return Err(ValidationError::new(format!(
            "{} must be between {} and {}",
            name, min, max
        ))
        .into());
    }
    Ok(())
}

pub(crate) fn require_positive(name: &str, value: i64) -> Result<()> {
    if value < 1 {
        return Err(ValidationError::new(format!("{} must be 1 or more", name)).into());
    }
    Ok(())
}

pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::new(format!("{} must not be empty", name)).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("https://example.backlog.com").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("example.backlog.com").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("abcdef").is_ok());
        assert!(validate_api_key("").is_err());
        assert!(validate_api_key("   ").is_err());
    }

    #[test]
    fn test_require_helpers_raise_validation_errors() {
        assert!(require_range("count", 100, 1, 100).is_ok());
        assert!(require_range("count", 101, 1, 100).is_err_and(|e| e.is_validation()));
        assert!(require_positive("id", 1).is_ok());
        let err = require_positive("id", 0).expect_err("zero");
        assert_eq!(err.to_string(), "id must be 1 or more");
        assert!(require_non_empty("name", "").is_err_and(|e| e.is_validation()));
    }
}
