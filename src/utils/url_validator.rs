//! Validation of URLs submitted for shortening.

use url::Url;

/// Errors describing why a URL cannot be shortened.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is an absolute `http://` or `https://` URL.
///
/// The scheme prefix is matched literally (case-sensitive) before the string
/// is handed to the URL parser, so `HTTP://example.com` and
/// `javascript:alert(1)` are both rejected. The input itself is not
/// rewritten; callers store exactly what was submitted.
///
/// # Errors
///
/// Returns [`UrlValidationError`] describing the first failed rule.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/a?b=c#d").is_ok());
        assert!(validate_url("https://sub.example.com:8443/path").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme)
        );
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme)
        );
        assert_eq!(
            validate_url("example.com"),
            Err(UrlValidationError::UnsupportedScheme)
        );
    }

    #[test]
    fn test_rejects_malformed_after_prefix() {
        assert!(matches!(
            validate_url("http://"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("https://exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }
}
