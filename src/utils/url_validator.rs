//! Target URL validation.
//!
//! Accepted URLs are stored exactly as submitted; validation never rewrites
//! them beyond adding a missing `http://` scheme.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("target_url is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a target URL and returns the form that should be stored.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. Control characters (tab, CR, LF and the like) are rejected
/// 3. The URL must be absolute with an `http` or `https` scheme
/// 4. The URL must name a host
/// 5. Input without a scheme (`example.com/page`) is retried as `http://...`
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs and
/// [`UrlValidationError::UnsupportedProtocol`] for other schemes such as
/// `javascript:` or `ftp:`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url("https://example.com").unwrap(), "https://example.com");
/// assert_eq!(validate_target_url("example.com/a").unwrap(), "http://example.com/a");
/// assert!(validate_target_url("not a url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // `Url::parse` drops tabs and newlines silently; the stored string must not contain them.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    match check_absolute(input) {
        Ok(()) => Ok(input.to_string()),
        Err(UrlValidationError::InvalidFormat(reason)) if !input.contains("://") => {
            let prefixed = format!("http://{input}");
            match check_absolute(&prefixed) {
                Ok(()) => Ok(prefixed),
                Err(_) => Err(UrlValidationError::InvalidFormat(reason)),
            }
        }
        Err(e) => Err(e),
    }
}

fn check_absolute(candidate: &str) -> Result<(), UrlValidationError> {
    let url =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url_verbatim() {
        assert_eq!(
            validate_target_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_preserves_path_query_and_fragment() {
        let url = "https://Example.com:443/Path?q=Rust#Section";
        assert_eq!(validate_target_url(url).unwrap(), url);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_target_url("  http://example.com/a  ").unwrap(),
            "http://example.com/a"
        );
    }

    #[test]
    fn test_adds_missing_scheme() {
        assert_eq!(
            validate_target_url("example.com/page").unwrap(),
            "http://example.com/page"
        );
    }

    #[test]
    fn test_localhost_with_port() {
        assert_eq!(
            validate_target_url("http://localhost:3000/test").unwrap(),
            "http://localhost:3000/test"
        );
    }

    #[test]
    fn test_ip_address() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(validate_target_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_target_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            validate_target_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_embedded_control_characters() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\r\nmple.com/",
            "example.com/\u{7f}",
        ] {
            assert!(
                matches!(
                    validate_target_url(url),
                    Err(UrlValidationError::InvalidFormat(_))
                ),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ftp_protocol() {
        assert_eq!(
            validate_target_url("ftp://example.com/file.txt"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_javascript_protocol() {
        assert_eq!(
            validate_target_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_data_protocol() {
        assert_eq!(
            validate_target_url("data:text/plain,Hello"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_scheme_without_host() {
        assert!(validate_target_url("http://").is_err());
    }

    #[test]
    fn test_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert_eq!(validate_target_url(&url).unwrap().len(), url.len());
    }
}
