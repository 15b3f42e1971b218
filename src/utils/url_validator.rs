//! Validation of target URLs before they are stored.
//!
//! Accepted URLs are stored in their canonical serialization as produced by
//! the `url` crate (lowercase scheme and host, IDNA hosts, percent-encoded
//! path). That form is plain ASCII and can always be sent back in a
//! `Location` header.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be blank")]
    Blank,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute HTTP(S) URL and returns its canonical form.
///
/// Surrounding whitespace is ignored. Query strings and fragments are kept.
///
/// # Errors
///
/// Returns [`UrlValidationError::Blank`] for empty or whitespace-only input.
/// Returns [`UrlValidationError::InvalidFormat`] for relative or malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     canonicalize_url("HTTPS://EXAMPLE.COM/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn canonicalize_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Blank);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    Ok(url.into())
}
