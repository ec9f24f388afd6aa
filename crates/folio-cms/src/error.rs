//! Error types for CMS loading.

use thiserror::Error;

/// Result type alias using `CmsError`.
pub type Result<T> = std::result::Result<T, CmsError>;

/// Errors raised while fetching or decoding CMS content.
///
/// None of these surface to the user: the load boundary logs them and the
/// current collections stay on screen, indistinguishable from the
/// no-credentials mode.
#[derive(Error, Debug)]
pub enum CmsError {
    /// The CMS answered with a non-2xx status.
    #[error("CMS responded with HTTP {status}")]
    Http {
        /// Response status code.
        status: u16,
    },

    /// The request could not be sent or its body could not be read.
    #[error("CMS request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON shape.
    #[error("CMS payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = CmsError::Http { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CmsError = bad.unwrap_err().into();
        assert!(err.to_string().contains("decoded"));
    }
}
