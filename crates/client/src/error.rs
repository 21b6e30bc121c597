//! API request errors.

use thiserror::Error;

/// Errors surfaced by the HTTP adapter.
///
/// The adapter does not retry, does not refresh tokens, and does not act on
/// status codes; it only records them. Deciding what a 401 means is the
/// caller's job (see [`crate::guard::recover_unauthorized`]).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The external API rejected the request with a non-2xx status.
    /// `detail` is the API's error payload message when the body parsed as
    /// `{ "detail": ... }`, absent otherwise.
    #[error("API rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: u16,
        detail: Option<String>,
    },

    /// A 2xx response body failed to decode into the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the API rejected the request for lack of (valid) credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// The API's error message, when one was parseable.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_detail() {
        let err = ApiError::Api {
            status: 400,
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "API rejected request (400): Invalid credentials");
    }

    #[test]
    fn test_api_error_display_without_detail() {
        let err = ApiError::Api {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "API rejected request (502): no detail");
    }

    #[test]
    fn test_is_unauthorized_only_for_401() {
        let unauthorized = ApiError::Api {
            status: 401,
            detail: None,
        };
        let forbidden = ApiError::Api {
            status: 403,
            detail: None,
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Transport("refused".to_string()).is_unauthorized());
    }
}
