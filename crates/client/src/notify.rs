//! User-visible notifications.
//!
//! Every form submission catches its own request's failure and turns it
//! into a transient notification; nothing propagates to a global handler.
//! The API's `detail` message is shown verbatim when present, otherwise
//! the caller's fixed fallback. Transient network failures and permanent
//! rejections deliberately share this one pathway.

use crate::error::ApiError;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// A success notification with a fixed message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// An error notification with a fixed message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Translate a failed request into a notification: the API's `detail`
    /// verbatim when it parsed, else `fallback`.
    #[must_use]
    pub fn for_error(err: &ApiError, fallback: &str) -> Self {
        let message = err.detail().map_or_else(|| fallback.to_string(), String::from);
        Self::error(message)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Success => write!(f, "ok: {}", self.message),
            Severity::Error => write!(f, "error: {}", self.message),
        }
    }
}
