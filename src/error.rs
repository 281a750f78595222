//! Error types for the data-access layer.
//!
//! Every API operation fails with an [`ApiError`] that names the operation
//! it belongs to. The controller never swallows one: it records a
//! connection-error state for the UI and logs the detail.

use thiserror::Error;

/// Errors surfaced by [`crate::api::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("{operation}: network error: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status. The body is not
    /// inspected; status and operation are all the caller gets.
    #[error("{operation}: HTTP {status}")]
    Http {
        operation: &'static str,
        status: u16,
    },

    /// A single-resource fetch came back 404.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// A payload could not be encoded, or a response body did not match
    /// the expected shape.
    #[error("{operation}: invalid body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True when the request never reached the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// True for a missing single resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "Check your internet connection and reload.",
            ApiError::Http { .. } => "The server rejected the request. Reload and try again.",
            ApiError::NotFound { .. } => "The record may have been deleted. Reload the list.",
            ApiError::Decode { .. } => "The server sent an unexpected response. Update the app.",
        }
    }
}

/// Serializable error representation for the presentation layer.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiError {
    pub message: String,
    pub kind: ErrorKind,
    pub can_retry: bool,
    pub recovery_suggestion: String,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Network,
    Http,
    NotFound,
    Decode,
}

impl From<&ApiError> for UiError {
    fn from(err: &ApiError) -> Self {
        let kind = match err {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::Decode { .. } => ErrorKind::Decode,
        };

        UiError {
            message: err.to_string(),
            kind,
            // Reload is the only recovery the app offers; a missing record
            // or a malformed body won't change on retry.
            can_retry: matches!(kind, ErrorKind::Network | ErrorKind::Http),
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}
