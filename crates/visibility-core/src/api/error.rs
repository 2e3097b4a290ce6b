//! API Errors
//!
//! The three failure shapes a request can end in. Call sites treat them the
//! same way: log, notify with the best message available, keep the old UI.

use std::fmt;

use crate::model::ApiMessage;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// Non-success status; `message` is the backend's `error` text when the body had one
    Status { status: u16, message: Option<String> },
    /// Success status but a body we could not decode
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|msg| msg.error.or(msg.message))
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Server-provided message verbatim, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Status { status, message: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_is_surfaced_verbatim() {
        let err = ApiError::from_response(404, r#"{"error": "Query no encontrada"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.user_message("Failed"), "Query no encontrada");
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Status { status: 502, message: None });
        assert_eq!(err.user_message("Failed to save query"), "Failed to save query");
    }

    #[test]
    fn test_network_and_decode_use_fallback() {
        assert_eq!(ApiError::Network("offline".into()).user_message("Try again"), "Try again");
        assert_eq!(ApiError::Decode("eof".into()).user_message("Try again"), "Try again");
    }
}
