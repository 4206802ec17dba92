//! Client error types

use thiserror::Error;

/// Errors returned by a [`StorefrontClient`](crate::StorefrontClient)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The service could not be reached or did not answer in time
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The requested record does not exist
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Credentials were rejected
    #[error("invalid email or password")]
    Unauthorized,

    /// The request was rejected before reaching the service
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ClientError::NotFound {
            kind: "restaurant",
            id: "r9".to_string(),
        };
        assert_eq!(err.to_string(), "restaurant 'r9' not found");
        assert_eq!(
            ClientError::Unauthorized.to_string(),
            "invalid email or password"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
