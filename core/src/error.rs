//! Error types for the todo sync core.
//!
//! # Design
//! The view only cares about two kinds of failure: the request never got a
//! response, or it got one that says no. `ApiError` keeps enough detail for
//! logs; `ApiError::kind` folds it into the two-way `FailureKind`.

use thiserror::Error;

/// Errors produced while building, executing or parsing a todo request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The host could not complete the round-trip (connect, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404, or the target is no longer loaded locally.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A 2xx response body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Coarse failure classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not be completed.
    TransportFailure,
    /// The request completed but the server did not accept it.
    ServerRejection,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport(_) | ApiError::SerializationError(_) => {
                FailureKind::TransportFailure
            }
            ApiError::NotFound | ApiError::HttpError { .. } | ApiError::DeserializationError(_) => {
                FailureKind::ServerRejection
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(
            ApiError::Transport("refused".into()).kind(),
            FailureKind::TransportFailure
        );
        assert_eq!(ApiError::NotFound.kind(), FailureKind::ServerRejection);
        assert_eq!(
            ApiError::HttpError {
                status: 500,
                body: String::new()
            }
            .kind(),
            FailureKind::ServerRejection
        );
        assert_eq!(
            ApiError::DeserializationError("eof".into()).kind(),
            FailureKind::ServerRejection
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::HttpError {
            status: 422,
            body: "blank title".into(),
        };
        assert_eq!(err.to_string(), "HTTP 422: blank title");
    }
}
