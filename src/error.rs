//! Request failure taxonomy and response mapping.
//!
//! # Responsibilities
//! - Classify failures as validation, dependency, or internal
//! - Map each class to a fixed, generic HTTP response
//! - Route diagnostic detail to structured logs, never to the client
//!
//! # Design Decisions
//! - Response bodies are compile-time constants; nothing request-derived
//!   is ever interpolated into them
//! - Fail closed: an unclassified error renders the internal-fault body
//! - Log lines pass through control-character stripping before emission

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::observability::redact::clean_for_log;

/// Errors that can occur while handling a portal request.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The request input failed validation. Client-correctable.
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    /// An upstream dependency (datastore, subprocess, profile store) failed.
    #[error("{what} unavailable: {source}")]
    Dependency {
        what: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An internal fault. Nothing about it reaches the client.
    #[error("internal fault: {0}")]
    Internal(String),
}

/// Result type for portal request handling.
pub type PortalResult<T> = Result<T, PortalError>;

impl PortalError {
    /// Validation failure with the given reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        PortalError::Validation {
            reason: reason.into(),
        }
    }

    /// Dependency failure for the named subsystem.
    pub fn dependency(
        what: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortalError::Dependency {
            what,
            source: Box::new(source),
        }
    }

    /// The status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            PortalError::Validation { .. } => StatusCode::BAD_REQUEST,
            PortalError::Dependency { .. } => StatusCode::BAD_GATEWAY,
            PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed body returned to the client for this error class.
    fn client_body(&self) -> &'static str {
        match self {
            PortalError::Validation { .. } => "Invalid request",
            PortalError::Dependency { .. } => "A required service is unavailable",
            PortalError::Internal(_) => "Internal error",
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Detail stays on the server side. Untrusted input can appear in
        // the message, so strip control characters before logging.
        match &self {
            PortalError::Validation { reason } => {
                tracing::warn!(reason = %clean_for_log(reason), "Request rejected");
            }
            PortalError::Dependency { what, source } => {
                tracing::error!(
                    dependency = what,
                    error = %clean_for_log(&source.to_string()),
                    "Dependency failure"
                );
            }
            PortalError::Internal(detail) => {
                tracing::error!(error = %clean_for_log(detail), "Internal fault");
            }
        }

        (status, self.client_body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = PortalError::validation("name too long");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_body(), "Invalid request");
    }

    #[test]
    fn test_dependency_maps_to_bad_gateway() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "seed missing");
        let err = PortalError::dependency("datastore", io);
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("datastore"));
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = PortalError::Internal("state poisoned".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_body_never_carries_detail() {
        // The body is a fixed string; the reason must not leak through.
        let err = PortalError::validation("input was '; DROP TABLE users --");
        assert_eq!(err.client_body(), "Invalid request");
    }
}
