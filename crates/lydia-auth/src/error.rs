//! Rejection reasons of the authentication chain.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Why a request was not allowed through.
///
/// The display strings are the client-facing messages. They never say which
/// check of a credential failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no credential found")]
    NoCredential,
    #[error("invalid or expired credential")]
    InvalidCredential,
    #[error("account no longer exists")]
    AccountNotFound,
    #[error("account disabled")]
    AccountDisabled,
    #[error("role not permitted")]
    InsufficientRole,
    #[error("insufficient company/dashboard privilege")]
    InsufficientPermission,
    /// Unexpected failure, e.g. the account store is unreachable
    #[error("internal authentication error")]
    Internal(anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::NoCredential
            | AuthError::InvalidCredential
            | AuthError::AccountNotFound
            | AuthError::AccountDisabled => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole | AuthError::InsufficientPermission => {
                StatusCode::FORBIDDEN
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::NoCredential => "no_credential",
            AuthError::InvalidCredential => "invalid_credential",
            AuthError::AccountNotFound => "account_not_found",
            AuthError::AccountDisabled => "account_disabled",
            AuthError::InsufficientRole => "insufficient_role",
            AuthError::InsufficientPermission => "insufficient_permission",
            AuthError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AuthError::Internal(error) => {
                tracing::error!(error = ?error, "Authentication failed unexpectedly");
            }
            _ => {
                tracing::warn!(kind = self.kind(), status = %status.as_u16(), "Request rejected");
            }
        }

        let body = Json(json!({
            "success": false,
            "status": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
