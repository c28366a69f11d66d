use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use movieplanner_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// Auth errors for the movieplanner_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants
/// for I/O operations that can't be in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (validation, token parsing, etc.)
    #[error(transparent)]
    Core(#[from] movieplanner_core::auth::AuthError),

    /// User store failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// bcrypt failure or a panicked hashing task
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Token could not be signed
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use movieplanner_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(core_err) => match core_err {
                CoreError::InvalidEmail | CoreError::WeakPassword(_) => {
                    (StatusCode::BAD_REQUEST, self.to_string())
                }
                CoreError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
                CoreError::InvalidCredentials
                | CoreError::MissingToken
                | CoreError::MalformedHeader
                | CoreError::InvalidToken(_)
                | CoreError::TokenExpired => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::Storage(_) => {
                    tracing::error!("Auth error: {}", self);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AuthError::Repository(repo_err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(repo_err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    tracing::error!("User store error: {}", self);
                }
                (status, self.to_string())
            }
            AuthError::Hashing(_) | AuthError::Signing(_) => {
                tracing::error!("Auth error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
