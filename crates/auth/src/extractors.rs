//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use movieplanner_core::auth::{parse_bearer_token, AuthError as CoreError};

use crate::error::AuthError;
use crate::AuthState;

/// Extractor for an authenticated caller. Rejects with 401 unless the request
/// carries `Authorization: Bearer <token>` with a valid, unexpired token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(CoreError::MissingToken)?
            .to_str()
            .map_err(|_| CoreError::MalformedHeader)?;

        let token = parse_bearer_token(header_value)?;
        let claims = auth_state.authenticate(token)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| CoreError::InvalidToken("subject is not a user id".to_string()))?;

        Ok(CurrentUser { user_id })
    }
}
