//! Application state for auth.

use std::sync::Arc;

use axum::extract::FromRef;
use movieplanner_core::auth::{
    normalize_email, validate_registration, AuthError as CoreError, Claims,
};
use movieplanner_core::storage::{RepositoryError, UserRepository};
use movieplanner_core::user::NewUser;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::tokens::TokenService;

/// Shared state for auth handlers and extractors.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: PasswordHasher,
    pub tokens: TokenService,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(users: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl),
            config,
        }
    }

    /// Registers a new account and returns its ID.
    pub async fn register(&self, email: &str, password: &str) -> Result<i64, AuthError> {
        validate_registration(email, password)?;
        let email = normalize_email(email);

        let password_hash = self.hasher.hash(password).await?;
        let id = self
            .users
            .create_user(&NewUser::new(email.as_str(), password_hash))
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists { .. } => AuthError::Core(CoreError::EmailTaken),
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = id, "User registered");
        Ok(id)
    }

    /// Checks credentials and returns a signed token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = normalize_email(email);
        let Some(user) = self.users.get_user_by_email(&email).await? else {
            tracing::debug!("Login for unknown email");
            return Err(CoreError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::debug!(user_id = user.id, "Login with wrong password");
            return Err(CoreError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.tokens.issue(user.id)
    }

    /// Validates a bearer token.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.validate(token)
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
