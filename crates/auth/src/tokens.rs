use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use movieplanner_core::auth::{build_claims, AuthError as CoreError, Claims};

use crate::error::AuthError;

/// Issues and validates HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::hours(24)),
        }
    }

    /// Issues a token for `user_id` valid from now.
    pub fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for `user_id` as if signed at `now`.
    pub fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = build_claims(user_id, now, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Checks signature, algorithm and expiry, returning the claims.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => CoreError::InvalidToken(e.to_string()),
            }
        })?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(24 * 60 * 60))
    }

    #[test]
    fn issued_token_validates() {
        let token = service().issue(7).unwrap();
        let claims = service().validate(&token).unwrap();

        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - chrono::Duration::hours(48);
        let token = service().issue_at(7, issued).unwrap();

        let err = service().validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::TokenExpired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new("other-secret", Duration::from_secs(60 * 60));
        let token = other.issue(7).unwrap();

        let err = service().validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::InvalidToken(_))));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = service().validate("not.a.jwt").unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::InvalidToken(_))));
    }
}
