use chrono::{DateTime, Duration, Utc};

use super::{AuthError, Claims};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Normalizes an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates registration input.
pub fn validate_registration(email: &str, password: &str) -> Result<(), AuthError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(AuthError::InvalidEmail),
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Extracts the token from an `Authorization` header value.
pub fn parse_bearer_token(header: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    if scheme != "Bearer" {
        return Err(AuthError::MalformedHeader);
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Builds the claims for a token issued to `user_id` at `now`.
pub fn build_claims(user_id: i64, now: DateTime<Utc>, ttl: Duration) -> Claims {
    Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn validate_registration_accepts_valid_input() {
        assert_eq!(validate_registration("neo@matrix.io", "redpill!"), Ok(()));
    }

    #[test]
    fn validate_registration_rejects_email_without_at() {
        assert_eq!(
            validate_registration("neo.matrix.io", "redpill!"),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            validate_registration("@matrix.io", "redpill!"),
            Err(AuthError::InvalidEmail)
        );
    }

    #[test]
    fn validate_registration_rejects_short_password() {
        assert_eq!(
            validate_registration("neo@matrix.io", "short"),
            Err(AuthError::WeakPassword(MIN_PASSWORD_LEN))
        );
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Neo@Matrix.IO "), "neo@matrix.io");
    }

    #[test]
    fn parse_bearer_token_extracts_token() {
        assert_eq!(parse_bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn parse_bearer_token_rejects_other_schemes() {
        assert_eq!(
            parse_bearer_token("Basic dXNlcjpwYXNz"),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(parse_bearer_token("Bearer"), Err(AuthError::MalformedHeader));
        assert_eq!(parse_bearer_token("Bearer   "), Err(AuthError::MalformedHeader));
        assert_eq!(parse_bearer_token("abc.def.ghi"), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn build_claims_sets_window() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let claims = build_claims(42, now, Duration::hours(24));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }
}
