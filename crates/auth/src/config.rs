use std::time::Duration;

/// Secret used when `JWT_SECRET` is not set. Only suitable for local development.
pub const DEV_JWT_SECRET: &str = "movieplanner-dev-secret-change-me";

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: HMAC secret for signing tokens (default: a development secret, logged as a warning)
    /// - `JWT_TTL_HOURS`: Token lifetime in hours (default: 24)
    /// - `BCRYPT_COST`: bcrypt work factor, 4 to 31 (default: 12)
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let token_ttl = std::env::var("JWT_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .and_then(|hours| hours.checked_mul(60 * 60))
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(24 * 60 * 60)); // 24 hours default

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self {
            jwt_secret,
            token_ttl,
            bcrypt_cost,
        }
    }

    /// Configuration with the given secret and the default lifetimes.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl: Duration::from_secs(24 * 60 * 60),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}
