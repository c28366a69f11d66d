use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Path to SQLite database file (default: "movieplanner.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// TMDb API key. Required when the `tmdb` feature is enabled.
    #[cfg_attr(not(feature = "tmdb"), allow(dead_code))]
    pub tmdb_api_key: Option<String>,
    #[cfg_attr(not(feature = "tmdb"), allow(dead_code))]
    pub tmdb_base_url: String,
    #[cfg_attr(not(feature = "tmdb"), allow(dead_code))]
    pub tmdb_image_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `SQLITE_PATH` - SQLite database path (default: "movieplanner.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `TMDB_API_KEY` - TMDb API key (no default)
    /// - `TMDB_BASE_URL` - TMDb API root (default: "https://api.themoviedb.org/3")
    /// - `TMDB_IMAGE_BASE_URL` - Poster URL prefix (default: "https://image.tmdb.org/t/p/w500")
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "movieplanner.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            tmdb_api_key: env::var("TMDB_API_KEY").ok().filter(|k| !k.is_empty()),
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            tmdb_image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
