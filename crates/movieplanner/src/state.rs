//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Backends are picked by feature flags; every combination
//! ends up as the same trait objects behind the cache decorator.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use movieplanner_auth::{AuthConfig, AuthState};
use movieplanner_core::cache::Cache;
use movieplanner_core::movie::MovieService;
use movieplanner_core::storage::{MovieRepository, UserRepository};

use crate::config::Config;
use crate::storage::CachedMovieRepository;

/// Key type movies are addressed by in this build.
#[cfg(feature = "tmdb")]
pub type ActiveKey = movieplanner_core::movie::MovieTitle;
#[cfg(not(feature = "tmdb"))]
pub type ActiveKey = movieplanner_core::movie::MovieId;

#[cfg(feature = "inmemory")]
type Storage = crate::storage::InMemoryRepository;
#[cfg(feature = "sqlite")]
type Storage = crate::storage::SqliteRepository;

/// Names of the backends compiled into this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Backends {
    pub storage: &'static str,
    pub cache: &'static str,
    pub movies: &'static str,
}

impl Backends {
    pub const fn active() -> Self {
        Self {
            storage: if cfg!(feature = "sqlite") {
                "sqlite"
            } else {
                "inmemory"
            },
            cache: if cfg!(feature = "redis") {
                "redis"
            } else {
                "memory"
            },
            movies: if cfg!(feature = "tmdb") {
                "tmdb"
            } else {
                "storage"
            },
        }
    }
}

/// Shared application state.
///
/// This is cloned for each request handler. Clones share the same cache
/// decorator and repositories.
#[derive(Clone)]
pub struct AppState {
    /// Movie use cases over the cached movie source.
    pub movies: MovieService<ActiveKey>,
    /// Accounts and token validation.
    pub auth: AuthState,
    pub backends: Backends,
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

impl AppState {
    /// Wires a movie source and a cache into the decorator and builds the state.
    pub fn build(
        movies: Arc<dyn MovieRepository<Key = ActiveKey>>,
        cache: Arc<dyn Cache>,
        cache_ttl: Duration,
        users: Arc<dyn UserRepository>,
        auth_config: AuthConfig,
    ) -> Self {
        let cached = Arc::new(CachedMovieRepository::new(movies, cache, cache_ttl));

        Self {
            movies: MovieService::new(cached),
            auth: AuthState::new(users, auth_config),
            backends: Backends::active(),
        }
    }

    /// Creates the state for the backends selected at compile time.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let storage = open_storage(config).await?;
        let cache = open_cache(config).await?;
        let movies = movie_source(storage.clone(), config)?;

        let backends = Backends::active();
        tracing::info!(
            storage = backends.storage,
            cache = backends.cache,
            movies = backends.movies,
            cache_ttl_seconds = config.cache_ttl_seconds,
            "Backends initialized"
        );

        Ok(Self::build(
            movies,
            cache,
            config.cache_ttl(),
            storage,
            AuthConfig::from_env(),
        ))
    }
}

// ============================================================================
// Backend factories
// ============================================================================

#[cfg(feature = "inmemory")]
async fn open_storage(_config: &Config) -> anyhow::Result<Arc<Storage>> {
    Ok(Arc::new(Storage::new()))
}

#[cfg(feature = "sqlite")]
async fn open_storage(config: &Config) -> anyhow::Result<Arc<Storage>> {
    Ok(Arc::new(Storage::new(&config.sqlite_path).await?))
}

#[cfg(feature = "memory")]
async fn open_cache(_config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    Ok(Arc::new(crate::cache::MemoryCache::new()))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    Ok(Arc::new(crate::cache::RedisCache::new(&config.redis_url).await?))
}

#[cfg(not(feature = "tmdb"))]
fn movie_source(
    storage: Arc<Storage>,
    _config: &Config,
) -> anyhow::Result<Arc<dyn MovieRepository<Key = ActiveKey>>> {
    Ok(storage)
}

#[cfg(feature = "tmdb")]
fn movie_source(
    _storage: Arc<Storage>,
    config: &Config,
) -> anyhow::Result<Arc<dyn MovieRepository<Key = ActiveKey>>> {
    use anyhow::Context;

    use crate::storage::{TmdbCatalog, TmdbConfig};

    let api_key = config
        .tmdb_api_key
        .clone()
        .context("TMDB_API_KEY must be set when the tmdb feature is enabled")?;

    let mut tmdb = TmdbConfig::new(api_key).with_base_url(&config.tmdb_base_url);
    tmdb.image_base_url = config.tmdb_image_base_url.clone();

    Ok(Arc::new(TmdbCatalog::new(tmdb)))
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(all(test, not(feature = "tmdb")))]
mod test_support {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::inmemory::InMemoryRepository;

    impl Default for AppState {
        /// In-memory movies, users and cache; fast bcrypt.
        fn default() -> Self {
            let storage = Arc::new(InMemoryRepository::new());
            Self::build(
                storage.clone(),
                Arc::new(MemoryCache::new()),
                Duration::from_secs(300),
                storage,
                AuthConfig::with_secret("test-secret").with_bcrypt_cost(4),
            )
        }
    }
}
