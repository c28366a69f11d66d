//! Cached movie repository decorator.
//!
//! Wraps a `MovieRepository` implementation with a read-through,
//! write-invalidate cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use movieplanner_core::cache::{from_cache_bytes, is_fresh, to_cache_bytes, Cache};
use movieplanner_core::clock::{Clock, SystemClock};
use movieplanner_core::movie::{Movie, MovieKey};
use movieplanner_core::storage::{MovieRepository, Result};

/// What is stored under a movie's cache key.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    movie: Movie,
    cached_at: DateTime<Utc>,
}

/// Cached movie repository decorator.
///
/// - **Reads**: a fresh cache entry is served without touching the wrapped
///   repository. A missing, stale or unreadable entry falls through to the
///   repository and the result is stored with the current time.
/// - **Writes**: delegated first; on success the entry is deleted so the next
///   read refetches. `create_movie` and `list_movies` never touch the cache.
///
/// Cache backend failures are logged and never surface to callers. Repository
/// errors are returned as-is and never cached.
///
/// Every invalidation bumps a per-key generation. A read that started before
/// an invalidation does not store what it fetched, so an update or delete is
/// never undone by a slower concurrent read.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedMovieRepository<R, C>
where
    R: MovieRepository + ?Sized,
    C: Cache + ?Sized,
{
    repository: Arc<R>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    generations: Mutex<HashMap<String, u64>>,
}

impl<R, C> CachedMovieRepository<R, C>
where
    R: MovieRepository + ?Sized,
    C: Cache + ?Sized,
{
    /// Creates a new cached movie repository using the system clock.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Age at which a cached movie becomes stale
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self::with_clock(repository, cache, ttl, Arc::new(SystemClock))
    }

    /// Creates a new cached movie repository with an explicit time source.
    pub fn with_clock(
        repository: Arc<R>,
        cache: Arc<C>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            cache,
            clock,
            ttl,
            generations: Mutex::new(HashMap::new()),
        }
    }

    async fn generation(&self, cache_key: &str) -> u64 {
        let generations = self.generations.lock().await;
        generations.get(cache_key).copied().unwrap_or(0)
    }

    /// Writes a fetched movie unless the key was invalidated since `generation`
    /// was read. The generation is checked again after the write because an
    /// invalidation may land between the check and the write.
    async fn store(&self, cache_key: &str, entry: &CacheEntry, generation: u64) {
        if self.generation(cache_key).await != generation {
            tracing::trace!(%cache_key, "Movie changed during fetch, not caching");
            return;
        }

        let bytes = match to_cache_bytes(entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%cache_key, error = %err, "Failed to encode movie for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(cache_key, &bytes, Some(self.ttl)).await {
            tracing::warn!(%cache_key, error = %err, "Failed to cache movie");
            return;
        }

        if self.generation(cache_key).await != generation {
            tracing::trace!(%cache_key, "Movie changed while caching, dropping entry");
            if let Err(err) = self.cache.delete(cache_key).await {
                tracing::warn!(%cache_key, error = %err, "Failed to drop outdated movie");
            }
            return;
        }

        tracing::debug!(%cache_key, "Cached movie");
    }

    async fn invalidate(&self, key: &R::Key) {
        let cache_key = key.cache_key();
        {
            let mut generations = self.generations.lock().await;
            *generations.entry(cache_key.clone()).or_insert(0) += 1;
        }
        match self.cache.delete(&cache_key).await {
            Ok(()) => tracing::debug!(%cache_key, "Invalidated cached movie"),
            Err(err) => {
                tracing::warn!(%cache_key, error = %err, "Failed to invalidate movie cache")
            }
        }
    }
}

#[async_trait]
impl<R, C> MovieRepository for CachedMovieRepository<R, C>
where
    R: MovieRepository + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    type Key = R::Key;

    async fn get_movie(&self, key: &Self::Key) -> Result<Movie> {
        let cache_key = key.cache_key();
        let now = self.clock.now();

        // Check cache first
        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match from_cache_bytes::<CacheEntry>(&bytes) {
                Ok(entry) if is_fresh(entry.cached_at, now, self.ttl) => {
                    tracing::trace!(%cache_key, "Cache hit for movie");
                    return Ok(entry.movie);
                }
                Ok(entry) => {
                    tracing::trace!(%cache_key, cached_at = %entry.cached_at, "Cached movie is stale");
                }
                Err(err) => {
                    tracing::warn!(%cache_key, error = %err, "Cached movie could not be decoded");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%cache_key, error = %err, "Cache read failed, falling back to repository");
            }
        }

        // Cache miss - fetch from repository
        tracing::trace!(%cache_key, "Cache miss for movie");
        let generation = self.generation(&cache_key).await;
        let movie = self.repository.get_movie(key).await?;

        let entry = CacheEntry {
            movie,
            cached_at: now,
        };
        self.store(&cache_key, &entry, generation).await;

        Ok(entry.movie)
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.repository.list_movies().await
    }

    async fn create_movie(&self, movie: &Movie) -> Result<Self::Key> {
        let key = self.repository.create_movie(movie).await?;
        tracing::info!(%key, title = %movie.title, "Movie created");
        Ok(key)
    }

    async fn update_movie(&self, key: &Self::Key, movie: &Movie) -> Result<()> {
        // 1. Persist to storage
        self.repository.update_movie(key, movie).await?;

        // 2. Invalidate cache (will be repopulated on next read)
        self.invalidate(key).await;

        tracing::info!(%key, title = %movie.title, "Movie updated");
        Ok(())
    }

    async fn delete_movie(&self, key: &Self::Key) -> Result<()> {
        // 1. Persist deletion to storage
        self.repository.delete_movie(key).await?;

        // 2. Invalidate cache
        self.invalidate(key).await;

        tracing::info!(%key, "Movie deleted");
        Ok(())
    }
}
