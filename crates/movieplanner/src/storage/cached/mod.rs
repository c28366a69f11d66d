//! Cached repository decorator.
//!
//! Wraps a `MovieRepository` with read-through caching:
//!
//! - **Reads**: check the cache first; on a miss or a stale entry fetch from
//!   the repository and store the result
//! - **Writes**: persist to the repository, then invalidate the cached entry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("movieplanner.db").await?);
//! let cache = Arc::new(MemoryCache::new());
//!
//! let cached_repo = CachedMovieRepository::new(repo, cache, Duration::from_secs(300));
//! ```

mod movie;

pub use movie::CachedMovieRepository;
