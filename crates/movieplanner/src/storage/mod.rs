//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `movieplanner_core::storage`. The local backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `tmdb`: serve movies from the TMDb catalog by title. Users are still
//!   kept in the local backend.
//!
//! `inmemory` and `sqlite` are mutually exclusive.
//!
//! # Examples
//!
//! ```bash
//! cargo build -p movieplanner --no-default-features --features sqlite,memory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p movieplanner --features sqlite"
);

pub mod cached;

// Always compiled so tests can run against it regardless of features.
#[cfg_attr(not(feature = "inmemory"), allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg_attr(not(feature = "tmdb"), allow(dead_code))]
pub mod tmdb;

pub use cached::CachedMovieRepository;
#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
#[cfg(feature = "tmdb")]
pub use tmdb::{TmdbCatalog, TmdbConfig};
