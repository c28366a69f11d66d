//! Remote movie catalog backed by the TMDb REST API.
//!
//! Movies are addressed by title. The catalog is read-only: writes fail with
//! `RepositoryError::Unsupported`.

mod catalog;
mod types;

#[cfg(feature = "tmdb")]
pub use catalog::{TmdbCatalog, TmdbConfig};
