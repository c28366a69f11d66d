//! In-memory storage backend.
//!
//! Stores all data in maps wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use movieplanner::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
