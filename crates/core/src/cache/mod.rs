mod error;
mod freshness;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use freshness::{expires_at, is_fresh};
pub use keys::{movie_key, movie_title_key};
pub use serialization::{from_cache_bytes, to_cache_bytes, SerializationError};
pub use traits::Cache;
