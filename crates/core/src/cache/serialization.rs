//! Pure functions for serializing/deserializing values to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a value to JSON bytes.
pub fn to_cache_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a value.
pub fn from_cache_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::Movie;

    #[test]
    fn test_movie_survives_cache_bytes() {
        let movie = Movie::new("Inception", 8.8)
            .with_overview("A thief who steals corporate secrets")
            .with_recommendations(["Interstellar", "The Prestige"]);

        let bytes = to_cache_bytes(&movie).unwrap();
        let decoded: Movie = from_cache_bytes(&bytes).unwrap();

        assert_eq!(decoded, movie);
    }

    #[test]
    fn test_bytes_are_json() {
        let bytes = to_cache_bytes(&Movie::new("Heat", 8.3)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"title\":\"Heat\""));
    }

    #[test]
    fn test_invalid_bytes() {
        let result: Result<Movie> = from_cache_bytes(b"not json");
        assert!(matches!(result, Err(SerializationError::DeserializeFailed(_))));
    }
}
