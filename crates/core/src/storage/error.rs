use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// The remote movie catalog could not be reached or answered garbage.
    #[error("Provider failure: {0}")]
    ProviderFailure(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Operation not supported: {0}")]
    Unsupported(String),
}

impl RepositoryError {
    /// Shorthand for a missing movie.
    pub fn movie_not_found(key: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Movie",
            id: key.to_string(),
        }
    }

    /// Shorthand for a missing user.
    pub fn user_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "User",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::movie_not_found(42);
        assert_eq!(error.to_string(), "Movie not found: 42");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "neo@matrix.io".to_string(),
        };
        assert_eq!(error.to_string(), "User already exists: neo@matrix.io");
    }

    #[test]
    fn test_repository_error_provider_failure_display() {
        let error = RepositoryError::ProviderFailure("status 500".to_string());
        assert_eq!(error.to_string(), "Provider failure: status 500");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: movies".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: movies");
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("missing required field".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing required field"
        );
    }

    #[test]
    fn test_repository_error_unsupported_display() {
        let error = RepositoryError::Unsupported("catalog is read-only".to_string());
        assert_eq!(
            error.to_string(),
            "Operation not supported: catalog is read-only"
        );
    }
}
