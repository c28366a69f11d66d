use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{MovieRepository, RepositoryError, Result};

use super::{validate_movie, Advice, Movie, MovieKey};

/// A movie together with the advice derived from its rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    /// Human readable recommendation.
    pub advice: String,
    pub verdict: Advice,
}

impl MovieDetails {
    pub fn from_movie(movie: Movie) -> Self {
        let verdict = Advice::from_rating(movie.rating);
        Self {
            movie,
            advice: verdict.message().to_string(),
            verdict,
        }
    }
}

/// Use cases over a movie repository.
///
/// The repository is usually the caching decorator; the service does not
/// know or care.
pub struct MovieService<K: MovieKey> {
    repository: Arc<dyn MovieRepository<Key = K>>,
}

impl<K: MovieKey> Clone for MovieService<K> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<K: MovieKey> MovieService<K> {
    pub fn new(repository: Arc<dyn MovieRepository<Key = K>>) -> Self {
        Self { repository }
    }

    pub async fn get_movie(&self, key: &K) -> Result<MovieDetails> {
        let movie = self.repository.get_movie(key).await?;
        Ok(MovieDetails::from_movie(movie))
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.repository.list_movies().await
    }

    pub async fn create_movie(&self, movie: &Movie) -> Result<K> {
        validate_movie(movie).map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        self.repository.create_movie(movie).await
    }

    pub async fn update_movie(&self, key: &K, movie: &Movie) -> Result<()> {
        validate_movie(movie).map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        self.repository.update_movie(key, movie).await
    }

    pub async fn delete_movie(&self, key: &K) -> Result<()> {
        self.repository.delete_movie(key).await
    }
}
