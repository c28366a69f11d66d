//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use movieplanner_core::movie::{Movie, MovieId};
use movieplanner_core::storage::{MovieRepository, RepositoryError, Result, UserRepository};
use movieplanner_core::user::{NewUser, User};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// IDs are assigned from per-table counters starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    movies: Arc<RwLock<BTreeMap<i64, Movie>>>,
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_movie_id: Arc<AtomicI64>,
    next_user_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(BTreeMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
            next_movie_id: Arc::new(AtomicI64::new(1)),
            next_user_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryRepository {
    type Key = MovieId;

    async fn get_movie(&self, key: &MovieId) -> Result<Movie> {
        let movies = self.movies.read().await;
        movies
            .get(&key.get())
            .cloned()
            .ok_or_else(|| RepositoryError::movie_not_found(key))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.values().cloned().collect())
    }

    async fn create_movie(&self, movie: &Movie) -> Result<MovieId> {
        let id = self.next_movie_id.fetch_add(1, Ordering::SeqCst);
        let key = MovieId::new(id).map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let mut movies = self.movies.write().await;
        movies.insert(id, movie.clone().with_id(id));
        Ok(key)
    }

    async fn update_movie(&self, key: &MovieId, movie: &Movie) -> Result<()> {
        let mut movies = self.movies.write().await;
        let Some(existing) = movies.get_mut(&key.get()) else {
            return Err(RepositoryError::movie_not_found(key));
        };
        *existing = movie.clone().with_id(key.get());
        Ok(())
    }

    async fn delete_movie(&self, key: &MovieId) -> Result<()> {
        let mut movies = self.movies.write().await;
        if movies.remove(&key.get()).is_none() {
            return Err(RepositoryError::movie_not_found(key));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: i64) -> Result<User> {
        let users = self.users.read().await;
        users
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::user_not_found(id))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            });
        }
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        users.insert(id, user.clone().into_user(id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: i64) -> MovieId {
        MovieId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();

        let a = repo.create_movie(&Movie::new("Heat", 8.3)).await.unwrap();
        let b = repo.create_movie(&Movie::new("Ronin", 7.2)).await.unwrap();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(repo.get_movie(&a).await.unwrap().id, Some(1));
    }

    #[tokio::test]
    async fn test_get_missing_movie() {
        let repo = InMemoryRepository::new();
        let result = repo.get_movie(&key(1)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryRepository::new();
        for title in ["A", "B", "C"] {
            repo.create_movie(&Movie::new(title, 5.0)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .list_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryRepository::new();
        let id = repo.create_movie(&Movie::new("Heat", 8.3)).await.unwrap();

        repo.update_movie(&id, &Movie::new("Heat (1995)", 8.4).with_id(99))
            .await
            .unwrap();

        let movie = repo.get_movie(&id).await.unwrap();
        assert_eq!(movie.title, "Heat (1995)");
        assert_eq!(movie.id, Some(id.get()));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let repo = InMemoryRepository::new();

        let update = repo.update_movie(&key(5), &Movie::new("X", 1.0)).await;
        let delete = repo.delete_movie(&key(5)).await;

        assert!(matches!(update, Err(RepositoryError::NotFound { .. })));
        assert!(matches!(delete, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_movie() {
        let repo = InMemoryRepository::new();
        let id = repo.create_movie(&Movie::new("Heat", 8.3)).await.unwrap();

        repo.delete_movie(&id).await.unwrap();

        assert!(repo.get_movie(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_user_crud() {
        let repo = InMemoryRepository::new();

        let id = repo
            .create_user(&NewUser::new("neo@matrix.io", "hash"))
            .await
            .unwrap();

        assert_eq!(repo.get_user(id).await.unwrap().email, "neo@matrix.io");
        assert_eq!(
            repo.get_user_by_email("neo@matrix.io")
                .await
                .unwrap()
                .map(|u| u.id),
            Some(id)
        );
        assert!(repo
            .get_user_by_email("smith@matrix.io")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryRepository::new();
        repo.create_user(&NewUser::new("neo@matrix.io", "hash"))
            .await
            .unwrap();

        let result = repo
            .create_user(&NewUser::new("neo@matrix.io", "other"))
            .await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }
}
