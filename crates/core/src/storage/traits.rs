use async_trait::async_trait;

use crate::movie::{Movie, MovieKey};
use crate::user::{NewUser, User};

use super::Result;

/// Port to whatever holds movie metadata: a local table or a remote catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Key type used to address a single movie.
    type Key: MovieKey;

    /// Gets a movie by key. Fails with `NotFound` when nothing matches.
    async fn get_movie(&self, key: &Self::Key) -> Result<Movie>;

    /// Lists all movies known to the repository.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Creates a movie and returns its key.
    async fn create_movie(&self, movie: &Movie) -> Result<Self::Key>;

    /// Replaces the movie stored under `key`.
    async fn update_movie(&self, key: &Self::Key, movie: &Movie) -> Result<()>;

    /// Deletes the movie stored under `key`.
    async fn delete_movie(&self, key: &Self::Key) -> Result<()>;
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: i64) -> Result<User>;

    /// Gets a user by their email address, if registered.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user and returns the assigned ID.
    ///
    /// Fails with `AlreadyExists` when the email is taken.
    async fn create_user(&self, user: &NewUser) -> Result<i64>;
}
