//! SQLite repository implementation.
//!
//! Implements the repository traits from `movieplanner_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use movieplanner_core::movie::{Movie, MovieId};
use movieplanner_core::storage::{MovieRepository, RepositoryError, Result, UserRepository};
use movieplanner_core::user::{NewUser, User};

use super::conversions::{
    format_date, format_datetime, recommendations_to_json, row_to_movie, row_to_user,
};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Column values of a movie, owned so they can move into a connection closure.
struct MovieRow {
    title: String,
    overview: String,
    release_date: Option<String>,
    rating: f64,
    poster_url: Option<String>,
    recommendations: String,
}

impl MovieRow {
    fn from_movie(movie: &Movie) -> Result<Self> {
        Ok(Self {
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.as_ref().map(format_date),
            rating: movie.rating,
            poster_url: movie.poster_url.clone(),
            recommendations: recommendations_to_json(&movie.recommendations)?,
        })
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for movies and users.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl MovieRepository for SqliteRepository {
    type Key = MovieId;

    async fn get_movie(&self, key: &MovieId) -> Result<Movie> {
        let id = key.get();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_MOVIE_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_movie).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", id.to_string()))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_MOVIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_movie).map_err(wrap_err)?;

                let mut movies = Vec::new();
                for row_result in rows {
                    movies.push(row_result.map_err(wrap_err)?);
                }
                Ok(movies)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", "*"))
    }

    async fn create_movie(&self, movie: &Movie) -> Result<MovieId> {
        let row = MovieRow::from_movie(movie)?;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_MOVIE,
                    rusqlite::params![
                        row.title,
                        row.overview,
                        row.release_date,
                        row.rating,
                        row.poster_url,
                        row.recommendations,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", movie.title.clone()))?;

        MovieId::new(id).map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }

    async fn update_movie(&self, key: &MovieId, movie: &Movie) -> Result<()> {
        let id = key.get();
        let row = MovieRow::from_movie(movie)?;

        let rows_affected = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_MOVIE,
                    rusqlite::params![
                        id,
                        row.title,
                        row.overview,
                        row.release_date,
                        row.rating,
                        row.poster_url,
                        row.recommendations,
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", id.to_string()))?;

        if rows_affected == 0 {
            return Err(RepositoryError::movie_not_found(id));
        }
        Ok(())
    }

    async fn delete_movie(&self, key: &MovieId) -> Result<()> {
        let id = key.get();

        let rows_affected = self
            .conn
            .call(move |conn| conn.execute(schema::DELETE_MOVIE, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Movie", id.to_string()))?;

        if rows_affected == 0 {
            return Err(RepositoryError::movie_not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: i64) -> Result<User> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_user).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();
        let email_for_error = email.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_EMAIL)
                    .map_err(wrap_err)?;
                match stmt.query_row([&email], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", email_for_error))
    }

    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        let email = user.email.clone();
        let password_hash = user.password_hash.clone();
        let created_at = format_datetime(&user.created_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![email, password_hash, created_at],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user.email.clone()))
    }
}
