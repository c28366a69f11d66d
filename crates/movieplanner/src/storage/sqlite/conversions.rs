//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;

use movieplanner_core::movie::Movie;
use movieplanner_core::storage::RepositoryError;
use movieplanner_core::user::User;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, password_hash, created_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let created_at: String = row.get(3)?;

    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Convert a SQLite row to a Movie.
///
/// Expected columns: id, title, overview, release_date, rating, poster_url, recommendations
pub fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    let release_date: Option<String> = row.get(3)?;
    let recommendations: String = row.get(6)?;

    Ok(Movie {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        overview: row.get(2)?,
        release_date: release_date.as_deref().map(parse_date).transpose()?,
        rating: row.get(4)?,
        poster_url: row.get(5)?,
        recommendations: json_to_recommendations(&recommendations)?,
    })
}

/// Serialize recommendations to the JSON stored in the `recommendations` column.
pub fn recommendations_to_json(titles: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(titles).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn json_to_recommendations(json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format DateTime as RFC 3339 string.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format NaiveDate as YYYY-MM-DD string.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
