//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Movies table
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    overview TEXT NOT NULL DEFAULT '',
    release_date TEXT,
    rating REAL NOT NULL,
    poster_url TEXT,
    recommendations TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (email, password_hash, created_at)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, password_hash, created_at
FROM users
WHERE id = ?1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, email, password_hash, created_at
FROM users
WHERE email = ?1
"#;

// Movie queries
pub const INSERT_MOVIE: &str = r#"
INSERT INTO movies (title, overview, release_date, rating, poster_url, recommendations)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_MOVIE_BY_ID: &str = r#"
SELECT id, title, overview, release_date, rating, poster_url, recommendations
FROM movies
WHERE id = ?1
"#;

pub const SELECT_ALL_MOVIES: &str = r#"
SELECT id, title, overview, release_date, rating, poster_url, recommendations
FROM movies
ORDER BY id
"#;

pub const UPDATE_MOVIE: &str = r#"
UPDATE movies
SET title = ?2, overview = ?3, release_date = ?4, rating = ?5, poster_url = ?6, recommendations = ?7
WHERE id = ?1
"#;

pub const DELETE_MOVIE: &str = r#"
DELETE FROM movies WHERE id = ?1
"#;
