//! Movie CRUD handlers.
//!
//! Reads go through the cached movie service. Writes require a bearer token.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use movieplanner_auth::CurrentUser;
use movieplanner_core::movie::{Movie, MovieDetails};
use movieplanner_core::storage::RepositoryError;

use crate::{
    handlers::AppError,
    models::MoviePayload,
    state::{ActiveKey, AppState},
};

fn parse_key(raw: &str) -> Result<ActiveKey, AppError> {
    raw.parse::<ActiveKey>()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()).into())
}

fn parse_body(payload: Result<Json<MoviePayload>, JsonRejection>) -> Result<Movie, AppError> {
    let Json(payload) =
        payload.map_err(|e| RepositoryError::InvalidData(e.body_text()))?;
    Ok(payload.into())
}

/// List all movies (GET /movies).
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movies.list_movies().await?;
    Ok(Json(movies))
}

/// Get a single movie with viewing advice (GET /movies/{key}).
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> Result<Json<MovieDetails>, AppError> {
    let key = parse_key(&raw_key)?;
    let details = state.movies.get_movie(&key).await?;
    Ok(Json(details))
}

/// Create a movie (POST /movies).
pub async fn create_movie(
    user: CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let movie = parse_body(payload)?;
    let key = state.movies.create_movie(&movie).await?;

    tracing::debug!(user_id = user.user_id, %key, "Movie created via API");
    Ok((StatusCode::CREATED, Json(json!({ "id": key }))))
}

/// Replace a movie (PUT /movies/{key}).
pub async fn update_movie(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let key = parse_key(&raw_key)?;
    let movie = parse_body(payload)?;
    state.movies.update_movie(&key, &movie).await?;

    tracing::debug!(user_id = user.user_id, %key, "Movie updated via API");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a movie (DELETE /movies/{key}).
pub async fn delete_movie(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(raw_key): Path<String>,
) -> Result<StatusCode, AppError> {
    let key = parse_key(&raw_key)?;
    state.movies.delete_movie(&key).await?;

    tracing::debug!(user_id = user.user_id, %key, "Movie deleted via API");
    Ok(StatusCode::NO_CONTENT)
}
