use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use movieplanner_auth::auth_routes;

use crate::{
    handlers::{
        health::{healthz, livez},
        movies::{create_movie, delete_movie, get_movie, list_movies, update_movie},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let movie_routes = Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{key}",
            get(get_movie).put(update_movie).delete(delete_movie),
        );

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(movie_routes)
        .merge(auth_routes().with_state::<AppState>(state.auth.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
