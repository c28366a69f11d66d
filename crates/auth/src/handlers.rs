//! HTTP handlers for auth routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use movieplanner_core::auth::Credentials;
use serde_json::json;

use crate::error::AuthError;
use crate::extractors::CurrentUser;
use crate::AuthState;

/// Creates the auth router with all authentication routes.
///
/// Routes:
/// - `POST /auth/register` - Create an account from `{email, password}`
/// - `POST /auth/login` - Exchange `{email, password}` for a bearer token
/// - `GET /auth/me` - Get the current authenticated user
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected auth request body");
    (StatusCode::BAD_REQUEST, "Invalid request body").into_response()
}

async fn register(
    State(state): State<AuthState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Response, AuthError> {
    let Json(credentials) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(invalid_body(rejection)),
    };

    let id = state
        .register(&credentials.email, &credentials.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "id": id,
        })),
    )
        .into_response())
}

async fn login(
    State(state): State<AuthState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Response, AuthError> {
    let Json(credentials) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(invalid_body(rejection)),
    };

    let token = state
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(json!({ "token": token })).into_response())
}

async fn me(
    State(state): State<AuthState>,
    user: CurrentUser,
) -> Result<Response, AuthError> {
    let user = state.users.get_user(user.user_id).await?;
    Ok(Json(user).into_response())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use movieplanner_core::storage::{RepositoryError, Result as RepoResult, UserRepository};
    use movieplanner_core::user::{NewUser, User};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use super::*;
    use crate::AuthConfig;

    #[derive(Default)]
    struct TestUsers {
        users: RwLock<HashMap<i64, User>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl UserRepository for TestUsers {
        async fn get_user(&self, id: i64) -> RepoResult<User> {
            self.users
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| RepositoryError::user_not_found(id))
        }

        async fn get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.email == email).cloned())
        }

        async fn create_user(&self, user: &NewUser) -> RepoResult<i64> {
            let mut users = self.users.write().await;
            if users.values().any(|u| u.email == user.email) {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "User",
                    id: user.email.clone(),
                });
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            users.insert(id, user.clone().into_user(id));
            Ok(id)
        }
    }

    fn test_state() -> AuthState {
        let config = AuthConfig::with_secret("test-secret").with_bcrypt_cost(4);
        AuthState::new(Arc::new(TestUsers::default()), config)
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn register_returns_created_with_id() {
        let app = auth_routes().with_state(test_state());

        let response = app
            .oneshot(json_request(
                "/auth/register",
                json!({"email": "neo@matrix.io", "password": "redpill!"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["message"], "User registered successfully");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let state = test_state();
        state.register("neo@matrix.io", "redpill!").await.unwrap();

        let response = auth_routes()
            .with_state(state)
            .oneshot(json_request(
                "/auth/register",
                json!({"email": "NEO@matrix.io", "password": "bluepill"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn register_rejects_invalid_input() {
        let app = auth_routes().with_state(test_state());

        let response = app
            .clone()
            .oneshot(json_request(
                "/auth/register",
                json!({"email": "no-at-sign", "password": "redpill!"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(json_request("/auth/register", json!({"email": "a@b.c"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_returns_token_for_valid_credentials() {
        let state = test_state();
        let id = state.register("neo@matrix.io", "redpill!").await.unwrap();

        let response = auth_routes()
            .with_state(state.clone())
            .oneshot(json_request(
                "/auth/login",
                json!({"email": "neo@matrix.io", "password": "redpill!"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let token = body["token"].as_str().unwrap();
        assert_eq!(state.authenticate(token).unwrap().user_id(), Some(id));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let state = test_state();
        state.register("neo@matrix.io", "redpill!").await.unwrap();
        let app = auth_routes().with_state(state);

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "/auth/login",
                json!({"email": "neo@matrix.io", "password": "bluepill"}),
            ))
            .await
            .unwrap();
        let unknown_email = app
            .oneshot(json_request(
                "/auth/login",
                json!({"email": "smith@matrix.io", "password": "redpill!"}),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

        let a = wrong_password.into_body().collect().await.unwrap().to_bytes();
        let b = unknown_email.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn me_requires_bearer_token() {
        let app = auth_routes().with_state(test_state());

        let missing = app
            .clone()
            .oneshot(Request::get("/auth/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let wrong_scheme = app
            .clone()
            .oneshot(
                Request::get("/auth/me")
                    .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(wrong_scheme.status(), StatusCode::UNAUTHORIZED);

        let bad_token = app
            .oneshot(
                Request::get("/auth/me")
                    .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bad_token.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn me_returns_user_without_hash() {
        let state = test_state();
        let id = state.register("neo@matrix.io", "redpill!").await.unwrap();
        let token = state.tokens.issue(id).unwrap();

        let response = auth_routes()
            .with_state(state)
            .oneshot(
                Request::get("/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "neo@matrix.io");
        assert!(body.get("password_hash").is_none());
    }
}
