//! Password accounts and bearer-token authentication for movieplanner.
//!
//! This crate provides:
//! - bcrypt password hashing on the blocking pool
//! - HS256 JWT issuing and validation
//! - Register and login handlers
//! - An axum extractor for authenticated requests

mod config;
mod error;
mod extractors;
mod handlers;
mod password;
mod state;
mod tokens;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use handlers::auth_routes;
pub use password::PasswordHasher;
pub use state::AuthState;
pub use tokens::TokenService;
