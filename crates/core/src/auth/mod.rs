mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{
    build_claims, normalize_email, parse_bearer_token, validate_registration, MIN_PASSWORD_LEN,
};
pub use types::{Claims, Credentials};
