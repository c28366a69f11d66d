mod advice;
mod error;
mod operations;
mod service;
mod types;

pub use advice::{Advice, FAVORABLE_THRESHOLD, NEUTRAL_THRESHOLD};
pub use error::{MovieError, MovieKeyError};
pub use operations::{validate_movie, MAX_TITLE_LEN};
pub use service::{MovieDetails, MovieService};
pub use types::{Movie, MovieId, MovieKey, MovieTitle};
