use super::error::MovieError;
use super::types::Movie;

/// Maximum accepted title length in bytes.
pub const MAX_TITLE_LEN: usize = 200;

/// Validates a movie before creation or update.
pub fn validate_movie(movie: &Movie) -> Result<(), MovieError> {
    if movie.title.trim().is_empty() {
        return Err(MovieError::EmptyTitle);
    }
    if movie.title.len() > MAX_TITLE_LEN {
        return Err(MovieError::TitleTooLong);
    }
    if !(0.0..=10.0).contains(&movie.rating) {
        return Err(MovieError::InvalidRating(movie.rating));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        assert_eq!(validate_movie(&Movie::new("Inception", 8.8)), Ok(()));
        assert_eq!(validate_movie(&Movie::new("Zero", 0.0)), Ok(()));
        assert_eq!(validate_movie(&Movie::new("Ten", 10.0)), Ok(()));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            validate_movie(&Movie::new("  ", 5.0)),
            Err(MovieError::EmptyTitle)
        );
    }

    #[test]
    fn test_long_title_rejected() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            validate_movie(&Movie::new(title, 5.0)),
            Err(MovieError::TitleTooLong)
        );
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        assert_eq!(
            validate_movie(&Movie::new("Too good", 10.5)),
            Err(MovieError::InvalidRating(10.5))
        );
        assert!(validate_movie(&Movie::new("Too bad", -1.0)).is_err());
        assert!(validate_movie(&Movie::new("NaN", f64::NAN)).is_err());
    }
}
