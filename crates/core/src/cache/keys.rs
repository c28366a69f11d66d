/// Returns the cache key for a movie addressed by numeric ID.
pub fn movie_key(movie_id: i64) -> String {
    format!("movie:{}", movie_id)
}

/// Returns the cache key for a movie addressed by title.
///
/// Titles are trimmed and lowercased so that `"Inception"` and
/// `" inception "` share one entry.
pub fn movie_title_key(title: &str) -> String {
    format!("movie:title:{}", title.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_key() {
        assert_eq!(movie_key(27205), "movie:27205");
    }

    #[test]
    fn test_movie_title_key_normalizes() {
        assert_eq!(movie_title_key("  The Matrix "), "movie:title:the matrix");
    }

    #[test]
    fn test_id_and_title_keys_do_not_collide() {
        assert_ne!(movie_key(1), movie_title_key("1"));
    }
}
