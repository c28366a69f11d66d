use chrono::NaiveDate;
use serde::Deserialize;

use movieplanner_core::movie::Movie;
use movieplanner_core::serde::{deserialize_optional_date, deserialize_optional_string};

/// Request body for creating or replacing a movie.
///
/// Empty strings for optional fields are treated as absent.
#[derive(Debug, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl From<MoviePayload> for Movie {
    fn from(payload: MoviePayload) -> Self {
        Movie {
            id: None,
            title: payload.title.trim().to_string(),
            overview: payload.overview,
            release_date: payload.release_date,
            rating: payload.rating,
            poster_url: payload.poster_url,
            recommendations: payload
                .recommendations
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload() {
        let payload: MoviePayload =
            serde_json::from_str(r#"{"title": "Heat", "rating": 8.3}"#).unwrap();
        let movie = Movie::from(payload);

        assert_eq!(movie, Movie::new("Heat", 8.3));
    }

    #[test]
    fn test_empty_optional_fields_are_none() {
        let payload: MoviePayload = serde_json::from_str(
            r#"{"title": " Heat ", "rating": 8.3, "release_date": "", "poster_url": "",
                "recommendations": ["Ronin", " ", "Collateral"]}"#,
        )
        .unwrap();
        let movie = Movie::from(payload);

        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.poster_url, None);
        assert_eq!(movie.recommendations, vec!["Ronin", "Collateral"]);
    }

    #[test]
    fn test_release_date_parsed() {
        let payload: MoviePayload = serde_json::from_str(
            r#"{"title": "Heat", "rating": 8.3, "release_date": "1995-12-15"}"#,
        )
        .unwrap();

        assert_eq!(payload.release_date, NaiveDate::from_ymd_opt(1995, 12, 15));
    }

    #[test]
    fn test_missing_rating_rejected() {
        assert!(serde_json::from_str::<MoviePayload>(r#"{"title": "Heat"}"#).is_err());
    }
}
