//! TMDb response shapes and their conversion to domain movies.

use chrono::NaiveDate;
use serde::Deserialize;

use movieplanner_core::movie::Movie;

/// Body of `/search/movie`, `/movie/popular` and `/movie/{id}/recommendations`.
#[derive(Debug, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbMovie {
    /// Converts a catalog entry into a movie. Unparseable or empty release
    /// dates are dropped.
    pub fn into_movie(self, image_base_url: &str, recommendations: Vec<String>) -> Movie {
        Movie {
            id: None,
            title: self.title,
            overview: self.overview,
            release_date: self
                .release_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            rating: self.vote_average,
            poster_url: self
                .poster_path
                .filter(|p| !p.is_empty())
                .map(|p| format!("{image_base_url}{p}")),
            recommendations,
        }
    }
}
