use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MovieKeyError;

/// Movie metadata as stored locally or returned by a remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Numeric identifier; only set by stores that assign ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    /// Average rating on a 0-10 scale.
    pub rating: f64,
    pub poster_url: Option<String>,
    /// Titles of related movies, most relevant first.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Movie {
    /// Creates a movie with the given title and rating and no other metadata.
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            overview: String::new(),
            release_date: None,
            rating,
            poster_url: None,
            recommendations: Vec::new(),
        }
    }

    /// Sets the numeric id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn with_recommendations<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = titles.into_iter().map(Into::into).collect();
        self
    }
}

/// Identity of a movie inside one deployment.
///
/// A deployment uses exactly one key type: numeric ids for local stores,
/// titles for the remote catalog.
pub trait MovieKey:
    Clone + fmt::Debug + fmt::Display + FromStr<Err = MovieKeyError> + Serialize + Send + Sync + 'static
{
    /// Returns the key under which this movie is cached.
    fn cache_key(&self) -> String;
}

/// Numeric movie identifier assigned by a local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    /// Creates an id. Ids are strictly positive.
    pub fn new(id: i64) -> Result<Self, MovieKeyError> {
        if id <= 0 {
            return Err(MovieKeyError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = MovieKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i64 = s
            .trim()
            .parse()
            .map_err(|_| MovieKeyError::InvalidId(s.to_string()))?;
        Self::new(id)
    }
}

impl MovieKey for MovieId {
    fn cache_key(&self) -> String {
        crate::cache::movie_key(self.0)
    }
}

/// Free-text movie title used to query a remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieTitle(String);

impl MovieTitle {
    /// Creates a title, trimming surrounding whitespace. Empty titles are rejected.
    pub fn new(title: impl AsRef<str>) -> Result<Self, MovieKeyError> {
        let trimmed = title.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MovieKeyError::EmptyTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MovieTitle {
    type Err = MovieKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl MovieKey for MovieTitle {
    fn cache_key(&self) -> String {
        crate::cache::movie_title_key(&self.0)
    }
}
