use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use movieplanner_core::movie::{Movie, MovieTitle};
use movieplanner_core::storage::{MovieRepository, RepositoryError, Result};

use super::types::{TmdbMovie, TmdbPage};

/// Default TMDb API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Default prefix for poster paths.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Connection settings for the TMDb API.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
}

impl TmdbConfig {
    /// Settings pointing at the public TMDb endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Title-keyed movie source querying TMDb.
pub struct TmdbCatalog {
    client: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbCatalog {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fetches one page of results. 404 maps to `NotFound`, any other failure
    /// to `ProviderFailure`.
    async fn fetch_page(&self, path: &str, query: &[(&str, &str)]) -> Result<TmdbPage> {
        let response = self
            .client
            .get(self.url(path))
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| RepositoryError::ProviderFailure(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(RepositoryError::NotFound {
                    entity_type: "Movie",
                    id: path.to_string(),
                })
            }
            status => {
                return Err(RepositoryError::ProviderFailure(format!(
                    "TMDb API returned non-200 status: {status}"
                )))
            }
        }

        response.json::<TmdbPage>().await.map_err(|e| {
            RepositoryError::ProviderFailure(format!("failed to decode TMDb response: {e}"))
        })
    }

    /// Finds the most relevant match for a title.
    async fn search(&self, title: &MovieTitle) -> Result<TmdbMovie> {
        debug!(title = %title, "Searching TMDb");

        let page = self
            .fetch_page("/search/movie", &[("query", title.as_str())])
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => RepositoryError::movie_not_found(title),
                other => other,
            })?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::movie_not_found(title))
    }

    /// Titles recommended for a TMDb movie id. Failures yield an empty list.
    async fn recommendations(&self, tmdb_id: i64) -> Vec<String> {
        match self
            .fetch_page(&format!("/movie/{tmdb_id}/recommendations"), &[])
            .await
        {
            Ok(page) => page.results.into_iter().map(|m| m.title).collect(),
            Err(e) => {
                warn!(tmdb_id, error = %e, "Failed to fetch recommendations");
                Vec::new()
            }
        }
    }

    fn read_only() -> RepositoryError {
        RepositoryError::Unsupported("the TMDb catalog is read-only".to_string())
    }
}

#[async_trait]
impl MovieRepository for TmdbCatalog {
    type Key = MovieTitle;

    async fn get_movie(&self, key: &MovieTitle) -> Result<Movie> {
        let found = self.search(key).await?;
        let recommendations = self.recommendations(found.id).await;
        Ok(found.into_movie(&self.config.image_base_url, recommendations))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let page = self.fetch_page("/movie/popular", &[]).await?;
        Ok(page
            .results
            .into_iter()
            .map(|m| m.into_movie(&self.config.image_base_url, Vec::new()))
            .collect())
    }

    async fn create_movie(&self, _movie: &Movie) -> Result<MovieTitle> {
        Err(Self::read_only())
    }

    async fn update_movie(&self, _key: &MovieTitle, _movie: &Movie) -> Result<()> {
        Err(Self::read_only())
    }

    async fn delete_movie(&self, _key: &MovieTitle) -> Result<()> {
        Err(Self::read_only())
    }
}
