use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbSettings;
use crate::error::FetchError;

#[async_trait]
pub trait TmdbApi: Send + Sync {
    /// First page of `/movie/popular`, in service order.
    async fn list_popular(&self) -> Result<Vec<MovieSummary>, FetchError>;
    async fn fetch_movie_detail(&self, id: i64) -> Result<MovieDetail, FetchError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    language: String,
}

/// Listing entry from `/movie/popular`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: i64,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub genre_ids: Option<Vec<i64>>,
}

/// Supplementary fields from `/movie/{id}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MovieDetail {
    #[serde(default)]
    pub id: i64,
    pub genres: Option<Vec<GenreRef>>,
    pub runtime: Option<f64>,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenreRef {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct PopularResponse {
    results: Vec<MovieSummary>,
}

impl TmdbClient {
    pub fn new(settings: &TmdbSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                url: settings.base_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            language: settings.language.clone(),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self
            .client
            .get(&url)
            .query(&[("api_key", api_key), ("language", self.language.as_str())])
            .query(extra)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = res.status();
        let text = res.text().await.map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn list_popular(&self) -> Result<Vec<MovieSummary>, FetchError> {
        let data: PopularResponse = self.get_json("/movie/popular", &[("page", "1")]).await?;
        Ok(data.results)
    }

    async fn fetch_movie_detail(&self, id: i64) -> Result<MovieDetail, FetchError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }
}
