use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::fallback::static_catalog;
use crate::models::Movie;
use crate::normalize::{merge_detail, normalize_summary};
use crate::tmdb::{MovieDetail, TmdbApi};

/// Where the records of a [`Catalog`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSource {
    Fresh,
    /// Listing succeeded, these ids kept their listing-only data.
    Degraded { failed_ids: Vec<i64> },
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub source: CatalogSource,
}

impl Catalog {
    pub fn fallback() -> Self {
        Self {
            movies: static_catalog(),
            source: CatalogSource::Fallback,
        }
    }
}

/// Lists popular movies, enriches each one and normalizes the result.
///
/// Never fails: a listing error yields the static catalog, a detail error
/// leaves only that entry with its listing data.
pub async fn fetch_movies(api: &dyn TmdbApi, image_base: &str) -> Catalog {
    let summaries = match api.list_popular().await {
        Ok(summaries) => summaries,
        Err(e) => {
            warn!("Error fetching movies, showing static catalog: {}", e);
            return Catalog::fallback();
        }
    };
    info!("Fetched {} popular movies", summaries.len());

    let base: Vec<Movie> = summaries
        .iter()
        .map(|s| normalize_summary(s, image_base))
        .collect();
    let (movies, failed_ids) = enrich_all(api, base).await;

    let source = if failed_ids.is_empty() {
        CatalogSource::Fresh
    } else {
        warn!(
            "Details unavailable for {} of {} movies",
            failed_ids.len(),
            movies.len()
        );
        CatalogSource::Degraded { failed_ids }
    };
    Catalog { movies, source }
}

/// Looks up details for every record concurrently.
///
/// Output order is input order. Returns the merged records and the ids whose
/// lookup failed, in input order.
pub async fn enrich_all(api: &dyn TmdbApi, base: Vec<Movie>) -> (Vec<Movie>, Vec<i64>) {
    let mut pending: FuturesUnordered<_> = base
        .iter()
        .enumerate()
        .map(|(index, movie)| {
            let id = movie.id;
            async move { (index, api.fetch_movie_detail(id).await) }
        })
        .collect();

    let mut slots: Vec<Option<MovieDetail>> = vec![None; base.len()];
    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(detail) => {
                debug!(movie_id = base[index].id, "Details fetched");
                slots[index] = Some(detail);
            }
            Err(e) => warn!(
                movie_id = base[index].id,
                "Error fetching details for movie {}: {}", base[index].id, e
            ),
        }
    }

    let mut failed_ids = Vec::new();
    let movies: Vec<Movie> = base
        .into_iter()
        .zip(slots)
        .map(|(movie, detail)| match detail {
            Some(detail) => merge_detail(movie, detail),
            None => {
                failed_ids.push(movie.id);
                movie
            }
        })
        .collect();
    (movies, failed_ids)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Fetching,
    Success,
    Degraded,
    FellBack,
}

impl From<&CatalogSource> for SessionState {
    fn from(source: &CatalogSource) -> Self {
        match source {
            CatalogSource::Fresh => SessionState::Success,
            CatalogSource::Degraded { .. } => SessionState::Degraded,
            CatalogSource::Fallback => SessionState::FellBack,
        }
    }
}

/// One application session: loads the catalog at most once.
pub struct CatalogSession {
    api: Arc<dyn TmdbApi>,
    image_base: String,
    state: Mutex<SessionState>,
}

impl CatalogSession {
    pub fn new(api: Arc<dyn TmdbApi>, image_base: impl Into<String>) -> Self {
        Self {
            api,
            image_base: image_base.into(),
            state: Mutex::new(SessionState::Idle),
        }
    }

    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    pub async fn load(&self) -> Result<Catalog, SessionError> {
        {
            let mut state = self.state.lock().await;
            if *state != SessionState::Idle {
                return Err(SessionError::AlreadyStarted);
            }
            *state = SessionState::Fetching;
        }

        let catalog = fetch_movies(self.api.as_ref(), &self.image_base).await;
        let next = SessionState::from(&catalog.source);
        info!("Catalog session finished: {:?}", next);
        *self.state.lock().await = next;
        Ok(catalog)
    }
}
