use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single request against the movie metadata service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("TMDB_API_KEY is not configured")]
    MissingApiKey,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} -> {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("JSON parse failed for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("catalog session already started")]
    AlreadyStarted,
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("page size must be one of 5, 10, 20 (got {0})")]
    InvalidPageSize(usize),

    #[error("unknown sort field '{0}' (expected title, overview, date or rating)")]
    UnknownSortField(String),
}
