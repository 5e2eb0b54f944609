use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "ru-RU";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PREFS_PATH: &str = ".kinogrid/preferences.json";

/// Connection settings for the metadata service.
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub timeout: Duration,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: TMDB_BASE.to_string(),
            image_base_url: POSTER_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tmdb: TmdbSettings,
    pub preferences_path: PathBuf,
}

impl AppConfig {
    /// Reads settings from the process environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty_var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty_var("TMDB_API_KEY");
        match api_key {
            Some(_) => info!("TMDB_API_KEY is set"),
            None => warn!("TMDB_API_KEY is not set - the static catalog will be shown"),
        }

        let timeout_secs = match non_empty_var("TMDB_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("TMDB_TIMEOUT_SECS must be a whole number, got '{raw}'"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let tmdb = TmdbSettings {
            api_key,
            base_url: non_empty_var("TMDB_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| TMDB_BASE.to_string()),
            image_base_url: non_empty_var("TMDB_IMAGE_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| POSTER_BASE.to_string()),
            language: non_empty_var("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        let preferences_path = non_empty_var("KINOGRID_PREFS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));

        Ok(Self {
            tmdb,
            preferences_path,
        })
    }
}
