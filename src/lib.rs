pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod format;
pub mod models;
pub mod normalize;
pub mod preferences;
pub mod tmdb;
pub mod view;

pub use catalog::{fetch_movies, Catalog, CatalogSession, CatalogSource, SessionState};
pub use models::{Genre, Movie};
