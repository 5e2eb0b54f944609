//! Mapping of raw TMDB payloads into [`Movie`] records.
//!
//! Every function here is pure. Records produced by [`normalize_summary`] carry
//! raw genre codes and zeroed detail fields; [`merge_detail`] replaces them once
//! the per-movie lookup has succeeded.

use crate::models::{Genre, Movie};
use crate::tmdb::{MovieDetail, MovieSummary};

pub const TITLE_PLACEHOLDER: &str = "Без названия";
pub const OVERVIEW_PLACEHOLDER: &str = "Описание отсутствует";
pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Builds a listing-only record.
pub fn normalize_summary(summary: &MovieSummary, image_base: &str) -> Movie {
    normalize(Movie {
        id: summary.id,
        title: summary.title.clone().unwrap_or_default(),
        overview: summary.overview.clone().unwrap_or_default(),
        poster: poster_url(image_base, summary.poster_path.as_deref()),
        release_date: summary.release_date.clone().unwrap_or_default(),
        vote_average: summary.vote_average.unwrap_or_default(),
        genres: summary
            .genre_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .copied()
            .map(Genre::Code)
            .collect(),
        runtime: 0,
        budget: 0,
        revenue: 0,
    })
}

/// Folds a successful detail lookup into a listing record.
pub fn merge_detail(base: Movie, detail: MovieDetail) -> Movie {
    let genres = detail
        .genres
        .unwrap_or_default()
        .into_iter()
        .map(|g| Genre::Name(g.name))
        .collect();
    normalize(Movie {
        genres,
        runtime: non_negative(detail.runtime),
        budget: non_negative(detail.budget),
        revenue: non_negative(detail.revenue),
        ..base
    })
}

/// Applies the defaulting rules to a record. Idempotent.
pub fn normalize(movie: Movie) -> Movie {
    Movie {
        title: or_placeholder(movie.title, TITLE_PLACEHOLDER),
        overview: or_placeholder(movie.overview, OVERVIEW_PLACEHOLDER),
        poster: or_placeholder(movie.poster, POSTER_PLACEHOLDER),
        vote_average: clamp_rating(movie.vote_average),
        ..movie
    }
}

/// `{image_base}{path}`, or the placeholder image when there is no path.
pub fn poster_url(image_base: &str, poster_path: Option<&str>) -> String {
    match poster_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) if path.starts_with('/') => format!("{image_base}{path}"),
        Some(path) => format!("{image_base}/{path}"),
        None => POSTER_PLACEHOLDER.to_string(),
    }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

// One decimal, within [0, 10].
fn clamp_rating(vote: f64) -> f64 {
    if !vote.is_finite() {
        return 0.0;
    }
    ((vote.clamp(0.0, 10.0) * 10.0).round()) / 10.0
}

fn non_negative(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}
