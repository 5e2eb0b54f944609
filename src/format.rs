//! Display helpers for catalog records (ru-RU conventions).
use chrono::NaiveDate;

use crate::models::Genre;

pub const NO_DATA: &str = "Нет данных";
pub const NO_GENRES: &str = "Нет данных о жанрах";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    High,
    Medium,
    Low,
}

pub fn rating_tier(vote: f64) -> RatingTier {
    if vote >= 8.0 {
        RatingTier::High
    } else if vote >= 6.0 {
        RatingTier::Medium
    } else {
        RatingTier::Low
    }
}

pub fn format_rating(vote: f64) -> String {
    format!("{vote:.1}")
}

/// `148` -> `2ч 28мин`.
pub fn format_runtime(minutes: u64) -> String {
    if minutes == 0 {
        return NO_DATA.to_string();
    }
    format!("{}ч {}мин", minutes / 60, minutes % 60)
}

/// Whole US dollars, digits grouped by three: `160 000 000 $` (non-breaking spaces).
pub fn format_currency(amount: u64) -> String {
    if amount == 0 {
        return NO_DATA.to_string();
    }
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(c);
    }
    out.push_str("\u{a0}$");
    out
}

/// `2010-07-16` -> `16.07.2010`. Values that don't parse are shown as-is.
pub fn format_release_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

pub fn format_genres(genres: &[Genre]) -> String {
    if genres.is_empty() {
        return NO_GENRES.to_string();
    }
    genres
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
