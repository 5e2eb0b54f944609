//! Paginated, sortable text table over a loaded catalog.
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::ViewError;
use crate::format::{
    format_currency, format_genres, format_rating, format_release_date, format_runtime,
    rating_tier, RatingTier,
};
use crate::models::Movie;
use crate::preferences::PaletteMode;

pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 10;

const TITLE_WIDTH: usize = 28;
const OVERVIEW_WIDTH: usize = 48;
const POSTER_WIDTH: usize = 24;
const DATE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Overview,
    ReleaseDate,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl FromStr for SortKey {
    type Err = ViewError;

    /// `title`, `overview`, `date`, `rating`, optionally suffixed with `:desc` or `:asc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (name, order) = lower.split_once(':').unwrap_or((lower.as_str(), "asc"));
        let field = match name {
            "title" => SortField::Title,
            "overview" => SortField::Overview,
            "date" | "release_date" | "releasedate" => SortField::ReleaseDate,
            "rating" | "vote" | "vote_average" => SortField::Rating,
            _ => return Err(ViewError::UnknownSortField(s.to_string())),
        };
        let descending = match order {
            "desc" => true,
            "asc" => false,
            _ => return Err(ViewError::UnknownSortField(s.to_string())),
        };
        Ok(Self { field, descending })
    }
}

/// Rendering parameters derived from the display preference.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub palette: PaletteMode,
    pub color: bool,
}

impl RenderConfig {
    pub fn plain() -> Self {
        Self {
            palette: PaletteMode::Light,
            color: false,
        }
    }

    fn rating(&self, vote: f64) -> String {
        let text = format_rating(vote);
        if !self.color {
            return text;
        }
        let code = match (rating_tier(vote), self.palette) {
            (RatingTier::High, PaletteMode::Light) => "32",
            (RatingTier::Medium, PaletteMode::Light) => "33",
            (RatingTier::Low, PaletteMode::Light) => "31",
            (RatingTier::High, PaletteMode::Dark) => "92",
            (RatingTier::Medium, PaletteMode::Dark) => "93",
            (RatingTier::Low, PaletteMode::Dark) => "91",
        };
        format!("\x1b[1;{code}m{text}\x1b[0m")
    }

    fn heading(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match self.palette {
            PaletteMode::Light => "1;34",
            PaletteMode::Dark => "1;96",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

#[derive(Debug, Clone)]
pub struct TableView<'a> {
    rows: Vec<&'a Movie>,
    page_size: usize,
}

impl<'a> TableView<'a> {
    pub fn new(movies: &'a [Movie], page_size: usize) -> Result<Self, ViewError> {
        if !PAGE_SIZES.contains(&page_size) {
            return Err(ViewError::InvalidPageSize(page_size));
        }
        Ok(Self {
            rows: movies.iter().collect(),
            page_size,
        })
    }

    /// Stable sort; the listing order breaks ties.
    pub fn sort_by(&mut self, key: SortKey) {
        self.rows.sort_by(|a, b| {
            let ord = compare(a, b, key.field);
            if key.descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Zero-based; requests past the end land on the last page.
    pub fn page(&self, index: usize) -> &[&'a Movie] {
        let index = index.min(self.page_count() - 1);
        let start = index * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start.min(end)..end]
    }

    pub fn render_page(&self, index: usize, config: &RenderConfig) -> String {
        let index = index.min(self.page_count() - 1);
        let mut out = String::new();
        let header = format!(
            "{} | {} | {} | {} | {}",
            pad("Постер", POSTER_WIDTH),
            pad("Название", TITLE_WIDTH),
            pad("Описание", OVERVIEW_WIDTH),
            pad("Дата выхода", DATE_WIDTH),
            "Рейтинг"
        );
        let _ = writeln!(out, "{}", config.heading(&header));
        for movie in self.page(index) {
            let _ = writeln!(
                out,
                "{} | {} | {} | {} | {}",
                pad(&truncate(poster_label(&movie.poster), POSTER_WIDTH), POSTER_WIDTH),
                pad(&truncate(&movie.title, TITLE_WIDTH), TITLE_WIDTH),
                pad(&truncate(&movie.overview, OVERVIEW_WIDTH), OVERVIEW_WIDTH),
                pad(&format_release_date(&movie.release_date), DATE_WIDTH),
                config.rating(movie.vote_average)
            );
        }
        let _ = write!(
            out,
            "Страница {} из {} ({} фильмов, по {} на странице)",
            index + 1,
            self.page_count(),
            self.rows.len(),
            self.page_size
        );
        out
    }
}

/// Detail card for a single movie.
pub fn render_detail(movie: &Movie, config: &RenderConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.heading(&movie.title));
    let _ = writeln!(
        out,
        "★ {}   {}",
        config.rating(movie.vote_average),
        format_release_date(&movie.release_date)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", movie.overview);
    let _ = writeln!(out);
    let _ = writeln!(out, "Жанры: {}", format_genres(&movie.genres));
    let _ = writeln!(out, "Продолжительность: {}", format_runtime(movie.runtime));
    let _ = writeln!(out, "Бюджет: {}", format_currency(movie.budget));
    let _ = writeln!(out, "Сборы: {}", format_currency(movie.revenue));
    let _ = write!(out, "Постер: {}", movie.poster);
    out
}

pub fn find_movie(movies: &[Movie], id: i64) -> Option<&Movie> {
    movies.iter().find(|m| m.id == id)
}

fn compare(a: &Movie, b: &Movie, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Overview => a.overview.to_lowercase().cmp(&b.overview.to_lowercase()),
        SortField::ReleaseDate => a.release_date.cmp(&b.release_date),
        SortField::Rating => a.vote_average.total_cmp(&b.vote_average),
    }
}

fn poster_label(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::static_catalog;

    #[test]
    fn sort_key_parsing() {
        assert_eq!(
            "rating:desc".parse::<SortKey>().unwrap(),
            SortKey {
                field: SortField::Rating,
                descending: true
            }
        );
        assert_eq!(
            "Title".parse::<SortKey>().unwrap().field,
            SortField::Title
        );
        assert!("poster".parse::<SortKey>().is_err());
        assert!("title:sideways".parse::<SortKey>().is_err());
    }

    #[test]
    fn rejects_unknown_page_size() {
        let movies = static_catalog();
        assert_eq!(
            TableView::new(&movies, 7).unwrap_err(),
            ViewError::InvalidPageSize(7)
        );
    }

    #[test]
    fn pages_are_clamped() {
        let movies = static_catalog();
        let view = TableView::new(&movies, 5).unwrap();
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page(0).len(), 5);
        assert_eq!(view.page(1).len(), 3);
        assert_eq!(view.page(9).len(), 3);
    }

    #[test]
    fn empty_catalog_has_one_empty_page() {
        let view = TableView::new(&[], DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(view.page_count(), 1);
        assert!(view.page(0).is_empty());
    }

    #[test]
    fn sorting_by_rating_descending_is_stable() {
        let movies = static_catalog();
        let mut view = TableView::new(&movies, 20).unwrap();
        view.sort_by("rating:desc".parse().unwrap());
        let ids: Vec<i64> = view.page(0).iter().map(|m| m.id).collect();
        // 9.0, 8.8, 8.7, 8.6, then the three 8.5 entries in listing order, 8.4
        assert_eq!(ids, vec![3, 5, 4, 2, 6, 7, 8, 1]);
    }

    #[test]
    fn sorting_by_date() {
        let movies = static_catalog();
        let mut view = TableView::new(&movies, 20).unwrap();
        view.sort_by("date".parse().unwrap());
        assert_eq!(view.page(0)[0].id, 7);
        assert_eq!(view.page(0)[7].id, 2);
    }

    #[test]
    fn sorting_by_overview_ignores_case() {
        let mut movies = static_catalog();
        movies[0].overview = "банда".to_string();
        movies[1].overview = "Альпинисты".to_string();
        movies[2].overview = "Вор".to_string();
        let movies = &movies[..3];
        let mut view = TableView::new(movies, 5).unwrap();
        view.sort_by("overview".parse().unwrap());
        let ids: Vec<i64> = view.page(0).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![movies[1].id, movies[0].id, movies[2].id]);

        view.sort_by("overview:desc".parse().unwrap());
        assert_eq!(view.page(0)[0].id, movies[2].id);
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let movies = static_catalog();
        let view = TableView::new(&movies, 5).unwrap();
        let text = view.render_page(0, &RenderConfig::plain());
        assert!(!text.contains('\x1b'));
        assert!(text.contains("16.07.2010"));
        assert!(text.ends_with("Страница 1 из 2 (8 фильмов, по 5 на странице)"));
    }

    #[test]
    fn detail_card_formats_fields() {
        let movies = static_catalog();
        let card = render_detail(find_movie(&movies, 1).unwrap(), &RenderConfig::plain());
        assert!(card.contains("Жанры: Фантастика, Боевик, Триллер"));
        assert!(card.contains("Продолжительность: 2ч 28мин"));
        assert!(card.contains("Бюджет: 160\u{a0}000\u{a0}000\u{a0}$"));
        assert!(find_movie(&movies, 99).is_none());
    }
}
