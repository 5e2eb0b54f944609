use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry as handed to the front end.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster: String,
    pub release_date: String,
    pub vote_average: f64,
    pub genres: Vec<Genre>,
    pub runtime: u64,
    pub budget: u64,
    pub revenue: u64,
}

/// Genre as known at the time the record was built.
///
/// Listing entries only carry numeric codes; they are replaced with names once
/// the per-movie detail lookup succeeds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Genre {
    Name(String),
    Code(i64),
}

impl Genre {
    pub fn is_name(&self) -> bool {
        matches!(self, Genre::Name(_))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genre::Name(name) => f.write_str(name),
            Genre::Code(code) => write!(f, "{code}"),
        }
    }
}
