use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 5;

/// A catalogued book. Only [`Catalog`](crate::core::catalog::Catalog) creates
/// or mutates these, so `rating` always stays within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) rating: u8,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating: MIN_RATING,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub(crate) fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.author.contains(query)
    }
}

/// An unvalidated book entry, as read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSeed {
    pub title: String,
    pub author: String,
    pub rating: Option<i32>,
}

impl BookSeed {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating: None,
        }
    }

    pub fn rated(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }
}
