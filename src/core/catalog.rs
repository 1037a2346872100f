use crate::domain::model::Book;
use crate::domain::ports::BookSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_rating;
use serde::Serialize;

/// An ordered, in-memory collection of books.
///
/// Insertion order is kept and matters: title lookups hit the first match and
/// [`Catalog::highest_rated`] breaks ties in favour of the earliest book.
/// There is no internal locking; wrap the catalog in a `Mutex` to share it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from seed entries, keeping their order. Fails without
    /// returning a partial catalog if any seed carries an out-of-range rating.
    pub fn from_source<S: BookSource + ?Sized>(source: &S) -> Result<Self> {
        let books = source
            .seed_books()
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let mut book = Book::new(seed.title.clone(), seed.author.clone());
                if let Some(rating) = seed.rating {
                    book.rating = validate_rating(&format!("books[{}].rating", i), rating)?;
                }
                Ok(book)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Seeded catalog with {} books", books.len());
        Ok(Self { books })
    }

    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) {
        let book = Book::new(title, author);
        tracing::debug!("Adding \"{}\" by {}", book.title, book.author);
        self.books.push(book);
    }

    /// Removes every book with exactly this title and returns how many went.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        let removed = before - self.books.len();
        tracing::debug!("Removed {} book(s) titled \"{}\"", removed, title);
        removed
    }

    /// Case-sensitive substring match against title or author.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|book| book.matches(query)).collect()
    }

    /// Rates the first book with this title. A missing title is reported
    /// before an out-of-range rating.
    pub fn rate(&mut self, title: &str, rating: i32) -> Result<()> {
        let book = match self.books.iter_mut().find(|book| book.title == title) {
            Some(book) => book,
            None => {
                tracing::warn!("Cannot rate \"{}\": book not found", title);
                return Err(CatalogError::NotFoundError {
                    title: title.to_string(),
                });
            }
        };

        let rating = validate_rating("rating", rating).inspect_err(|e| {
            tracing::warn!("Cannot rate \"{}\": {}", title, e);
        })?;

        tracing::debug!("Rating \"{}\" {} -> {}", title, book.rating, rating);
        book.rating = rating;
        Ok(())
    }

    pub fn highest_rated(&self) -> Option<&Book> {
        self.books
            .iter()
            .reduce(|best, book| if book.rating > best.rating { book } else { best })
    }

    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Exact author match. An empty result is logged, not treated as an error.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.author == author)
            .collect();
        if found.is_empty() {
            tracing::info!("No books found by this author: {}", author);
        }
        found
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
