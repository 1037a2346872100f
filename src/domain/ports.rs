use crate::domain::model::BookSeed;

/// Anything that can hand over an ordered list of books to seed a catalog with.
pub trait BookSource {
    fn seed_books(&self) -> &[BookSeed];
}

impl BookSource for [BookSeed] {
    fn seed_books(&self) -> &[BookSeed] {
        self
    }
}

impl BookSource for Vec<BookSeed> {
    fn seed_books(&self) -> &[BookSeed] {
        self
    }
}
