use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog is the ordered collection of book records. Insertion order is
// significant: it determines position results. The owner mutates the
// sequence directly; the catalog itself only computes ids and positions.
// Id uniqueness is a caller responsibility and is not enforced here.
#[derive(Debug, Default, PartialEq, Clone)]
pub(crate) struct Catalog {
    pub books: Vec<BookEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self { books }
    }

    // Next free id: 1 for an empty catalog, otherwise max id + 1. The id is
    // computed, not reserved; a later insertion with a non-sequential id can
    // still collide with it.
    pub fn next_book_id(&self) -> i64 {
        self.books.iter()
            .map(|book| book.book_id)
            .max()
            .map_or(1, |max_id| max_id + 1)
    }

    // Zero-based position of the first record with the given id.
    pub fn index_by_book_id(&self, book_id: i64) -> LibraryResult<usize> {
        self.books.iter()
            .position(|book| book.book_id == book_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with id {} does not exist", book_id).as_str()))
    }
}
