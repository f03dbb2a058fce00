use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity abstracts a single catalog record; ids are caller-assigned and
// the catalog does not validate them on construction.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct BookEntity {
    pub book_id: i64,
    pub name: String,
    pub pages: i64,
}

impl BookEntity {
    pub fn new(book_id: i64, name: &str, pages: i64) -> Self {
        Self {
            book_id,
            name: name.to_string(),
            pages,
        }
    }
}

// The short human-readable label; the derived Debug form lists all fields.
impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\"", self.name)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}
