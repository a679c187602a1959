use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::LibraryError;

pub mod factory;

// SearchKind selects the book field a query is matched against
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchKind {
    Title,
    Author,
    Isbn,
}

impl SearchKind {
    /// Returns every book whose field equals `query`. Title and author compare
    /// ignoring case, isbn is an exact token. Matches keep the order of `books`.
    pub fn search(&self, books: &[BookDto], query: &str) -> Vec<BookDto> {
        books.iter().filter(|b| self.matches(b, query)).cloned().collect()
    }

    fn matches(&self, book: &BookDto, query: &str) -> bool {
        match self {
            SearchKind::Title => equals_ignore_case(book.title.as_str(), query),
            SearchKind::Author => equals_ignore_case(book.author.as_str(), query),
            SearchKind::Isbn => book.isbn == query,
        }
    }
}

// compared char by char, a pair matches when it agrees in upper or lower case
fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_equal_ignore_case(x, y))
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

impl FromStr for SearchKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        factory::select(s)
    }
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchKind::Title => write!(f, "title"),
            SearchKind::Author => write!(f, "author"),
            SearchKind::Isbn => write!(f, "isbn"),
        }
    }
}
