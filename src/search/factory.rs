use crate::core::library::{LibraryError, LibraryResult};
use crate::search::SearchKind;

// Maps a search-kind token to its variant, ignoring case.
pub fn select(kind: &str) -> LibraryResult<SearchKind> {
    match kind.to_lowercase().as_str() {
        "title" => Ok(SearchKind::Title),
        "author" => Ok(SearchKind::Author),
        "isbn" => Ok(SearchKind::Isbn),
        _ => Err(LibraryError::invalid_argument(format!("Invalid search type {}", kind).as_str())),
    }
}
