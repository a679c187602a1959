pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{BookStatus, LibraryResult};

/// Owns the book catalog and the set of borrowed ISBNs.
///
/// Lookups are by ISBN only. Operations on unknown ISBNs are no-ops reported
/// through `false`/`None`; the one error a caller can see is an unknown
/// search kind from [`InventoryService::search_books`].
pub trait InventoryService {
    fn add_book(&mut self, book: &BookDto);
    fn remove_book(&mut self, isbn: &str);
    fn update_book(&mut self, isbn: &str, title: &str, author: &str, publication_year: i32) -> bool;
    fn search_books(&self, kind: &str, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn checkout_book(&mut self, isbn: &str) -> bool;
    fn return_book(&mut self, isbn: &str) -> bool;
    fn is_available(&self, isbn: &str) -> bool;
    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn find_all_books(&self) -> Vec<BookDto>;
    fn book_status(&self, isbn: &str) -> Option<BookStatus>;
}
