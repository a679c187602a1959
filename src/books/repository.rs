pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    fn contains(&self, isbn: &str) -> bool;

    // removes a book, returns number of removed records
    fn delete(&mut self, isbn: &str) -> LibraryResult<usize>;
}
