use std::collections::HashMap;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.insert(entity.isbn.to_string(), entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        match self.books.get_mut(entity.isbn.as_str()) {
            Some(existing) => {
                existing.title = entity.title.to_string();
                existing.author = entity.author.to_string();
                existing.publication_year = entity.publication_year;
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("book not found for {}", entity.isbn).as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.values().cloned().collect())
    }
}

impl BookRepository for MemoryBookRepository {
    fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    fn delete(&mut self, isbn: &str) -> LibraryResult<usize> {
        Ok(self.books.remove(isbn).map(|_| 1).unwrap_or(0))
    }
}
