use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::inventory::domain::InventoryService;
use crate::search::factory::select;

pub struct InventoryServiceImpl {
    branch_id: String,
    clear_borrowed_on_remove: bool,
    book_repository: Box<dyn BookRepository>,
    borrowed: HashSet<String>,
    events_publisher: Box<dyn EventPublisher>,
}

impl InventoryServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            clear_borrowed_on_remove: config.clear_borrowed_on_remove,
            book_repository,
            borrowed: HashSet::new(),
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // publish failures are logged and never change the outcome of an operation
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish inventory event {}", err);
        }
    }

    fn find_all(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all()?;
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl InventoryService for InventoryServiceImpl {
    fn add_book(&mut self, book: &BookDto) {
        if let Err(err) = self.book_repository.create(&BookEntity::from(book)) {
            warn!("failed to add book {} {}", book, err);
            return;
        }
        self.publish(DomainEvent::added(
            "books", "inventory", book.isbn.as_str(), &self.metadata(), book));
    }

    fn remove_book(&mut self, isbn: &str) {
        let removed = match self.book_repository.get(isbn) {
            Ok(entity) => BookDto::from(&entity),
            Err(_) => return,
        };
        if let Err(err) = self.book_repository.delete(isbn) {
            warn!("failed to remove book {} {}", removed, err);
            return;
        }
        if self.clear_borrowed_on_remove {
            self.borrowed.remove(isbn);
        }
        self.publish(DomainEvent::deleted(
            "books", "inventory", isbn, &self.metadata(), &removed));
    }

    fn update_book(&mut self, isbn: &str, title: &str, author: &str, publication_year: i32) -> bool {
        let book = BookDto::new(isbn, title, author, publication_year);
        match self.book_repository.update(&BookEntity::from(&book)) {
            Ok(_) => {
                self.publish(DomainEvent::updated(
                    "books", "inventory", isbn, &self.metadata(), &book));
                true
            }
            Err(LibraryError::NotFound { .. }) => {
                debug!("no book to update for {}", isbn);
                false
            }
            Err(err) => {
                warn!("failed to update book {} {}", book, err);
                false
            }
        }
    }

    fn search_books(&self, kind: &str, query: &str) -> LibraryResult<Vec<BookDto>> {
        let kind = select(kind)?;
        let books = self.find_all()?;
        Ok(kind.search(&books, query))
    }

    fn checkout_book(&mut self, isbn: &str) -> bool {
        if !self.is_available(isbn) {
            debug!("book {} cannot be checked out", isbn);
            return false;
        }
        self.borrowed.insert(isbn.to_string());
        self.publish(DomainEvent::checked_out(
            "book_checkout", "inventory", isbn, &self.metadata(), &self.find_book_by_isbn(isbn)));
        true
    }

    // the borrowed set is authoritative, the book may no longer be catalogued
    fn return_book(&mut self, isbn: &str) -> bool {
        if !self.borrowed.remove(isbn) {
            debug!("book {} was not checked out", isbn);
            return false;
        }
        self.publish(DomainEvent::returned(
            "book_returned", "inventory", isbn, &self.metadata(), &self.find_book_by_isbn(isbn)));
        true
    }

    fn is_available(&self, isbn: &str) -> bool {
        self.book_status(isbn) == Some(BookStatus::Available)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.book_repository.get(isbn).ok().map(|b| BookDto::from(&b))
    }

    fn find_all_books(&self) -> Vec<BookDto> {
        self.find_all().unwrap_or_else(|err| {
            warn!("failed to list books {}", err);
            vec![]
        })
    }

    fn book_status(&self, isbn: &str) -> Option<BookStatus> {
        if !self.book_repository.contains(isbn) {
            None
        } else if self.borrowed.contains(isbn) {
            Some(BookStatus::CheckedOut)
        } else {
            Some(BookStatus::Available)
        }
    }
}
