use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the inventory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}, {})", self.title, self.author, self.isbn, self.publication_year)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[test]
    fn test_should_build_books() {
        let book = BookDto::new("0001", "Dune", "Herbert", 1965);
        assert_eq!("0001", book.isbn.as_str());
        assert_eq!("Dune", book.title.as_str());
    }

    #[test]
    fn test_should_render_books() {
        let book = BookDto::new("0001", "Dune", "Herbert", 1965);
        assert_eq!("Dune by Herbert (0001, 1965)", book.to_string());
    }

    #[test]
    fn test_should_accept_unvalidated_fields() {
        let book = BookDto::new("", "", "", -300);
        assert_eq!(" by  (, -300)", book.to_string());
    }

    #[test]
    fn test_should_convert_to_entity() {
        let book = BookDto::new("0001", "Dune", "Herbert", 1965);
        let entity = BookEntity::from(&book);
        assert_eq!(BookEntity::new("0001", "Dune", "Herbert", 1965), entity);
        assert_eq!(book, BookDto::from(&entity));
    }
}
