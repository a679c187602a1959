use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is the record the book repository stores, keyed by isbn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author", 2001);
        assert_eq!("isbn", book.id().as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(2001, book.publication_year);
    }
}
