use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::domain::model::PatronEntity;


// PatronDto abstracts a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub borrowing_history: Vec<String>,
}

impl PatronDto {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            borrowing_history: vec![],
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            borrowing_history: other.borrowing_history.clone(),
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            borrowing_history: other.borrowing_history.clone(),
        }
    }
}
