use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// PatronEntity is the record the patron repository stores, keyed by patron_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub name: String,
    pub borrowing_history: Vec<String>,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            borrowing_history: vec![],
        }
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}
