use std::collections::HashMap;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

#[derive(Debug, Default)]
pub struct MemoryPatronRepository {
    patrons: HashMap<String, PatronEntity>,
}

impl MemoryPatronRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, id: &str) -> LibraryResult<&mut PatronEntity> {
        self.patrons.get_mut(id)
            .ok_or_else(|| LibraryError::not_found(format!("patron not found for {}", id).as_str()))
    }
}

impl Repository<PatronEntity> for MemoryPatronRepository {
    fn create(&mut self, entity: &PatronEntity) -> LibraryResult<usize> {
        self.patrons.insert(entity.patron_id.to_string(), entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &PatronEntity) -> LibraryResult<usize> {
        let existing = self.get_mut(entity.patron_id.as_str())?;
        *existing = entity.clone();
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<PatronEntity> {
        self.patrons.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("patron not found for {}", id).as_str()))
    }

    fn find_all(&self) -> LibraryResult<Vec<PatronEntity>> {
        Ok(self.patrons.values().cloned().collect())
    }
}

impl PatronRepository for MemoryPatronRepository {
    fn append_history(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<usize> {
        let existing = self.get_mut(patron_id)?;
        existing.borrowing_history.push(isbn.to_string());
        Ok(existing.borrowing_history.len())
    }
}
