pub mod model;
pub mod service;

use crate::patrons::dto::PatronDto;

/// Owns the patron directory and each patron's borrowing history.
/// Independent of the inventory: recording a borrow never checks the catalog.
pub trait PatronService {
    fn add_patron(&mut self, patron: &PatronDto);
    fn update_patron(&mut self, id: &str, name: &str) -> bool;
    fn record_borrow(&mut self, patron_id: &str, isbn: &str) -> bool;
    fn get_borrow_history(&self, patron_id: &str) -> Vec<String>;
    fn find_patron_by_id(&self, id: &str) -> Option<PatronDto>;
    fn find_all_patrons(&self) -> Vec<PatronDto>;
}
