pub mod memory_patron_repository;

use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;


pub trait PatronRepository: Repository<PatronEntity> {
    // appends isbn to the stored history, NotFound for an unknown patron
    fn append_history(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<usize>;
}
