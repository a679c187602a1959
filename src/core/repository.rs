use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // creates or replaces an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an existing entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // all entities in storage order
    fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum RepositoryStore {
    #[default]
    Memory,
}
