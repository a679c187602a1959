pub mod books;
pub mod core;
pub mod gateway;
pub mod inventory;
pub mod patrons;
pub mod search;
pub mod utils;
