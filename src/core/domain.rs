use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines the key shared by every stored record
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // removing a book also drops it from the borrowed set
    #[serde(default = "default_clear_borrowed_on_remove")]
    pub clear_borrowed_on_remove: bool,
    #[serde(default)]
    pub publisher: GatewayPublisherVia,
}

fn default_clear_borrowed_on_remove() -> bool {
    true
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            clear_borrowed_on_remove: default_clear_borrowed_on_remove(),
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.branch_id.trim().is_empty() {
            return Err(LibraryError::validation("branch_id must not be empty", Some("400".to_string())));
        }
        Ok(())
    }
}
