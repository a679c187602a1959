use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::log_event;

const DEFAULT_CAPACITY: usize = 1024;

// MemoryPublisher logs every event like LogPublisher and also keeps the most recent
// ones in a bounded buffer shared by all of its clones, so a caller can hold one
// handle while a service owns another.
#[derive(Debug, Clone)]
pub struct MemoryPublisher {
    capacity: usize,
    events: Arc<Mutex<VecDeque<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    // capacity of zero keeps nothing, events are still logged
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            events: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        self.events.lock()
            .map(|events| events.iter().cloned().collect())
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))
    }

    pub fn clear(&self) -> LibraryResult<()> {
        self.events.lock()
            .map(|mut events| events.clear())
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))
    }
}

impl Default for MemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        log_event(event);
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        if self.capacity == 0 {
            return Ok(());
        }
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }
}
