use std::collections::HashMap;
use tracing::{debug, warn};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

pub struct PatronServiceImpl {
    branch_id: String,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl PatronServiceImpl {
    pub fn new(config: &Configuration, patron_repository: Box<dyn PatronRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        PatronServiceImpl {
            branch_id: config.branch_id.to_string(),
            patron_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish patron event {}", err);
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn add_patron(&mut self, patron: &PatronDto) {
        if let Err(err) = self.patron_repository.create(&PatronEntity::from(patron)) {
            warn!("failed to add patron {} {}", patron.patron_id, err);
            return;
        }
        self.publish(DomainEvent::added(
            "patrons", "patrons", patron.patron_id.as_str(), &self.metadata(), patron));
    }

    fn update_patron(&mut self, id: &str, name: &str) -> bool {
        let mut patron = match self.patron_repository.get(id) {
            Ok(patron) => patron,
            Err(_) => {
                debug!("no patron to update for {}", id);
                return false;
            }
        };
        patron.name = name.to_string();
        if let Err(err) = self.patron_repository.update(&patron) {
            warn!("failed to update patron {} {}", id, err);
            return false;
        }
        self.publish(DomainEvent::updated(
            "patrons", "patrons", id, &self.metadata(), &PatronDto::from(&patron)));
        true
    }

    fn record_borrow(&mut self, patron_id: &str, isbn: &str) -> bool {
        match self.patron_repository.append_history(patron_id, isbn) {
            Ok(_) => {
                self.publish(DomainEvent::borrow_recorded(
                    "patron_borrow", "patrons", patron_id, &self.metadata(), &isbn));
                true
            }
            Err(LibraryError::NotFound { .. }) => {
                debug!("no patron {} to record borrow of {}", patron_id, isbn);
                false
            }
            Err(err) => {
                warn!("failed to record borrow of {} for {} {}", isbn, patron_id, err);
                false
            }
        }
    }

    fn get_borrow_history(&self, patron_id: &str) -> Vec<String> {
        self.patron_repository.get(patron_id)
            .map(|p| p.borrowing_history)
            .unwrap_or_default()
    }

    fn find_patron_by_id(&self, id: &str) -> Option<PatronDto> {
        self.patron_repository.get(id).ok().map(|p| PatronDto::from(&p))
    }

    fn find_all_patrons(&self) -> Vec<PatronDto> {
        match self.patron_repository.find_all() {
            Ok(patrons) => patrons.iter().map(PatronDto::from).collect(),
            Err(err) => {
                warn!("failed to list patrons {}", err);
                vec![]
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::patrons::domain::PatronService;
    use crate::patrons::domain::service::PatronServiceImpl;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory;

    fn build_service() -> (PatronServiceImpl, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let svc = PatronServiceImpl::new(&Configuration::new("test"),
                                         factory::create_patron_repository(RepositoryStore::Memory),
                                         Box::new(publisher.clone()));
        (svc, publisher)
    }

    #[test]
    fn test_should_add_patron() {
        let mut patron_svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory);

        let patron = PatronDto::new("p1", "Ada");
        patron_svc.add_patron(&patron);

        let loaded = patron_svc.find_patron_by_id("p1").expect("should return patron");
        assert_eq!(patron, loaded);
    }

    #[test]
    fn test_should_overwrite_patron_with_same_id() {
        let mut patron_svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory);

        patron_svc.add_patron(&PatronDto::new("p1", "Ada"));
        assert!(patron_svc.record_borrow("p1", "0001"));
        patron_svc.add_patron(&PatronDto::new("p1", "Grace"));

        let loaded = patron_svc.find_patron_by_id("p1").expect("should return patron");
        assert_eq!("Grace", loaded.name.as_str());
        assert!(loaded.borrowing_history.is_empty());
    }

    #[test]
    fn test_should_update_patron() {
        let (mut patron_svc, publisher) = build_service();

        patron_svc.add_patron(&PatronDto::new("p1", "Ada"));
        assert!(patron_svc.record_borrow("p1", "0001"));
        assert!(patron_svc.update_patron("p1", "Ada Lovelace"));

        let loaded = patron_svc.find_patron_by_id("p1").expect("should return patron");
        assert_eq!("Ada Lovelace", loaded.name.as_str());
        assert_eq!(vec!["0001".to_string()], loaded.borrowing_history);

        let events = publisher.events().expect("should read events");
        assert_eq!(DomainEventType::Updated, events[2].kind);
        assert_eq!(Some(&"test".to_string()), events[2].metadata.get("branch_id"));
    }

    #[test]
    fn test_should_ignore_update_of_unknown_patron() {
        let (mut patron_svc, publisher) = build_service();

        assert!(!patron_svc.update_patron("p404", "Nobody"));
        assert!(patron_svc.find_patron_by_id("p404").is_none());
        assert!(publisher.events().expect("should read events").is_empty());
    }

    #[test]
    fn test_should_record_history_in_order() {
        let (mut patron_svc, publisher) = build_service();

        patron_svc.add_patron(&PatronDto::new("p1", "Ada"));
        assert!(patron_svc.record_borrow("p1", "0002"));
        assert!(patron_svc.record_borrow("p1", "0001"));
        assert!(patron_svc.record_borrow("p1", "0002"));

        assert_eq!(vec!["0002", "0001", "0002"], patron_svc.get_borrow_history("p1"));
        let kinds: Vec<DomainEventType> = publisher.events().expect("should read events").iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::BorrowRecorded,
                        DomainEventType::BorrowRecorded, DomainEventType::BorrowRecorded], kinds);
    }

    #[test]
    fn test_should_ignore_borrow_for_unknown_patron() {
        let (mut patron_svc, publisher) = build_service();

        assert!(!patron_svc.record_borrow("p404", "0001"));
        assert!(publisher.events().expect("should read events").is_empty());
    }

    #[test]
    fn test_should_find_all_patrons() {
        let mut patron_svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory);
        assert!(patron_svc.find_all_patrons().is_empty());

        patron_svc.add_patron(&PatronDto::new("p1", "Ada"));
        patron_svc.add_patron(&PatronDto::new("p2", "Grace"));
        assert!(patron_svc.record_borrow("p2", "0001"));

        let mut all = patron_svc.find_all_patrons();
        all.sort_by(|a, b| a.patron_id.cmp(&b.patron_id));
        assert_eq!(2, all.len());
        assert_eq!("Ada", all[0].name.as_str());
        assert_eq!(vec!["0001".to_string()], all[1].borrowing_history);
    }

    #[test]
    fn test_should_return_empty_history_for_unknown_patron() {
        let patron_svc = factory::create_patron_service(&Configuration::new("test"), RepositoryStore::Memory);

        assert!(patron_svc.get_borrow_history("p404").is_empty());
    }
}
