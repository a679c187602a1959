use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

pub fn create_patron_repository(store: RepositoryStore) -> Box<dyn PatronRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryPatronRepository::new())
        }
    }
}

pub fn create_patron_service(config: &Configuration, store: RepositoryStore) -> Box<dyn PatronService> {
    create_patron_service_with_publisher(config, store, create_publisher(config.publisher))
}

pub fn create_patron_service_with_publisher(config: &Configuration, store: RepositoryStore,
                                            publisher: Box<dyn EventPublisher>) -> Box<dyn PatronService> {
    let patron_repo = create_patron_repository(store);
    Box::new(PatronServiceImpl::new(config, patron_repo, publisher))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::{create_patron_service, create_patron_service_with_publisher};
    use crate::utils::logs::capture::capture_logs;

    #[test]
    fn test_should_log_patron_changes_with_memory_publisher() {
        let mut config = Configuration::new("test");
        config.publisher = GatewayPublisherVia::Memory;
        let mut svc = create_patron_service(&config, RepositoryStore::Memory);

        let out = capture_logs(|| {
            svc.add_patron(&PatronDto::new("p1", "Ada"));
            assert!(svc.record_borrow("p1", "0001"));
        });
        let lines: Vec<&str> = out.lines().filter(|l| l.contains("INFO")).collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].contains("patrons"));
        assert!(lines[1].contains("patron_borrow"));
    }

    #[test]
    fn test_should_share_injected_publisher() {
        let publisher = MemoryPublisher::new();
        let mut svc = create_patron_service_with_publisher(
            &Configuration::new("test"), RepositoryStore::Memory, Box::new(publisher.clone()));

        svc.add_patron(&PatronDto::new("p1", "Ada"));

        assert_eq!(1, publisher.events().expect("should read events").len());
    }
}
