use crate::books::factory;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::inventory::domain::InventoryService;
use crate::inventory::domain::service::InventoryServiceImpl;

pub fn create_inventory_service(config: &Configuration, store: RepositoryStore) -> Box<dyn InventoryService> {
    create_inventory_service_with_publisher(config, store, create_publisher(config.publisher))
}

// for callers that keep their own handle on the publisher, e.g. a shared MemoryPublisher
pub fn create_inventory_service_with_publisher(config: &Configuration, store: RepositoryStore,
                                               publisher: Box<dyn EventPublisher>) -> Box<dyn InventoryService> {
    let book_repo = factory::create_book_repository(store);
    Box::new(InventoryServiceImpl::new(config, book_repo, publisher))
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::inventory::factory::{create_inventory_service, create_inventory_service_with_publisher};
    use crate::utils::logs::capture::capture_logs;

    #[test]
    fn test_should_log_state_changes_with_memory_publisher() {
        let mut config = Configuration::new("test");
        config.publisher = GatewayPublisherVia::Memory;
        let mut svc = create_inventory_service(&config, RepositoryStore::Memory);

        let out = capture_logs(|| {
            svc.add_book(&BookDto::new("0001", "Dune", "Herbert", 1965));
            assert!(svc.checkout_book("0001"));
            assert!(svc.return_book("0001"));
        });
        let lines: Vec<&str> = out.lines().filter(|l| l.contains("INFO")).collect();
        assert_eq!(3, lines.len());
        assert!(lines[0].contains("books"));
        assert!(lines[1].contains("book_checkout"));
        assert!(lines[2].contains("book_returned"));
    }

    #[test]
    fn test_should_log_state_changes_with_default_publisher() {
        let mut svc = create_inventory_service(&Configuration::new("test"), RepositoryStore::Memory);

        let out = capture_logs(|| {
            svc.add_book(&BookDto::new("0001", "Dune", "Herbert", 1965));
            svc.remove_book("0001");
        });
        assert_eq!(2, out.lines().filter(|l| l.contains("INFO")).count());
    }

    #[test]
    fn test_should_share_injected_publisher() {
        let publisher = MemoryPublisher::new();
        let mut svc = create_inventory_service_with_publisher(
            &Configuration::new("test"), RepositoryStore::Memory, Box::new(publisher.clone()));

        svc.add_book(&BookDto::new("0001", "Dune", "Herbert", 1965));
        assert!(svc.checkout_book("0001"));

        assert_eq!(2, publisher.events().expect("should read events").len());
    }
}
