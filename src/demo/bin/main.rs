use serde_json::json;
use tracing::info;
use lms_lite::books::dto::BookDto;
use lms_lite::core::domain::Configuration;
use lms_lite::core::library::LibraryResult;
use lms_lite::core::repository::RepositoryStore;
use lms_lite::inventory::factory::create_inventory_service;
use lms_lite::patrons::dto::PatronDto;
use lms_lite::patrons::factory::create_patron_service;
use lms_lite::utils::logs::setup_tracing;

// Replays a short lending session against in-memory services and prints each
// result as a JSON line. LMS_CONFIG may hold a JSON Configuration.
fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = match std::env::var("LMS_CONFIG") {
        Ok(json) => Configuration::from_json(json.as_str())?,
        Err(_) => Configuration::new("dev"),
    };
    info!("starting demo for branch {}", config.branch_id);

    let mut inventory = create_inventory_service(&config, RepositoryStore::Memory);
    let mut patrons = create_patron_service(&config, RepositoryStore::Memory);

    inventory.add_book(&BookDto::new("0001", "Dune", "Herbert", 1965));
    inventory.add_book(&BookDto::new("0002", "Emma", "Austen", 1815));
    patrons.add_patron(&PatronDto::new("p1", "Ada"));

    let found: Vec<String> = inventory.search_books("title", "dune")?
        .iter().map(|b| b.to_string()).collect();
    println!("{}", json!({"op": "search", "kind": "title", "query": "dune", "result": found}));

    let checked_out = inventory.checkout_book("0001");
    if checked_out {
        patrons.record_borrow("p1", "0001");
    }
    println!("{}", json!({"op": "checkout", "isbn": "0001", "result": checked_out}));
    println!("{}", json!({"op": "available", "isbn": "0001", "result": inventory.is_available("0001")}));
    println!("{}", json!({"op": "return", "isbn": "0001", "result": inventory.return_book("0001")}));
    println!("{}", json!({"op": "available", "isbn": "0001", "result": inventory.is_available("0001")}));
    println!("{}", json!({"op": "history", "patron_id": "p1", "result": patrons.get_borrow_history("p1")}));
    println!("{}", json!({"op": "patrons", "result": patrons.find_all_patrons()}));

    if let Err(err) = inventory.search_books("genre", "x") {
        println!("{}", json!({"op": "search", "kind": "genre", "error": err.to_string()}));
    }
    Ok(())
}
