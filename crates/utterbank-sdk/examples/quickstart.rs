//! Quickstart example: Build and browse a corpus
//!
//! This minimal example demonstrates:
//! - Creating an in-memory corpus client
//! - Inserting a batch of training examples
//! - Listing with the default order
//!
//! For curation, see: examples/canonical_workflow.rs
//! For filters and paging, see: examples/paging_and_filters.rs
//!
//! Run with: cargo run -p utterbank-sdk --example quickstart

use utterbank_sdk::{Client, types::NewExample};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Everything stays in memory; swap in Client::open_default() for a
    // store under the system data directory.
    let client = Client::in_memory();
    let corpus = client.corpus("travel-assistant", "en");

    let inserted = corpus
        .insert(vec![
            NewExample::new("book a flight to Paris").intent("book_flight"),
            NewExample::new("I need a hotel in Berlin").intent("book_hotel"),
            NewExample::new("cancel my booking").intent("cancel_booking"),
            NewExample::new("please cancel it").intent("cancel_booking"),
        ])
        .await?;
    println!("Inserted {} example(s)\n", inserted.len());

    let page = corpus.list(&corpus.query()).await?;
    println!("Corpus ({} total):", page.total);
    for example in &page.examples {
        let label = example.intent.as_deref().unwrap_or("-");
        let marker = if example.metadata.canonical { "*" } else { " " };
        println!("  {} [{}] {}", marker, label, example.text);
    }

    Ok(())
}
