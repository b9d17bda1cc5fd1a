//! Filtering and paging example: Walk a corpus window by window
//!
//! This example demonstrates:
//! - Building queries with intent, entity, and text filters
//! - Sorting by different fields
//! - Cursor-based pagination
//!
//! Run with: cargo run -p utterbank-sdk --example paging_and_filters

use utterbank_sdk::{
    Client,
    types::{EntityAnnotation, EntityTerm, NewExample, SortDirection, SortField},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::in_memory();
    let corpus = client.corpus("travel-assistant", "en");

    corpus
        .insert(vec![
            NewExample::new("book a flight to Paris")
                .intent("book_flight")
                .entities(vec![EntityAnnotation::new("city", "Paris", 17, 22)]),
            NewExample::new("book a flight to Berlin")
                .intent("book_flight")
                .entities(vec![EntityAnnotation::new("city", "Berlin", 17, 23)]),
            NewExample::new("find me a train to Lyon")
                .intent("book_train")
                .entities(vec![EntityAnnotation::new("city", "Lyon", 19, 23)]),
            NewExample::new("cancel my booking").intent("cancel_booking"),
            NewExample::new("hello there").intent("greet"),
        ])
        .await?;

    // Entity filter: anything mentioning a city
    let with_city = corpus
        .list(
            &corpus
                .query()
                .entities(vec![EntityTerm::new("city")])
                .unpaged(),
        )
        .await?;
    println!("Mentioning a city ({}):", with_city.total);
    for example in &with_city.examples {
        println!("  {}", example.text);
    }

    // Text search, newest first
    let flights = corpus
        .list(
            &corpus
                .query()
                .text("flight")
                .sort(SortField::CreatedAt, SortDirection::Descending)
                .unpaged(),
        )
        .await?;
    println!("\nMatching \"flight\" ({}):", flights.total);
    for example in &flights.examples {
        println!("  {}", example.text);
    }

    // Walk the whole corpus two at a time
    println!("\nPage walk:");
    let query = corpus.query().page_size(2);
    let mut page = corpus.list(&query).await?;
    let mut number = 1;
    loop {
        println!("  page {}:", number);
        for example in &page.examples {
            println!("    {}", example.text);
        }
        if !page.has_next_page {
            break;
        }
        page = corpus.list(&query.clone().cursor(page.end_cursor)).await?;
        number += 1;
    }

    Ok(())
}
