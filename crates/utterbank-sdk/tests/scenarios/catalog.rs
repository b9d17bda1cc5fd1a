//! Catalog Tests
//!
//! Verifies the intent catalog: grouping by intent, signature
//! variants, representative selection, and the entity type union.

use anyhow::Result;
use utterbank_testing::TestCorpus;
use utterbank_testing::fixtures::travel_corpus;

#[tokio::test]
async fn test_catalog_lists_intents_in_sorted_order() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let catalog = corpus.catalog().await?;

    let intents: Vec<&str> = catalog.intents.keys().map(String::as_str).collect();
    assert_eq!(intents, vec!["book_flight", "cancel_booking", "greet"]);
    Ok(())
}

#[tokio::test]
async fn test_unlabeled_examples_never_reach_the_catalog() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let catalog = corpus.catalog().await?;

    for variants in catalog.intents.values() {
        for variant in variants {
            assert_ne!(variant.example.id, "ex-8");
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_variants_split_by_entity_type_signature() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let catalog = corpus.catalog().await?;

    let book_flight = &catalog.intents["book_flight"];
    assert_eq!(book_flight.len(), 2, "one variant per type signature");
    assert_eq!(book_flight[0].entity_types, vec!["city"]);
    assert_eq!(book_flight[1].entity_types, vec!["city", "date"]);

    // Berlin shares the {city} signature and founds no new variant.
    assert_eq!(book_flight[0].example.id, "ex-1");
    Ok(())
}

#[tokio::test]
async fn test_canonical_examples_win_the_representative_slot() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let catalog = corpus.catalog().await?;

    // ex-4 is canonical, ex-5 merely precedes it among the drafts.
    let cancel = &catalog.intents["cancel_booking"];
    assert_eq!(cancel.len(), 1);
    assert_eq!(cancel[0].example.id, "ex-4");

    // With no canonical in the group, store order decides.
    let greet = &catalog.intents["greet"];
    assert_eq!(greet[0].example.id, "ex-6");
    Ok(())
}

#[tokio::test]
async fn test_entity_types_union_spans_the_whole_scope() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let catalog = corpus.catalog().await?;
    assert_eq!(catalog.entity_types, vec!["city", "date"]);
    Ok(())
}

#[tokio::test]
async fn test_catalog_serializes_for_export() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    world
        .seed(vec![
            world
                .example("ex-1", "book a flight to Paris")
                .intent("book_flight")
                .entity("city", "Paris")
                .canonical()
                .build(),
        ])
        .await?;

    let corpus = world.corpus();
    let catalog = corpus.catalog().await?;

    let value = serde_json::to_value(&catalog)?;
    assert_eq!(value["entity_types"], serde_json::json!(["city"]));
    assert_eq!(
        value["intents"]["book_flight"][0]["entity_types"],
        serde_json::json!(["city"])
    );
    assert_eq!(
        value["intents"]["book_flight"][0]["example"]["id"],
        serde_json::json!("ex-1")
    );
    Ok(())
}
