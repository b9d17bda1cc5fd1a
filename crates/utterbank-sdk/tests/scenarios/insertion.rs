//! Insertion Tests
//!
//! Verifies batch insertion through the SDK: stamping, canonical
//! auto-assignment, text collision handling, and validation.

use anyhow::Result;
use utterbank_sdk::types::{InsertOptions, NewExample};
use utterbank_sdk::{Client, Error};
use utterbank_testing::TestCorpus;

#[tokio::test]
async fn test_inserted_examples_are_stamped_for_their_scope() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    let corpus = world.corpus();

    let inserted = corpus
        .insert(vec![NewExample::new("book a flight").intent("book_flight")])
        .await?;

    assert_eq!(inserted.len(), 1);
    let example = &inserted[0];
    assert!(!example.id.is_empty());
    assert_eq!(example.project_id, "travel-assistant");
    assert_eq!(example.metadata.language, "en");
    assert_eq!(example.created_at, example.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_first_of_group_wins_the_canonical_slot() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    let corpus = world.corpus();

    let inserted = corpus
        .insert(vec![
            NewExample::new("cancel my booking").intent("cancel_booking"),
            NewExample::new("please cancel it").intent("cancel_booking"),
            NewExample::new("hello there").intent("greet"),
        ])
        .await?;

    let canonical: Vec<&str> = inserted
        .iter()
        .filter(|e| e.metadata.canonical)
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(canonical, vec!["cancel my booking", "hello there"]);
    Ok(())
}

#[tokio::test]
async fn test_existing_holder_blocks_auto_assignment() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    world
        .seed(vec![
            world
                .example("ex-1", "cancel my booking")
                .intent("cancel_booking")
                .canonical()
                .build(),
        ])
        .await?;

    let corpus = world.corpus();
    let inserted = corpus
        .insert(vec![NewExample::new("please cancel it").intent("cancel_booking")])
        .await?;

    assert!(
        !inserted[0].metadata.canonical,
        "the stored holder keeps the slot"
    );
    Ok(())
}

#[tokio::test]
async fn test_duplicate_texts_within_a_batch_collapse_to_the_first() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    let corpus = world.corpus();

    let inserted = corpus
        .insert(vec![
            NewExample::new("hello there").intent("greet"),
            NewExample::new("hello there").intent("cancel_booking"),
        ])
        .await?;

    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].intent.as_deref(), Some("greet"));
    Ok(())
}

#[tokio::test]
async fn test_colliding_text_is_dropped_by_default() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    world
        .seed(vec![world.example("ex-1", "hello there").intent("greet").build()])
        .await?;

    let corpus = world.corpus();
    let inserted = corpus
        .insert(vec![NewExample::new("hello there").intent("greet")])
        .await?;

    assert!(inserted.is_empty());
    let page = corpus.list(&corpus.query().unpaged()).await?;
    assert_eq!(page.examples[0].id, "ex-1", "the stored example survives");
    Ok(())
}

#[tokio::test]
async fn test_overwrite_option_replaces_the_stored_example() -> Result<()> {
    let world = TestCorpus::new("travel-assistant", "en");
    world
        .seed(vec![world.example("ex-1", "hello there").intent("greet").build()])
        .await?;

    let corpus = world.corpus();
    let options = InsertOptions {
        overwrite_on_same_text: true,
        ..Default::default()
    };
    let inserted = corpus
        .insert_with(
            vec![NewExample::new("hello there").intent("welcome")],
            &options,
        )
        .await?;

    assert_eq!(inserted.len(), 1);
    let page = corpus.list(&corpus.query().unpaged()).await?;
    assert_eq!(page.total, 1);
    assert_ne!(page.examples[0].id, "ex-1");
    assert_eq!(page.examples[0].intent.as_deref(), Some("welcome"));
    Ok(())
}

#[tokio::test]
async fn test_emoji_in_any_candidate_rejects_the_whole_batch() -> Result<()> {
    let client = Client::in_memory();
    let corpus = client.corpus("travel-assistant", "en");

    let result = corpus
        .insert(vec![
            NewExample::new("perfectly clean"),
            NewExample::new("thumbs up 👍"),
        ])
        .await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    let page = corpus.list(&corpus.query().unpaged()).await?;
    assert_eq!(page.total, 0, "nothing may be written on validation failure");
    Ok(())
}
