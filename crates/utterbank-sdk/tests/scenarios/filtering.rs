//! Filtering Tests
//!
//! Verifies that listing filters (intent, entity, canonical flag,
//! text search) compose correctly and that corpus scopes stay
//! isolated from each other.

use anyhow::Result;
use utterbank_sdk::types::{EntityTerm, ExamplePage};
use utterbank_testing::ExampleBuilder;
use utterbank_testing::fixtures::travel_corpus;

fn ids(page: &ExamplePage) -> Vec<&str> {
    page.examples.iter().map(|e| e.id.as_str()).collect()
}

// =============================================================================
// INTENT FILTERING
// =============================================================================

#[tokio::test]
async fn test_filter_by_intent() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus
        .list(&corpus.query().intents(vec!["greet".to_string()]).unpaged())
        .await?;

    // Drafts surface first under the default listing order.
    assert_eq!(ids(&page), vec!["ex-7", "ex-6"]);
    Ok(())
}

#[tokio::test]
async fn test_intent_filter_excludes_unlabeled_examples() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let every_label = vec![
        "book_flight".to_string(),
        "cancel_booking".to_string(),
        "greet".to_string(),
    ];
    let page = corpus
        .list(&corpus.query().intents(every_label).unpaged())
        .await?;

    assert_eq!(page.total, 7, "the unlabeled example must not slip through");
    assert!(!ids(&page).contains(&"ex-8"));
    Ok(())
}

// =============================================================================
// ENTITY FILTERING
// =============================================================================

#[tokio::test]
async fn test_entity_filter_matches_any_listed_type() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus
        .list(
            &corpus
                .query()
                .entities(vec![EntityTerm::new("date")])
                .unpaged(),
        )
        .await?;
    assert_eq!(ids(&page), vec!["ex-3"]);

    let page = corpus
        .list(
            &corpus
                .query()
                .entities(vec![EntityTerm::new("date"), EntityTerm::new("city")])
                .unpaged(),
        )
        .await?;
    assert_eq!(page.total, 3, "any listed type qualifies an example");
    Ok(())
}

#[tokio::test]
async fn test_exact_entity_filter_requires_the_full_signature() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    // {city: Paris} exactly: ex-3 carries an extra date span, so only
    // ex-1 qualifies.
    let page = corpus
        .list(
            &corpus
                .query()
                .entities(vec![EntityTerm::new("city").value("Paris")])
                .exact_entities()
                .unpaged(),
        )
        .await?;
    assert_eq!(ids(&page), vec!["ex-1"]);

    // A term without a value can never match exactly.
    let page = corpus
        .list(
            &corpus
                .query()
                .entities(vec![EntityTerm::new("city")])
                .exact_entities()
                .unpaged(),
        )
        .await?;
    assert_eq!(page.total, 0, "valueless terms never match in exact mode");
    Ok(())
}

#[tokio::test]
async fn test_empty_filter_lists_behave_like_absent_filters() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus
        .list(
            &corpus
                .query()
                .intents(vec![])
                .entities(vec![])
                .exact_entities()
                .unpaged(),
        )
        .await?;

    assert_eq!(page.total, 8);
    Ok(())
}

// =============================================================================
// CANONICAL AND TEXT FILTERING
// =============================================================================

#[tokio::test]
async fn test_only_canonicals() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus
        .list(&corpus.query().only_canonicals().unpaged())
        .await?;

    assert_eq!(ids(&page), vec!["ex-1", "ex-3", "ex-4"]);
    Ok(())
}

#[tokio::test]
async fn test_text_search_is_case_insensitive() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus.list(&corpus.query().text("PARIS").unpaged()).await?;

    assert_eq!(ids(&page), vec!["ex-1", "ex-3"]);
    Ok(())
}

// =============================================================================
// SCOPE ISOLATION
// =============================================================================

#[tokio::test]
async fn test_other_projects_stay_invisible() -> Result<()> {
    let world = travel_corpus().await;
    world
        .seed(vec![
            ExampleBuilder::new("intruder-1", "unrelated utterance")
                .project("other-project")
                .intent("greet")
                .build(),
        ])
        .await?;

    let corpus = world.corpus();
    let page = corpus.list(&corpus.query().unpaged()).await?;

    assert_eq!(page.total, 8);
    assert!(!ids(&page).contains(&"intruder-1"));
    Ok(())
}

#[tokio::test]
async fn test_other_languages_stay_invisible() -> Result<()> {
    let world = travel_corpus().await;
    world
        .seed(vec![
            ExampleBuilder::new("intruder-2", "bonjour")
                .project("travel-assistant")
                .language("fr")
                .intent("greet")
                .build(),
        ])
        .await?;

    let corpus = world.corpus();
    let page = corpus
        .list(&corpus.query().intents(vec!["greet".to_string()]).unpaged())
        .await?;

    assert_eq!(ids(&page), vec!["ex-7", "ex-6"]);
    Ok(())
}
