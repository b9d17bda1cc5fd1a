//! Canonical Switch Tests
//!
//! Verifies promotion and demotion of canonical examples through the
//! SDK, including the group lookup by (intent, entity signature).

use anyhow::Result;
use utterbank_sdk::types::{Example, SwitchOutcome};
use utterbank_testing::TestCorpus;
use utterbank_testing::fixtures::travel_corpus;

async fn find(world: &TestCorpus, id: &str) -> Result<Example> {
    let corpus = world.corpus();
    let page = corpus.list(&corpus.query().unpaged()).await?;
    Ok(page
        .examples
        .into_iter()
        .find(|e| e.id == id)
        .expect("fixture example must exist"))
}

#[tokio::test]
async fn test_promotion_in_a_group_without_a_holder() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    // The (book_flight, {city: Berlin}) group has no canonical holder.
    let berlin = find(&world, "ex-2").await?;
    let outcome = corpus.switch_canonical(&berlin).await?;

    let SwitchOutcome::Switched { updated } = outcome else {
        panic!("promotion must write");
    };
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id, "ex-2");
    assert!(updated[0].metadata.canonical);

    // The holder of the neighboring {city: Paris} group is untouched.
    assert!(find(&world, "ex-1").await?.metadata.canonical);
    Ok(())
}

#[tokio::test]
async fn test_promotion_demotes_the_current_holder() -> Result<()> {
    let world = travel_corpus().await;
    world
        .seed(vec![
            world
                .example("ex-9", "fly me to Paris")
                .intent("book_flight")
                .entity("city", "Paris")
                .build(),
        ])
        .await?;

    let corpus = world.corpus();
    let challenger = find(&world, "ex-9").await?;
    let outcome = corpus.switch_canonical(&challenger).await?;

    let SwitchOutcome::Switched { updated } = outcome else {
        panic!("promotion must write");
    };
    // Toggled example first, demoted holder second.
    let ids: Vec<&str> = updated.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ex-9", "ex-1"]);
    assert!(updated[0].metadata.canonical);
    assert!(!updated[1].metadata.canonical);

    // ex-3 shares the city type but not the value signature, so its
    // slot is unaffected.
    assert!(find(&world, "ex-3").await?.metadata.canonical);
    Ok(())
}

#[tokio::test]
async fn test_demotion_leaves_the_group_without_a_holder() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let holder = find(&world, "ex-4").await?;
    let outcome = corpus.switch_canonical(&holder).await?;

    let SwitchOutcome::Switched { updated } = outcome else {
        panic!("demotion must write");
    };
    assert_eq!(updated.len(), 1);
    assert!(!updated[0].metadata.canonical);

    let page = corpus
        .list(
            &corpus
                .query()
                .intents(vec!["cancel_booking".to_string()])
                .only_canonicals()
                .unpaged(),
        )
        .await?;
    assert_eq!(page.total, 0, "no replacement is promoted on demotion");
    Ok(())
}

#[tokio::test]
async fn test_unlabeled_examples_are_outside_canonical_bookkeeping() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let unlabeled = find(&world, "ex-8").await?;
    let outcome = corpus.switch_canonical(&unlabeled).await?;

    assert_eq!(outcome, SwitchOutcome::NoChange);
    assert!(!find(&world, "ex-8").await?.metadata.canonical);
    Ok(())
}
