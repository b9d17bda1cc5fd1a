//! Mutation Tests
//!
//! Verifies batch updates and deletions through the SDK, including
//! the differing failure contracts: updates land member by member,
//! deletions are all or nothing.

use anyhow::Result;
use utterbank_sdk::Error;
use utterbank_sdk::types::ExampleUpdate;
use utterbank_testing::fixtures::travel_corpus;

#[tokio::test]
async fn test_update_rewrites_the_stored_example() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus.list(&corpus.query().unpaged()).await?;
    let original = page
        .examples
        .iter()
        .find(|e| e.id == "ex-6")
        .cloned()
        .unwrap();

    let mut update = ExampleUpdate::from(&original);
    update.text = "hey, hello there".to_string();
    update.intent = Some("welcome".to_string());

    let updated = corpus.update(vec![update]).await?;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].text, "hey, hello there");
    assert_eq!(updated[0].intent.as_deref(), Some("welcome"));
    assert_eq!(updated[0].created_at, original.created_at);
    assert!(updated[0].updated_at > original.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_update_of_a_missing_id_reports_not_found() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus.list(&corpus.query().unpaged()).await?;
    let mut fine = ExampleUpdate::from(&page.examples[0]);
    fine.text = "still here".to_string();

    let mut ghost = fine.clone();
    ghost.id = "ghost".to_string();

    let result = corpus.update(vec![fine, ghost]).await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    // The valid member still landed: updates are not atomic.
    let page = corpus.list(&corpus.query().text("still here").unpaged()).await?;
    assert_eq!(page.total, 1);
    Ok(())
}

#[tokio::test]
async fn test_update_rejects_emoji_text() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let page = corpus.list(&corpus.query().unpaged()).await?;
    let mut update = ExampleUpdate::from(&page.examples[0]);
    update.text = "now with sparkle ✨".to_string();

    let result = corpus.update(vec![update]).await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_exactly_the_named_examples() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let deleted = corpus
        .delete(&["ex-2".to_string(), "ex-7".to_string()])
        .await?;
    assert_eq!(deleted, 2);

    let page = corpus.list(&corpus.query().unpaged()).await?;
    assert_eq!(page.total, 6);
    assert!(!page.examples.iter().any(|e| e.id == "ex-2" || e.id == "ex-7"));
    Ok(())
}

#[tokio::test]
async fn test_delete_with_an_unknown_id_removes_nothing() -> Result<()> {
    let world = travel_corpus().await;
    let corpus = world.corpus();

    let result = corpus
        .delete(&["ex-2".to_string(), "ghost".to_string()])
        .await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    let page = corpus.list(&corpus.query().unpaged()).await?;
    assert_eq!(page.total, 8, "deletion is all or nothing");
    Ok(())
}
