//! Canonical curation example: Manage group representatives
//!
//! This example demonstrates:
//! - How insertion assigns the canonical example of a group
//! - Handing the slot to a different phrasing
//! - Reading the intent catalog after curation
//!
//! Run with: cargo run -p utterbank-sdk --example canonical_workflow

use utterbank_sdk::{
    Client,
    types::{NewExample, SwitchOutcome},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::in_memory();
    let corpus = client.corpus("travel-assistant", "en");

    corpus
        .insert(vec![
            NewExample::new("cancel my booking").intent("cancel_booking"),
            NewExample::new("please cancel my reservation").intent("cancel_booking"),
        ])
        .await?;

    // The first of the group won the slot
    let canonicals = corpus
        .list(&corpus.query().only_canonicals().unpaged())
        .await?;
    println!("Canonical now: {}", canonicals.examples[0].text);

    // Hand the slot to the other phrasing
    let all = corpus.list(&corpus.query().unpaged()).await?;
    let challenger = all
        .examples
        .iter()
        .find(|e| !e.metadata.canonical)
        .expect("one example is not canonical");

    match corpus.switch_canonical(challenger).await? {
        SwitchOutcome::Switched { updated } => {
            for example in &updated {
                let state = if example.metadata.canonical {
                    "promoted"
                } else {
                    "demoted"
                };
                println!("{}: {}", state, example.text);
            }
        }
        SwitchOutcome::NoChange => println!("nothing to switch"),
    }

    // The catalog reflects the new representative
    let catalog = corpus.catalog().await?;
    println!("\nCatalog:\n{}", serde_json::to_string_pretty(&catalog)?);

    Ok(())
}
