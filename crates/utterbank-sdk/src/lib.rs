//! utterbank-sdk: SDK for managing NLU training example corpora.
//!
//! **Note**: README.md is auto-generated from this rustdoc using `cargo-rdme`.
//! To update: `cargo rdme --workspace-project utterbank-sdk`
//!
//! # Overview
//!
//! `utterbank-sdk` provides a high-level, stable API for maintaining corpora
//! of intent/entity training examples. It powers utterbank's authoring tools
//! and can be embedded in your own applications: annotation UIs, dataset
//! linters, exporters for NLU pipelines. It abstracts away the internal
//! split between storage backends and the curation engine, exposing only
//! the essential primitives for inserting, querying, and curating examples.
//!
//! # Quickstart
//!
//! ```no_run
//! use utterbank_sdk::{Client, types::NewExample};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Store lives in the system data directory
//! let client = Client::open_default()?;
//! let corpus = client.corpus("travel-assistant", "en");
//!
//! corpus
//!     .insert(vec![
//!         NewExample::new("book a flight to Paris").intent("book_flight"),
//!         NewExample::new("cancel my reservation").intent("cancel_booking"),
//!     ])
//!     .await?;
//!
//! let page = corpus.list(&corpus.query()).await?;
//! println!("{} example(s) on file", page.total);
//! # Ok(())
//! # }
//! ```
//!
//! For complete examples, see the [`examples/`](https://github.com/utterbank/utterbank/tree/main/crates/utterbank-sdk/examples) directory.
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `utterbank-types`: Core domain models (Example, ExampleQuery, etc.)
//! - `utterbank-store`: Storage backends behind the `ExampleStore` trait
//! - `utterbank-engine`: Corpus operations (insertion pipeline, querying, canonical curation)
//!
//! # Usage Patterns
//!
//! ## Filtering and Pagination
//!
//! ```no_run
//! use utterbank_sdk::{
//!     Client,
//!     types::{EntityTerm, SortDirection, SortField},
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::open_default()?;
//! let corpus = client.corpus("travel-assistant", "en");
//!
//! let query = corpus
//!     .query()
//!     .intents(vec!["book_flight".to_string()])
//!     .entities(vec![EntityTerm::new("city")])
//!     .sort(SortField::UpdatedAt, SortDirection::Descending)
//!     .page_size(25);
//!
//! let mut page = corpus.list(&query).await?;
//! loop {
//!     for example in &page.examples {
//!         println!("{}", example.text);
//!     }
//!     if !page.has_next_page {
//!         break;
//!     }
//!     page = corpus.list(&query.clone().cursor(page.end_cursor)).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Canonical Curation
//!
//! ```no_run
//! use utterbank_sdk::{Client, types::SwitchOutcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::open_default()?;
//! let corpus = client.corpus("travel-assistant", "en");
//!
//! let page = corpus.list(&corpus.query().text("paris").unpaged()).await?;
//! if let Some(example) = page.examples.first() {
//!     match corpus.switch_canonical(example).await? {
//!         SwitchOutcome::Switched { updated } => {
//!             println!("touched {} example(s)", updated.len());
//!         }
//!         SwitchOutcome::NoChange => println!("nothing to do"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## In-Memory Corpora (for tests and prototyping)
//!
//! ```
//! use utterbank_sdk::{Client, types::NewExample};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::in_memory();
//! let corpus = client.corpus("scratch", "en");
//! corpus
//!     .insert(vec![NewExample::new("hello there").intent("greet")])
//!     .await?;
//!
//! let catalog = corpus.catalog().await?;
//! println!("{} intent(s)", catalog.intents.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Public facade
pub use client::{Client, ClientBuilder, CorpusClient};
pub use error::{Error, Result};
pub use types::{
    EntityAnnotation, EntityTerm, Example, ExampleMetadata, ExamplePage, ExampleQuery,
    ExampleUpdate, InsertOptions, IntentCatalog, IntentVariant, NewExample, Scope, SortDirection,
    SortField, SwitchOutcome,
};
