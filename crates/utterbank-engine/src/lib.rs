// Engine module - corpus operations (insertion, querying, curation)
// This layer sits between the public SDK facade and the storage backends

pub mod canonical;
pub mod catalog;
pub mod delete;
pub mod error;
pub mod ids;
pub mod insert;
pub mod integrity;
pub mod policy;
pub mod query;
pub mod update;

pub use canonical::{CanonicalSwitch, SwitchOutcome};
pub use catalog::{IntentCatalog, IntentIndexer, IntentVariant};
pub use delete::ExampleDeletes;
pub use error::{Error, Result};
pub use ids::{IdProvider, UuidIds};
pub use insert::{InsertOptions, InsertionPipeline};
pub use integrity::contains_emoji;
pub use policy::{CanonicalPolicy, FirstOfGroupPolicy};
pub use query::ExampleQueries;
pub use update::ExampleUpdates;
