//! Isolated corpus environments for integration tests.

use anyhow::Result;
use utterbank_sdk::{Client, CorpusClient};
use utterbank_store::{ExampleStore, MemoryStore};
use utterbank_types::{Example, Scope};

use crate::builders::ExampleBuilder;

/// In-memory corpus environment bound to one scope.
///
/// Wraps a real SDK [`Client`] over a [`MemoryStore`]. Seeding writes
/// straight into the store, bypassing the insertion pipeline, so
/// fixtures keep their exact ids, flags, and timestamps.
///
/// # Example
/// ```
/// use utterbank_testing::TestCorpus;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let world = TestCorpus::new("my-project", "en");
/// world
///     .seed(vec![world.example("ex-1", "hello").intent("greet").build()])
///     .await?;
///
/// let corpus = world.corpus();
/// let page = corpus.list(&corpus.query()).await?;
/// assert_eq!(page.total, 1);
/// # Ok(())
/// # }
/// ```
pub struct TestCorpus {
    client: Client<MemoryStore>,
    scope: Scope,
}

impl TestCorpus {
    pub fn new(project_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client: Client::in_memory(),
            scope: Scope::new(project_id, language),
        }
    }

    /// The scope every seeded example and corpus handle is bound to.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The client backing this environment.
    pub fn client(&self) -> &Client<MemoryStore> {
        &self.client
    }

    /// Scope-bound SDK handle, as production callers would hold it.
    pub fn corpus(&self) -> CorpusClient<'_, MemoryStore> {
        self.client
            .corpus(self.scope.project_id.clone(), self.scope.language.clone())
    }

    /// Builder pre-bound to this environment's scope.
    pub fn example(&self, id: impl Into<String>, text: impl Into<String>) -> ExampleBuilder {
        ExampleBuilder::new(id, text).scope(&self.scope)
    }

    /// Write examples straight into the store.
    pub async fn seed(&self, examples: Vec<Example>) -> Result<()> {
        self.client.store().insert_many(examples).await?;
        Ok(())
    }
}
