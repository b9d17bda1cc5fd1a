use std::path::PathBuf;

use utterbank_engine::{
    CanonicalPolicy, CanonicalSwitch, ExampleDeletes, ExampleQueries, ExampleUpdates,
    FirstOfGroupPolicy, IdProvider, InsertOptions, InsertionPipeline, IntentCatalog, IntentIndexer,
    SwitchOutcome, UuidIds,
};
use utterbank_store::{ExampleStore, MemoryStore, SqliteStore};
use utterbank_types::{Example, ExamplePage, ExampleQuery, ExampleUpdate, NewExample, Scope};

use crate::config;
use crate::error::Result;

/// Entry point for working with a corpus store.
///
/// The client owns the storage backend plus the id source and
/// canonical policy applied on insertion. All methods take `&self`;
/// per-scope work goes through [`Client::corpus`].
pub struct Client<S> {
    store: S,
    ids: Box<dyn IdProvider>,
    policy: Box<dyn CanonicalPolicy>,
}

impl Client<MemoryStore> {
    /// In-memory client for tests and ephemeral corpora.
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Client<SqliteStore> {
    /// Open (or create) a corpus store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        log::debug!("opening corpus store at {}", path.display());
        Ok(Self::with_store(SqliteStore::open(&path)?))
    }

    /// Open the corpus store at the default data location, creating
    /// the directory when missing.
    ///
    /// See [`config::resolve_data_dir`] for the resolution order.
    pub fn open_default() -> Result<Self> {
        let path = config::default_store_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(anyhow::Error::new)?;
        }
        Self::open(path)
    }
}

impl<S: ExampleStore> Client<S> {
    /// Client over any store, with the default id source and canonical
    /// policy.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            ids: Box::new(UuidIds),
            policy: Box::new(FirstOfGroupPolicy),
        }
    }

    /// Start building a client with swapped-in collaborators.
    pub fn builder(store: S) -> ClientBuilder<S> {
        ClientBuilder {
            store,
            ids: Box::new(UuidIds),
            policy: Box::new(FirstOfGroupPolicy),
        }
    }

    /// Direct access to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scope-bound handle over one (project, language) corpus.
    pub fn corpus(
        &self,
        project_id: impl Into<String>,
        language: impl Into<String>,
    ) -> CorpusClient<'_, S> {
        CorpusClient {
            client: self,
            scope: Scope::new(project_id, language),
        }
    }
}

/// Builder for a [`Client`] with a custom id source or canonical
/// policy.
pub struct ClientBuilder<S> {
    store: S,
    ids: Box<dyn IdProvider>,
    policy: Box<dyn CanonicalPolicy>,
}

impl<S: ExampleStore> ClientBuilder<S> {
    pub fn id_provider(mut self, ids: impl IdProvider + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn canonical_policy(mut self, policy: impl CanonicalPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn build(self) -> Client<S> {
        Client {
            store: self.store,
            ids: self.ids,
            policy: self.policy,
        }
    }
}

/// Operations on one corpus, bound to a (project, language) scope.
pub struct CorpusClient<'a, S> {
    client: &'a Client<S>,
    scope: Scope,
}

impl<S: ExampleStore> CorpusClient<'_, S> {
    /// The scope this handle is bound to.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Fresh query over this corpus, ready for fluent refinement.
    pub fn query(&self) -> ExampleQuery {
        ExampleQuery::new(self.scope.clone())
    }

    /// Run a query and return one page of results.
    pub async fn list(&self, query: &ExampleQuery) -> Result<ExamplePage> {
        Ok(ExampleQueries::new(self.client.store()).list(query).await?)
    }

    /// Insert a batch with default options (canonical auto-assignment
    /// on, colliding texts dropped).
    pub async fn insert(&self, batch: Vec<NewExample>) -> Result<Vec<Example>> {
        self.insert_with(batch, &InsertOptions::default()).await
    }

    /// Insert a batch with explicit options.
    pub async fn insert_with(
        &self,
        batch: Vec<NewExample>,
        options: &InsertOptions,
    ) -> Result<Vec<Example>> {
        let pipeline = InsertionPipeline::new(
            self.client.store(),
            self.client.ids.as_ref(),
            self.client.policy.as_ref(),
        );
        Ok(pipeline.insert(&self.scope, batch, options).await?)
    }

    /// Apply a batch of updates, returning the refreshed examples in
    /// batch order.
    pub async fn update(&self, updates: Vec<ExampleUpdate>) -> Result<Vec<Example>> {
        Ok(ExampleUpdates::new(self.client.store())
            .apply(updates)
            .await?)
    }

    /// Delete examples by id. Fails without deleting anything when any
    /// id is unknown.
    pub async fn delete(&self, ids: &[String]) -> Result<usize> {
        Ok(ExampleDeletes::new(self.client.store()).delete(ids).await?)
    }

    /// Toggle the canonical flag of `example`, demoting the current
    /// holder of its group when promoting.
    pub async fn switch_canonical(&self, example: &Example) -> Result<SwitchOutcome> {
        Ok(CanonicalSwitch::new(self.client.store())
            .toggle(&self.scope, example)
            .await?)
    }

    /// Catalog of the scope's intents, their signature variants, and
    /// entity types.
    pub async fn catalog(&self) -> Result<IntentCatalog> {
        Ok(IntentIndexer::new(self.client.store())
            .catalog(&self.scope)
            .await?)
    }
}
