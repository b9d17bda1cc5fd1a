use std::sync::Mutex;

use chrono::{DateTime, Utc};
use utterbank_types::{Example, ExampleUpdate, Scope};

use crate::error::Result;
use crate::selector::{Selector, SortSpec};
use crate::store::ExampleStore;

/// In-memory backend: a mutex over a plain vector.
///
/// Insertion order is the vector order, which is what makes sort ties
/// deterministic. The default backend for tests and for embedders that
/// do not need persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    examples: Mutex<Vec<Example>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-loaded with stored examples, bypassing the
    /// insertion pipeline. Intended for tests.
    pub fn seeded(examples: Vec<Example>) -> Self {
        Self {
            examples: Mutex::new(examples),
        }
    }

    /// Clone of everything currently stored, in insertion order.
    pub fn snapshot(&self) -> Vec<Example> {
        self.examples.lock().unwrap().clone()
    }
}

impl ExampleStore for MemoryStore {
    async fn find(&self, selector: &Selector, sort: &SortSpec) -> Result<Vec<Example>> {
        let examples = self.examples.lock().unwrap();
        let mut matched: Vec<Example> = examples
            .iter()
            .filter(|example| selector.matches(example))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for ties.
        matched.sort_by(|a, b| sort.compare(a, b));
        Ok(matched)
    }

    async fn insert_many(&self, examples: Vec<Example>) -> Result<usize> {
        let inserted = examples.len();
        self.examples.lock().unwrap().extend(examples);
        Ok(inserted)
    }

    async fn update_one(
        &self,
        update: &ExampleUpdate,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Example>> {
        let mut examples = self.examples.lock().unwrap();
        let Some(stored) = examples.iter_mut().find(|example| example.id == update.id) else {
            return Ok(None);
        };

        stored.text = update.text.clone();
        stored.intent = update.intent.clone();
        stored.entities = update.entities.clone();
        stored.metadata = update.metadata.clone();
        stored.updated_at = stamped_at;

        Ok(Some(stored.clone()))
    }

    async fn delete_by_ids(&self, ids: &[String]) -> Result<usize> {
        let mut examples = self.examples.lock().unwrap();
        let matched = examples
            .iter()
            .filter(|example| ids.contains(&example.id))
            .count();

        if matched == ids.len() {
            examples.retain(|example| !ids.contains(&example.id));
        }

        Ok(matched)
    }

    async fn delete_by_texts(&self, scope: &Scope, texts: &[String]) -> Result<usize> {
        let mut examples = self.examples.lock().unwrap();
        let before = examples.len();
        examples.retain(|example| {
            !(example.project_id == scope.project_id
                && example.metadata.language == scope.language
                && texts.contains(&example.text))
        });
        Ok(before - examples.len())
    }
}
