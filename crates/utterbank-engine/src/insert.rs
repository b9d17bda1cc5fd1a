use std::collections::HashSet;

use chrono::Utc;
use utterbank_store::ExampleStore;
use utterbank_types::{Example, ExampleQuery, NewExample, Scope};

use crate::error::Result;
use crate::ids::IdProvider;
use crate::integrity::ensure_clean_text;
use crate::policy::CanonicalPolicy;
use crate::query::ExampleQueries;

/// Insertion behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct InsertOptions {
    /// Run the canonical policy over the batch before persisting.
    pub auto_assign_canonical: bool,
    /// When a candidate's text already exists in the scope, replace
    /// the stored example instead of dropping the candidate.
    pub overwrite_on_same_text: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            auto_assign_canonical: true,
            overwrite_on_same_text: false,
        }
    }
}

/// Batch insertion: validation, dedup, stamping, canonical
/// assignment, collision handling, one multi-document write.
///
/// The returned list is what was persisted. An empty list is
/// ambiguous: either nothing was eligible (all candidates collided)
/// or the store reported fewer stored documents than requested and
/// the call was written off. Callers that need to distinguish must
/// query afterwards.
pub struct InsertionPipeline<'a, S> {
    store: &'a S,
    ids: &'a dyn IdProvider,
    policy: &'a dyn CanonicalPolicy,
}

impl<'a, S: ExampleStore> InsertionPipeline<'a, S> {
    pub fn new(store: &'a S, ids: &'a dyn IdProvider, policy: &'a dyn CanonicalPolicy) -> Self {
        Self { store, ids, policy }
    }

    pub async fn insert(
        &self,
        scope: &Scope,
        batch: Vec<NewExample>,
        options: &InsertOptions,
    ) -> Result<Vec<Example>> {
        // Any emoji anywhere in the batch aborts the whole call before
        // a single write happens.
        for candidate in &batch {
            ensure_clean_text(&candidate.text)?;
        }

        // Dedup within the batch by exact text, first occurrence wins.
        let mut seen_texts: HashSet<String> = HashSet::new();
        let mut deduped: Vec<NewExample> = Vec::new();
        for candidate in batch {
            if seen_texts.insert(candidate.text.clone()) {
                deduped.push(candidate);
            }
        }

        let now = Utc::now();
        let mut prepared: Vec<Example> = deduped
            .into_iter()
            .map(|candidate| {
                let mut metadata = candidate.metadata;
                metadata.language = scope.language.clone();
                Example {
                    id: self.ids.generate(),
                    project_id: scope.project_id.clone(),
                    intent: candidate.intent,
                    text: candidate.text,
                    entities: candidate.entities,
                    metadata,
                    created_at: now,
                    updated_at: now,
                }
            })
            .collect();

        let existing = ExampleQueries::new(self.store)
            .list(&ExampleQuery::new(scope.clone()).unpaged())
            .await?
            .examples;

        let existing_texts: HashSet<&str> = existing.iter().map(|e| e.text.as_str()).collect();
        let colliding: Vec<String> = prepared
            .iter()
            .filter(|example| existing_texts.contains(example.text.as_str()))
            .map(|example| example.text.clone())
            .collect();

        // Canonical assignment happens before collision handling, so a
        // candidate promoted here can still be dropped below and leave
        // its group without a canonical example.
        if options.auto_assign_canonical {
            prepared = self.policy.assign(prepared, &existing);
        }

        if !colliding.is_empty() {
            if options.overwrite_on_same_text {
                let deleted = self.store.delete_by_texts(scope, &colliding).await?;
                log::debug!("replaced {} colliding example(s) in {}", deleted, scope);
            } else {
                let before = prepared.len();
                prepared.retain(|example| !colliding.contains(&example.text));
                log::debug!(
                    "dropped {} candidate(s) colliding on text in {}",
                    before - prepared.len(),
                    scope
                );
            }
        }

        let requested = prepared.len();
        let stored = self.store.insert_many(prepared.clone()).await?;
        if stored != requested {
            log::warn!(
                "insert stored {} of {} example(s) in {}; reporting an empty result",
                stored,
                requested,
                scope
            );
            return Ok(Vec::new());
        }

        Ok(prepared)
    }
}
