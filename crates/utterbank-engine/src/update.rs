use chrono::{DateTime, Utc};
use futures::future;
use utterbank_store::ExampleStore;
use utterbank_types::{Example, ExampleUpdate};

use crate::error::{Error, Result};
use crate::integrity::ensure_clean_text;

/// Batch update: every member is an independent full-field rewrite by
/// id, dispatched concurrently.
///
/// The batch is not atomic. Every member runs to completion before
/// the call returns; if any member failed (validation or unknown id),
/// the first failure in batch order is returned, but members that
/// already committed stay committed. Callers that need all-or-nothing
/// must build it themselves.
pub struct ExampleUpdates<'a, S> {
    store: &'a S,
}

impl<'a, S: ExampleStore> ExampleUpdates<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn apply(&self, updates: Vec<ExampleUpdate>) -> Result<Vec<Example>> {
        let stamped_at = Utc::now();
        let tasks = updates
            .iter()
            .map(|update| self.apply_one(update, stamped_at));

        // join_all, not try_join: a failing member must not cancel its
        // in-flight siblings.
        let outcomes = future::join_all(tasks).await;
        outcomes.into_iter().collect()
    }

    async fn apply_one(&self, update: &ExampleUpdate, stamped_at: DateTime<Utc>) -> Result<Example> {
        ensure_clean_text(&update.text)?;
        match self.store.update_one(update, stamped_at).await? {
            Some(example) => Ok(example),
            None => Err(Error::NotFound(format!(
                "example {} does not exist",
                update.id
            ))),
        }
    }
}
