use utterbank_store::ExampleStore;

use crate::error::{Error, Result};

/// Batch deletion by id set.
///
/// Unlike updates, deletion is atomic: the store removes either every
/// requested example or none, and a count mismatch (some id did not
/// exist) comes back as a failure with the corpus unchanged.
pub struct ExampleDeletes<'a, S> {
    store: &'a S,
}

impl<'a, S: ExampleStore> ExampleDeletes<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Delete the examples with these ids, returning how many were
    /// removed (always `ids.len()` on success).
    pub async fn delete(&self, ids: &[String]) -> Result<usize> {
        let deleted = self.store.delete_by_ids(ids).await?;
        if deleted != ids.len() {
            return Err(Error::NotFound(format!(
                "delete matched {} of {} example(s)",
                deleted,
                ids.len()
            )));
        }
        Ok(deleted)
    }
}
