use chrono::{DateTime, Utc};
use utterbank_types::{Example, ExampleUpdate, Scope};

use crate::error::Result;
use crate::selector::{Selector, SortSpec};

/// Storage contract shared by every backend.
///
/// The engine talks to stores exclusively through this trait, always
/// with fully prepared documents: ids, timestamps, and canonical flags
/// are assigned upstream, and stores never second-guess them.
#[allow(async_fn_in_trait)]
pub trait ExampleStore: Send + Sync {
    /// Every example matching `selector`, ordered by `sort`.
    ///
    /// Returns the complete filtered set; pagination is a windowing
    /// concern the engine applies afterwards. Ties in `sort` keep
    /// insertion order.
    async fn find(&self, selector: &Selector, sort: &SortSpec) -> Result<Vec<Example>>;

    /// Append a batch of prepared examples and report how many were
    /// stored.
    async fn insert_many(&self, examples: Vec<Example>) -> Result<usize>;

    /// Rewrite one example in place and return the stored result, or
    /// `None` when no example has the update's id.
    ///
    /// Every field on the payload replaces the stored value;
    /// `updated_at` is set to `stamped_at` and `created_at` is left
    /// alone.
    async fn update_one(
        &self,
        update: &ExampleUpdate,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Example>>;

    /// Remove examples by id, all or nothing.
    ///
    /// Returns how many of the ids matched stored examples. Unless
    /// every id matched, nothing is removed. Ids are expected to be
    /// distinct.
    async fn delete_by_ids(&self, ids: &[String]) -> Result<usize>;

    /// Remove every example in `scope` whose text is one of `texts`,
    /// returning how many were removed.
    async fn delete_by_texts(&self, scope: &Scope, texts: &[String]) -> Result<usize>;
}
