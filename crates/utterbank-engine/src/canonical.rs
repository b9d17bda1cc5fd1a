use utterbank_store::{ExampleStore, Selector, SortSpec};
use utterbank_types::{Example, ExampleUpdate, Scope};

use crate::error::Result;
use crate::update::ExampleUpdates;

/// What a canonical toggle did.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// The example has no intent; nothing was written.
    NoChange,
    /// One or two examples were rewritten; the toggled example comes
    /// first, a demoted previous holder (if any) second.
    Switched { updated: Vec<Example> },
}

/// Toggle the canonical flag of one example.
///
/// Promotion looks up the current canonical holder of the example's
/// group, then writes the demotion and promotion as one non-atomic
/// batch. The lookup and the write are not coordinated: two switches
/// racing on the same group can leave it with two canonical examples
/// or none. Demotion never promotes a replacement, so a group can
/// also deliberately end up with no canonical example.
pub struct CanonicalSwitch<'a, S> {
    store: &'a S,
}

impl<'a, S: ExampleStore> CanonicalSwitch<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn toggle(&self, scope: &Scope, example: &Example) -> Result<SwitchOutcome> {
        let Some(intent) = example.intent.clone() else {
            return Ok(SwitchOutcome::NoChange);
        };

        let mut updates = Vec::new();

        if example.metadata.canonical {
            let mut demote = ExampleUpdate::from(example);
            demote.metadata.canonical = false;
            log::debug!("demoting canonical example {} in {}", example.id, scope);
            updates.push(demote);
        } else {
            let mut promote = ExampleUpdate::from(example);
            promote.metadata.canonical = true;
            updates.push(promote);

            let mut selector = Selector::scope(scope);
            selector.intents = Some(vec![intent]);
            selector.only_canonical = true;
            selector.entities = Some(example.entity_terms());
            selector.exact_entities = true;

            let holders = self.store.find(&selector, &SortSpec::unsorted()).await?;
            if let Some(holder) = holders.into_iter().next() {
                log::debug!(
                    "demoting previous holder {} for {} in {}",
                    holder.id,
                    example.id,
                    scope
                );
                let mut demote = ExampleUpdate::from(&holder);
                demote.metadata.canonical = false;
                updates.push(demote);
            }
        }

        let updated = ExampleUpdates::new(self.store).apply(updates).await?;
        Ok(SwitchOutcome::Switched { updated })
    }
}
