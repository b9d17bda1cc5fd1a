use std::collections::BTreeMap;

use serde::Serialize;
use utterbank_store::{ExampleStore, Selector, SortSpec};
use utterbank_types::{Example, Scope, same_type_signature};

use crate::error::Result;

/// One shape an intent is used with: its entity type signature and a
/// representative example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentVariant {
    /// Entity types of the representative, deduplicated, first-seen
    /// order.
    pub entity_types: Vec<String>,
    /// The example standing in for this signature. Canonical examples
    /// win the slot when the group has one.
    pub example: Example,
}

/// Catalog of every intent in a scope and the entity signatures each
/// is used with.
///
/// Intents are kept in a BTreeMap so iteration order is stable across
/// runs; `entity_types` is the union of all observed types in
/// first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntentCatalog {
    pub intents: BTreeMap<String, Vec<IntentVariant>>,
    pub entity_types: Vec<String>,
}

/// Builds intent catalogs by reading the scope canonical-first.
pub struct IntentIndexer<'a, S> {
    store: &'a S,
}

impl<'a, S: ExampleStore> IntentIndexer<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Catalog all intent-labeled examples in `scope`.
    ///
    /// Examples are visited canonical-first; the first example seen
    /// with a given (intent, type signature) becomes that variant's
    /// representative, so canonicals take the slot whenever one
    /// exists. The entity type union accumulates from every visited
    /// example, whether or not it founded a variant.
    pub async fn catalog(&self, scope: &Scope) -> Result<IntentCatalog> {
        let mut selector = Selector::scope(scope);
        selector.require_intent = true;

        let examples = self
            .store
            .find(&selector, &SortSpec::canonical_first())
            .await?;

        let mut catalog = IntentCatalog::default();
        for example in examples {
            let signature = example.type_signature();
            for entity_type in &signature {
                if !catalog.entity_types.contains(entity_type) {
                    catalog.entity_types.push(entity_type.clone());
                }
            }

            let Some(intent) = example.intent.clone() else {
                continue;
            };
            let variants = catalog.intents.entry(intent).or_default();
            if !variants
                .iter()
                .any(|variant| same_type_signature(&variant.entity_types, &signature))
            {
                variants.push(IntentVariant {
                    entity_types: signature,
                    example,
                });
            }
        }

        Ok(catalog)
    }
}
