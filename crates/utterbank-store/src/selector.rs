use std::cmp::Ordering;

use utterbank_types::{
    EntityTerm, Example, Scope, SortDirection, SortField, exact_signature_matches,
};

/// Backend-independent filter over stored examples.
///
/// Backends narrow to the (project, language) scope however they like;
/// every other criterion is evaluated here, in one place, so the
/// memory and SQLite backends cannot drift apart.
///
/// Criteria combine conjunctively. All are off by default except the
/// scope columns, which are mandatory.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    /// Owning project, mandatory.
    pub project_id: String,
    /// Language tag, mandatory.
    pub language: String,
    /// Keep only examples whose intent is one of these labels.
    pub intents: Option<Vec<String>>,
    /// Keep only examples that carry an intent at all.
    pub require_intent: bool,
    /// Entity criterion: any-of by type, or exact signature when
    /// `exact_entities` is set. An empty list in exact mode keeps only
    /// examples with no entities.
    pub entities: Option<Vec<EntityTerm>>,
    /// Interpret `entities` as an exact signature.
    pub exact_entities: bool,
    /// Keep only canonical examples.
    pub only_canonical: bool,
    /// Case-insensitive substring over the utterance text.
    pub text_contains: Option<String>,
}

impl Selector {
    /// Selector matching every example in a scope.
    pub fn scope(scope: &Scope) -> Self {
        Self {
            project_id: scope.project_id.clone(),
            language: scope.language.clone(),
            ..Default::default()
        }
    }

    pub fn matches(&self, example: &Example) -> bool {
        if example.project_id != self.project_id || example.metadata.language != self.language {
            return false;
        }

        if self.require_intent && example.intent.is_none() {
            return false;
        }

        if let Some(intents) = &self.intents {
            match &example.intent {
                Some(intent) if intents.contains(intent) => {}
                _ => return false,
            }
        }

        if let Some(terms) = &self.entities {
            if self.exact_entities {
                if !exact_signature_matches(&example.entities, terms) {
                    return false;
                }
            } else if !terms.iter().any(|term| {
                example
                    .entities
                    .iter()
                    .any(|annotation| annotation.entity == term.entity)
            }) {
                return false;
            }
        }

        if self.only_canonical && !example.metadata.canonical {
            return false;
        }

        if let Some(needle) = &self.text_contains {
            if !example
                .text
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

/// Fields an ordering can be built from.
///
/// Superset of the public [`SortField`]: the curation flags are only
/// reachable through the fixed orderings below, never chosen directly
/// by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Draft,
    Canonical,
    Intent,
    Text,
    CreatedAt,
    UpdatedAt,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Intent => SortKey::Intent,
            SortField::Text => SortKey::Text,
            SortField::CreatedAt => SortKey::CreatedAt,
            SortField::UpdatedAt => SortKey::UpdatedAt,
        }
    }
}

/// Ordering over examples as a chain of (key, direction) pairs.
///
/// Later keys break ties left by earlier ones; when the whole chain
/// ties, backends keep insertion order (they sort stably).
#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    keys: Vec<(SortKey, SortDirection)>,
}

impl SortSpec {
    pub fn new(keys: Vec<(SortKey, SortDirection)>) -> Self {
        Self { keys }
    }

    /// No ordering at all: backends return insertion order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// The listing order: drafts first, then the caller's field.
    pub fn listing(field: SortField, direction: SortDirection) -> Self {
        Self::new(vec![
            (SortKey::Draft, SortDirection::Descending),
            (field.into(), direction),
        ])
    }

    /// Canonical examples before the rest, used when building intent
    /// catalogs so canonicals win the representative slot.
    pub fn canonical_first() -> Self {
        Self::new(vec![(SortKey::Canonical, SortDirection::Descending)])
    }

    pub fn compare(&self, a: &Example, b: &Example) -> Ordering {
        for (key, direction) in &self.keys {
            let ordering = match key {
                SortKey::Draft => a.metadata.draft.cmp(&b.metadata.draft),
                SortKey::Canonical => a.metadata.canonical.cmp(&b.metadata.canonical),
                // Option ordering puts None before Some, so examples
                // still waiting for an intent surface at the top.
                SortKey::Intent => a.intent.cmp(&b.intent),
                SortKey::Text => a.text.cmp(&b.text),
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
                SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            let ordering = match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
