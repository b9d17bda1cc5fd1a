use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::EntityTerm;
use crate::signature::type_signature;

/// Corpus coordinates: which project and which language variant an
/// example belongs to.
///
/// Every read and write is scoped to exactly one (project, language)
/// pair; examples never move between scopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    /// Owning project identifier.
    pub project_id: String,
    /// Language tag of the corpus slice (e.g., "en", "fr").
    pub language: String,
}

impl Scope {
    pub fn new(project_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            language: language.into(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.language)
    }
}

/// Labeled span within an example's text.
///
/// `start`/`end` are byte offsets into [`Example::text`]; `end` is
/// exclusive. Offsets are carried as-is and never re-derived from the
/// text, so callers that edit text are responsible for keeping spans
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAnnotation {
    /// Entity type (e.g., "city", "date").
    pub entity: String,
    /// Resolved value of the span (e.g., "Paris").
    pub value: String,
    /// Byte offset where the span starts.
    pub start: usize,
    /// Byte offset one past the end of the span.
    pub end: usize,
}

impl EntityAnnotation {
    pub fn new(
        entity: impl Into<String>,
        value: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
            start,
            end,
        }
    }
}

/// Curation flags attached to every stored example.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExampleMetadata {
    /// Language tag, duplicated from the scope the example was
    /// inserted under.
    #[serde(default)]
    pub language: String,
    /// Draft examples are pending review; listings surface them first.
    #[serde(default)]
    pub draft: bool,
    /// At most one canonical example exists per (intent, entity
    /// signature) group within a scope.
    #[serde(default)]
    pub canonical: bool,
}

// ==========================================
// Stored example
// ==========================================

/// A single NLU training example as stored in the corpus.
///
/// Examples are the unit of everything here: they are inserted in
/// batches, listed with filters, updated wholesale, and promoted or
/// demoted as the canonical representative of their group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Unique identifier, assigned at insertion time.
    pub id: String,
    /// Owning project.
    pub project_id: String,
    /// Intent label. Examples without an intent are legal; they sort
    /// first under the default listing order and are excluded from
    /// canonical bookkeeping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Utterance text.
    pub text: String,
    /// Labeled entity spans within `text`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityAnnotation>,
    /// Curation flags (language, draft, canonical).
    #[serde(default)]
    pub metadata: ExampleMetadata,
    /// When the example was first stored.
    pub created_at: DateTime<Utc>,
    /// When the example was last written (insert or update).
    pub updated_at: DateTime<Utc>,
}

impl Example {
    /// Deduplicated entity types in first-seen order.
    pub fn type_signature(&self) -> Vec<String> {
        type_signature(&self.entities)
    }

    /// The example's entities as query terms, for exact-signature
    /// lookups of its group peers.
    pub fn entity_terms(&self) -> Vec<EntityTerm> {
        self.entities
            .iter()
            .map(|annotation| EntityTerm::new(&annotation.entity).value(&annotation.value))
            .collect()
    }
}

// ==========================================
// Write payloads
// ==========================================

/// Candidate example submitted for insertion.
///
/// Ids and timestamps are assigned by the insertion pipeline; the
/// scope's language is stamped into the metadata on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExample {
    /// Utterance text.
    pub text: String,
    /// Intent label, if already assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Labeled entity spans within `text`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityAnnotation>,
    /// Curation flags. `language` is overwritten with the target
    /// scope's language during insertion.
    #[serde(default)]
    pub metadata: ExampleMetadata,
}

impl NewExample {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: None,
            entities: Vec::new(),
            metadata: ExampleMetadata::default(),
        }
    }

    pub fn intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    pub fn entities(mut self, entities: Vec<EntityAnnotation>) -> Self {
        self.entities = entities;
        self
    }

    pub fn draft(mut self) -> Self {
        self.metadata.draft = true;
        self
    }

    pub fn canonical(mut self) -> Self {
        self.metadata.canonical = true;
        self
    }
}

/// Full-replacement update payload for one stored example.
///
/// Updates are not patches: every field carried here is written over
/// the stored document. `created_at` is never touched; `updated_at` is
/// stamped by the engine when the batch is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleUpdate {
    /// Id of the example to rewrite.
    pub id: String,
    /// Replacement text.
    pub text: String,
    /// Replacement intent label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Replacement entity spans.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityAnnotation>,
    /// Replacement curation flags.
    #[serde(default)]
    pub metadata: ExampleMetadata,
}

impl From<&Example> for ExampleUpdate {
    fn from(example: &Example) -> Self {
        Self {
            id: example.id.clone(),
            text: example.text.clone(),
            intent: example.intent.clone(),
            entities: example.entities.clone(),
            metadata: example.metadata.clone(),
        }
    }
}
