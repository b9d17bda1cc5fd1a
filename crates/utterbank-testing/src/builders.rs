//! Fluent construction of stored examples for tests.

use chrono::{DateTime, Utc};
use utterbank_types::{EntityAnnotation, Example, ExampleMetadata, Scope};

/// Builder for fully formed [`Example`] values.
///
/// Entity spans are located by searching the text for the value, so
/// fixtures stay readable without hand-counted offsets.
///
/// # Example
/// ```
/// use utterbank_testing::ExampleBuilder;
///
/// let example = ExampleBuilder::new("ex-1", "book a flight to Paris")
///     .intent("book_flight")
///     .entity("city", "Paris")
///     .canonical()
///     .build();
///
/// assert_eq!(example.entities[0].start, 17);
/// assert_eq!(example.entities[0].end, 22);
/// ```
pub struct ExampleBuilder {
    id: String,
    project_id: String,
    language: String,
    intent: Option<String>,
    text: String,
    entities: Vec<EntityAnnotation>,
    draft: bool,
    canonical: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExampleBuilder {
    /// New builder with a default scope of ("project-1", "en").
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            project_id: "project-1".to_string(),
            language: "en".to_string(),
            intent: None,
            text: text.into(),
            entities: Vec::new(),
            draft: false,
            canonical: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bind the example to `scope`.
    pub fn scope(mut self, scope: &Scope) -> Self {
        self.project_id = scope.project_id.clone();
        self.language = scope.language.clone();
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Annotate `value` at its first occurrence in the text.
    ///
    /// Panics when the value does not occur; use [`entity_at`] for
    /// deliberately inconsistent spans.
    ///
    /// [`entity_at`]: ExampleBuilder::entity_at
    pub fn entity(mut self, entity: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let start = self
            .text
            .find(&value)
            .expect("entity value must occur in the example text");
        self.entities.push(EntityAnnotation::new(
            entity,
            &value,
            start,
            start + value.len(),
        ));
        self
    }

    /// Annotate with an explicit byte span.
    pub fn entity_at(
        mut self,
        entity: impl Into<String>,
        value: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        self.entities
            .push(EntityAnnotation::new(entity, value, start, end));
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn canonical(mut self) -> Self {
        self.canonical = true;
        self
    }

    /// Pin both timestamps to `at`; chain [`updated_at`] afterwards
    /// when they need to diverge.
    ///
    /// [`updated_at`]: ExampleBuilder::updated_at
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self.updated_at = at;
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    pub fn build(self) -> Example {
        Example {
            id: self.id,
            project_id: self.project_id,
            intent: self.intent,
            text: self.text,
            entities: self.entities,
            metadata: ExampleMetadata {
                language: self.language,
                draft: self.draft,
                canonical: self.canonical,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
