use serde::{Deserialize, Serialize};

use crate::example::{Example, Scope};

/// Sortable listing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Intent label; examples without an intent sort before any label.
    Intent,
    /// Utterance text, lexicographic.
    Text,
    /// Insertion timestamp.
    CreatedAt,
    /// Last-write timestamp.
    UpdatedAt,
}

impl Default for SortField {
    fn default() -> Self {
        Self::Intent
    }
}

/// Sort direction for the chosen field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Ascending
    }
}

/// One requested entity in an entity filter.
///
/// `value` is only consulted by exact-signature matching; the
/// any-of entity filter looks at the type alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTerm {
    /// Entity type to look for.
    pub entity: String,
    /// Required span value, for exact-signature matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl EntityTerm {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Composable listing query: scope, filters, sort, and page window.
///
/// All filters are optional and combine conjunctively. Construction is
/// fluent:
///
/// ```
/// use utterbank_types::{ExampleQuery, Scope, SortField, SortDirection};
///
/// let query = ExampleQuery::new(Scope::new("project-1", "en"))
///     .intents(vec!["book_flight".to_string()])
///     .text("paris")
///     .sort(SortField::UpdatedAt, SortDirection::Descending)
///     .page_size(25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleQuery {
    /// Corpus slice to read from.
    pub scope: Scope,
    /// Keep only examples whose intent is one of these labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<String>>,
    /// Keep only examples carrying at least one of these entity types,
    /// or exactly this entity set when `exact_entities` is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntityTerm>>,
    /// Match the entity list exactly (same size, every (type, value)
    /// pair present) instead of any-of by type.
    #[serde(default)]
    pub exact_entities: bool,
    /// Keep only canonical examples.
    #[serde(default)]
    pub only_canonicals: bool,
    /// Case-insensitive substring match over the utterance text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Secondary sort field; drafts always sort first regardless.
    #[serde(default)]
    pub sort_field: SortField,
    /// Direction for `sort_field`.
    #[serde(default)]
    pub direction: SortDirection,
    /// Page window size. Zero disables pagination and returns the
    /// whole result set.
    pub page_size: usize,
    /// Id of the last example of the previous page; the next page
    /// starts right after it. Unknown cursors restart from the top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ExampleQuery {
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            intents: None,
            entities: None,
            exact_entities: false,
            only_canonicals: false,
            text: None,
            sort_field: SortField::default(),
            direction: SortDirection::default(),
            page_size: Self::DEFAULT_PAGE_SIZE,
            cursor: None,
        }
    }

    pub fn intents(mut self, intents: Vec<String>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn entities(mut self, entities: Vec<EntityTerm>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn exact_entities(mut self) -> Self {
        self.exact_entities = true;
        self
    }

    pub fn only_canonicals(mut self) -> Self {
        self.only_canonicals = true;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.direction = direction;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Disable pagination; the whole filtered result set comes back in
    /// one page.
    pub fn unpaged(mut self) -> Self {
        self.page_size = 0;
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplePage {
    /// Examples in this window, in listing order.
    pub examples: Vec<Example>,
    /// Cursor for the next page: the id of the last example here.
    /// Empty when the page itself is empty.
    pub end_cursor: String,
    /// Whether another page follows this one.
    pub has_next_page: bool,
    /// Size of the full filtered result set, across all pages.
    pub total: usize,
}
