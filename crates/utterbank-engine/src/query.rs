use utterbank_store::{ExampleStore, Selector, SortSpec};
use utterbank_types::{Example, ExamplePage, ExampleQuery};

use crate::error::Result;

/// Read side of the corpus: filtered, sorted, paginated listings.
pub struct ExampleQueries<'a, S> {
    store: &'a S,
}

impl<'a, S: ExampleStore> ExampleQueries<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Run a listing query and window the result into one page.
    ///
    /// The full filtered set is fetched and sorted first, then sliced;
    /// `total` always counts the whole set, not the page.
    pub async fn list(&self, query: &ExampleQuery) -> Result<ExamplePage> {
        let (selector, sort) = lower(query);
        let matched = self.store.find(&selector, &sort).await?;
        Ok(paginate(matched, query.page_size, query.cursor.as_deref()))
    }
}

/// Translate the public query into the store's selector and ordering.
///
/// Empty filter lists mean "no criterion", matching how an absent
/// filter behaves.
fn lower(query: &ExampleQuery) -> (Selector, SortSpec) {
    let mut selector = Selector::scope(&query.scope);

    if let Some(intents) = &query.intents
        && !intents.is_empty()
    {
        selector.intents = Some(intents.clone());
    }

    if let Some(entities) = &query.entities
        && !entities.is_empty()
    {
        selector.entities = Some(entities.clone());
        selector.exact_entities = query.exact_entities;
    }

    selector.only_canonical = query.only_canonicals;
    selector.text_contains = query.text.clone();

    let sort = SortSpec::listing(query.sort_field, query.direction);
    (selector, sort)
}

/// Slice a sorted result set into the requested page window.
///
/// The cursor names the last example of the previous page; the window
/// starts right after it. A cursor that matches nothing falls back to
/// the top. `page_size` zero disables the window and returns the whole
/// set. `has_next_page` is `offset + page_size < total` in every case,
/// including the zero-size fetch-everything call, so that flag is only
/// meaningful when an actual window was requested.
fn paginate(matched: Vec<Example>, page_size: usize, cursor: Option<&str>) -> ExamplePage {
    let total = matched.len();

    let offset = cursor
        .and_then(|cursor| {
            matched
                .iter()
                .position(|example| example.id == cursor)
                .map(|position| position + 1)
        })
        .unwrap_or(0);

    let examples: Vec<Example> = if page_size == 0 {
        matched
    } else {
        matched.into_iter().skip(offset).take(page_size).collect()
    };

    let end_cursor = examples
        .last()
        .map(|example| example.id.clone())
        .unwrap_or_default();
    let has_next_page = offset + page_size < total;

    ExamplePage {
        examples,
        end_cursor,
        has_next_page,
        total,
    }
}
