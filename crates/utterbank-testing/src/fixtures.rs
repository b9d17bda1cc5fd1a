//! Shared sample corpora.

use chrono::{DateTime, Duration, TimeZone, Utc};
use utterbank_types::{Example, Scope};

use crate::builders::ExampleBuilder;
use crate::corpus::TestCorpus;

/// Fixed base instant for fixture timestamps, so time-based sorts are
/// deterministic across runs.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Travel assistant fixture set: three intents, a sprinkling of entity
/// spans, two drafts, one unlabeled utterance.
///
/// Timestamps are staggered one minute apart in id order.
pub fn travel_examples(scope: &Scope) -> Vec<Example> {
    let at = |i: i64| base_time() + Duration::minutes(i);
    vec![
        ExampleBuilder::new("ex-1", "book a flight to Paris")
            .scope(scope)
            .intent("book_flight")
            .entity("city", "Paris")
            .canonical()
            .created_at(at(0))
            .build(),
        ExampleBuilder::new("ex-2", "book a flight to Berlin")
            .scope(scope)
            .intent("book_flight")
            .entity("city", "Berlin")
            .created_at(at(1))
            .build(),
        ExampleBuilder::new("ex-3", "book a flight to Paris on Friday")
            .scope(scope)
            .intent("book_flight")
            .entity("city", "Paris")
            .entity("date", "Friday")
            .canonical()
            .created_at(at(2))
            .build(),
        ExampleBuilder::new("ex-4", "cancel my booking")
            .scope(scope)
            .intent("cancel_booking")
            .canonical()
            .created_at(at(3))
            .build(),
        ExampleBuilder::new("ex-5", "I want to cancel")
            .scope(scope)
            .intent("cancel_booking")
            .draft()
            .created_at(at(4))
            .build(),
        ExampleBuilder::new("ex-6", "hello there")
            .scope(scope)
            .intent("greet")
            .created_at(at(5))
            .build(),
        ExampleBuilder::new("ex-7", "good morning")
            .scope(scope)
            .intent("greet")
            .draft()
            .created_at(at(6))
            .build(),
        ExampleBuilder::new("ex-8", "mmm interesting")
            .scope(scope)
            .created_at(at(7))
            .build(),
    ]
}

/// A [`TestCorpus`] for ("travel-assistant", "en"), pre-seeded with
/// [`travel_examples`].
pub async fn travel_corpus() -> TestCorpus {
    let world = TestCorpus::new("travel-assistant", "en");
    let examples = travel_examples(world.scope());
    world
        .seed(examples)
        .await
        .expect("seeding an in-memory corpus cannot fail");
    world
}
