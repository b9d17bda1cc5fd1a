//! Type re-exports for the SDK.
//!
//! This module re-exports all types that SDK consumers need to work
//! with. Centralizing them here keeps the API boundary stable while
//! the internal crates stay free to move things around.

// ============================================================================
// Domain Types (from utterbank-types)
// ============================================================================

pub use utterbank_types::{
    // Annotation types
    EntityAnnotation,
    // Query types
    EntityTerm,
    // Example types
    Example,
    ExampleMetadata,
    ExamplePage,
    ExampleQuery,
    ExampleUpdate,
    NewExample,
    Scope,
    SortDirection,
    SortField,
    // Signature helpers
    exact_signature_matches,
    same_type_signature,
    type_signature,
    value_signature,
};

// ============================================================================
// Curation Types (from utterbank-engine)
// ============================================================================

pub use utterbank_engine::{
    // Pluggable collaborators
    CanonicalPolicy,
    FirstOfGroupPolicy,
    IdProvider,
    // Operation inputs and outputs
    InsertOptions,
    IntentCatalog,
    IntentVariant,
    SwitchOutcome,
    UuidIds,
    // Text validation
    contains_emoji,
};

// ============================================================================
// Storage Types (from utterbank-store)
// ============================================================================

pub use utterbank_store::{ExampleStore, MemoryStore, SqliteStore};
