//! Testing infrastructure for utterbank integration tests.
//!
//! This crate provides utilities for writing test scenarios against
//! real SDK clients:
//! - `TestCorpus`: isolated, pre-seedable in-memory corpus environments
//! - `builders`: fluent construction of stored examples
//! - `fixtures`: shared sample corpora

pub mod builders;
pub mod corpus;
pub mod fixtures;

pub use builders::ExampleBuilder;
pub use corpus::TestCorpus;
