//! Entity signature helpers.
//!
//! A group of examples is keyed by its intent plus the *signature* of
//! its entities. Two signatures are in play:
//!
//! - the **type signature**: the deduplicated entity types, order
//!   insensitive, used to split an intent into variants;
//! - the **value signature**: the full (type, value) pairs, order
//!   insensitive, used to decide which examples compete for the same
//!   canonical slot.

use std::collections::BTreeSet;

use crate::example::EntityAnnotation;
use crate::query::EntityTerm;

/// Deduplicated entity types in first-seen order.
///
/// Keeps the order annotations appear in so that catalog output is
/// stable for a given example.
pub fn type_signature(entities: &[EntityAnnotation]) -> Vec<String> {
    let mut types = Vec::new();
    for annotation in entities {
        if !types.contains(&annotation.entity) {
            types.push(annotation.entity.clone());
        }
    }
    types
}

/// Whether two type signatures name the same set of entity types,
/// ignoring order and repetition.
pub fn same_type_signature(a: &[String], b: &[String]) -> bool {
    let left: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let right: BTreeSet<&str> = b.iter().map(String::as_str).collect();
    left == right
}

/// Sorted (type, value) pairs, the order-insensitive identity of an
/// example's entity set.
pub fn value_signature(entities: &[EntityAnnotation]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = entities
        .iter()
        .map(|annotation| (annotation.entity.clone(), annotation.value.clone()))
        .collect();
    pairs.sort();
    pairs
}

/// Exact-signature match between stored annotations and requested
/// terms: the sizes agree and every requested (type, value) pair is
/// present among the annotations.
///
/// Terms without a value never match in exact mode. With an empty term
/// list this holds only for examples that carry no entities at all,
/// which is how entity-less examples find their group peers.
pub fn exact_signature_matches(entities: &[EntityAnnotation], terms: &[EntityTerm]) -> bool {
    entities.len() == terms.len()
        && terms.iter().all(|term| {
            entities.iter().any(|annotation| {
                annotation.entity == term.entity
                    && term.value.as_deref() == Some(annotation.value.as_str())
            })
        })
}
