use crate::value::{Value, compare};
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// MapValueError
///
/// Invariant violations for `Value::Map` construction.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum MapValueError {
    #[error("map key at index {index} is not scalar: {key:?}")]
    NonScalarKey { index: usize, key: Value },

    #[error("map contains duplicate keys at normalized positions {left_index} and {right_index}")]
    DuplicateKey {
        left_index: usize,
        right_index: usize,
    },
}

///
/// MapValue
///
/// Canonical deterministic map representation.
///
/// - Maps are unordered values; insertion order is discarded.
/// - Entries are always sorted by canonical key order and keys are unique.
/// - Keys must be scalar; values are unconstrained.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapValue(Vec<(Value, Value)>);

impl MapValue {
    /// Validate and normalize owned entries into canonical order.
    pub fn new(entries: Vec<(Value, Value)>) -> Result<Self, MapValueError> {
        for (index, (key, _)) in entries.iter().enumerate() {
            if !key.is_scalar() {
                return Err(MapValueError::NonScalarKey {
                    index,
                    key: key.clone(),
                });
            }
        }

        let mut entries = entries;
        entries.sort_by(|(left_key, _), (right_key, _)| compare::canonical_cmp(left_key, right_key));

        for i in 1..entries.len() {
            let (left_key, _) = &entries[i - 1];
            let (right_key, _) = &entries[i];
            if compare::canonical_cmp(left_key, right_key) == Ordering::Equal {
                return Err(MapValueError::DuplicateKey {
                    left_index: i - 1,
                    right_index: i,
                });
            }
        }

        Ok(Self(entries))
    }

    #[must_use]
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical key lookup.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0
            .binary_search_by(|(candidate, _)| compare::canonical_cmp(candidate, key))
            .ok()
            .map(|index| &self.0[index].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn contains_value(&self, value: &Value) -> bool {
        self.0
            .iter()
            .any(|(_, candidate)| compare::canonical_cmp(candidate, value) == Ordering::Equal)
    }
}
