use crate::value::{Value, compare};
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// SetValueError
///
/// Invariant violations for `Value::Set` construction.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum SetValueError {
    #[error("set member at index {index} is not scalar: {member:?}")]
    NonScalarMember { index: usize, member: Value },
}

///
/// SetValue
///
/// Unordered unique scalar members, held in canonical sorted order so
/// equality, membership, and relation checks are structural.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetValue(Vec<Value>);

impl SetValue {
    /// Normalize owned members into a canonical set.
    ///
    /// - members must be scalar
    /// - members are sorted by canonical order
    /// - duplicates collapse silently (set semantics)
    pub fn new(members: Vec<Value>) -> Result<Self, SetValueError> {
        for (index, member) in members.iter().enumerate() {
            if !member.is_scalar() {
                return Err(SetValueError::NonScalarMember {
                    index,
                    member: member.clone(),
                });
            }
        }

        let mut members = members;
        members.sort_by(compare::canonical_cmp);
        members.dedup_by(|a, b| compare::canonical_cmp(a, b) == Ordering::Equal);

        Ok(Self(members))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
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

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Canonical membership test.
    #[must_use]
    pub fn contains(&self, member: &Value) -> bool {
        self.0
            .binary_search_by(|candidate| compare::canonical_cmp(candidate, member))
            .is_ok()
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.iter().all(|member| other.contains(member))
    }

    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.0.iter().any(|member| other.contains(member))
    }
}
