use crate::{
    predicate::{
        element_match,
        ops::{CompareOp, ContainerStateOp, ElementOp, RelationOp},
    },
    value::{SetValue, Value, compare},
};
use serde::{Deserialize, Serialize};

///
/// MemberOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MemberOp {
    Contains,
    NotContains,
}

/// Canonical comparison over the sorted member sequences.
#[must_use]
pub fn comparison(value: &SetValue, op: CompareOp, target: &SetValue) -> bool {
    op.matches(compare::canonical_cmp_list(
        value.as_slice(),
        target.as_slice(),
    ))
}

/// All/any/none containment of the given members.
#[must_use]
pub fn list_membership(value: &SetValue, op: ElementOp, members: &[Value]) -> bool {
    element_match(value.as_slice(), op, members)
}

#[must_use]
pub fn membership(value: &SetValue, op: MemberOp, member: &Value) -> bool {
    match op {
        MemberOp::Contains => value.contains(member),
        MemberOp::NotContains => !value.contains(member),
    }
}

#[must_use]
pub fn relation(value: &SetValue, op: RelationOp, other: &SetValue) -> bool {
    match op {
        RelationOp::SubsetOf => value.is_subset(other),
        RelationOp::ProperSubsetOf => value.is_subset(other) && value.len() < other.len(),
        RelationOp::SupersetOf => value.is_superset(other),
        RelationOp::ProperSupersetOf => value.is_superset(other) && value.len() > other.len(),
    }
}

#[must_use]
pub fn size(value: &SetValue, op: CompareOp, count: usize) -> bool {
    op.matches(value.len().cmp(&count))
}

#[must_use]
pub fn state(value: &SetValue, op: ContainerStateOp) -> bool {
    op.matches(value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i32]) -> SetValue {
        SetValue::new(items.iter().map(|&n| Value::from(n)).collect()).unwrap()
    }

    #[test]
    fn comparison_is_insertion_order_independent() {
        assert!(comparison(&set(&[3, 1, 2]), CompareOp::Eq, &set(&[1, 2, 3])));
        assert!(comparison(&set(&[1, 2]), CompareOp::Ne, &set(&[1, 3])));
    }

    #[test]
    fn proper_relations_require_strict_containment() {
        let small = set(&[1, 2]);
        let big = set(&[1, 2, 3]);
        assert!(relation(&small, RelationOp::ProperSubsetOf, &big));
        assert!(relation(&big, RelationOp::ProperSupersetOf, &small));
        assert!(relation(&small, RelationOp::SubsetOf, &small.clone()));
        assert!(!relation(&small, RelationOp::ProperSubsetOf, &small.clone()));
    }

    #[test]
    fn member_and_list_membership() {
        let s = set(&[1, 2, 3]);
        assert!(membership(&s, MemberOp::Contains, &Value::from(2)));
        assert!(membership(&s, MemberOp::NotContains, &Value::from(9)));
        assert!(list_membership(
            &s,
            ElementOp::ContainsAll,
            &[Value::from(1), Value::from(3)]
        ));
        assert!(list_membership(&s, ElementOp::ContainsNone, &[Value::from(9)]));
    }

    #[test]
    fn size_reflects_deduplication() {
        assert!(size(&set(&[1, 1, 2]), CompareOp::Eq, 2));
        assert!(state(&set(&[]), ContainerStateOp::IsEmpty));
    }
}
