use crate::{
    predicate::{
        element_match,
        ops::{CompareOp, ElementOp, MembershipOp, RelationOp},
        slice_contains, value_eq,
    },
    value::{Value, compare},
};
use serde::{Deserialize, Serialize};

///
/// IntersectionOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IntersectionOp {
    Disjoint,
    Intersects,
}

///
/// SequenceOp
///
/// Prefix/suffix matching over list elements, order-sensitive.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SequenceOp {
    EndsWith,
    NotEndsWith,
    NotStartsWith,
    StartsWith,
}

///
/// ListStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ListStateOp {
    HasDuplicates,
    IsDistinct,
    IsEmpty,
    IsNotEmpty,
}

/// Elementwise canonical comparison, then length as tiebreak.
#[must_use]
pub fn comparison(value: &[Value], op: CompareOp, target: &[Value]) -> bool {
    op.matches(compare::canonical_cmp_list(value, target))
}

/// Compare the element at `index` against a target.
///
/// An out-of-range index is a non-match for every operator, including
/// `Ne`.
#[must_use]
pub fn index_comparison(value: &[Value], index: usize, op: CompareOp, target: &Value) -> bool {
    value
        .get(index)
        .is_some_and(|element| op.matches(Value::canonical_cmp(element, target)))
}

/// Membership test for the element at `index`.
///
/// An out-of-range index is a non-match for every operator, including
/// `NotIn`.
#[must_use]
pub fn index_membership(
    value: &[Value],
    index: usize,
    op: MembershipOp,
    candidates: &[Value],
) -> bool {
    value
        .get(index)
        .is_some_and(|element| op.matches(slice_contains(candidates, element)))
}

#[must_use]
pub fn intersection(value: &[Value], op: IntersectionOp, other: &[Value]) -> bool {
    let overlaps = value.iter().any(|element| slice_contains(other, element));
    match op {
        IntersectionOp::Intersects => overlaps,
        IntersectionOp::Disjoint => !overlaps,
    }
}

#[must_use]
pub fn membership(value: &[Value], op: ElementOp, needles: &[Value]) -> bool {
    element_match(value, op, needles)
}

/// Set-algebraic relation over the distinct elements of both lists.
///
/// Order and multiplicity are ignored here; `sequence` is the
/// order-sensitive counterpart.
#[must_use]
pub fn relation(value: &[Value], op: RelationOp, other: &[Value]) -> bool {
    let subset = is_element_subset(value, other);
    let superset = is_element_subset(other, value);
    match op {
        RelationOp::SubsetOf => subset,
        RelationOp::ProperSubsetOf => subset && !superset,
        RelationOp::SupersetOf => superset,
        RelationOp::ProperSupersetOf => superset && !subset,
    }
}

#[must_use]
pub fn sequence(value: &[Value], op: SequenceOp, affix: &[Value]) -> bool {
    match op {
        SequenceOp::StartsWith => starts_with(value, affix),
        SequenceOp::NotStartsWith => !starts_with(value, affix),
        SequenceOp::EndsWith => ends_with(value, affix),
        SequenceOp::NotEndsWith => !ends_with(value, affix),
    }
}

#[must_use]
pub fn size(value: &[Value], op: CompareOp, count: usize) -> bool {
    op.matches(value.len().cmp(&count))
}

#[must_use]
pub fn state(value: &[Value], op: ListStateOp) -> bool {
    match op {
        ListStateOp::HasDuplicates => has_duplicates(value),
        ListStateOp::IsDistinct => !has_duplicates(value),
        ListStateOp::IsEmpty => value.is_empty(),
        ListStateOp::IsNotEmpty => !value.is_empty(),
    }
}

fn is_element_subset(left: &[Value], right: &[Value]) -> bool {
    left.iter().all(|element| slice_contains(right, element))
}

fn starts_with(value: &[Value], prefix: &[Value]) -> bool {
    value.len() >= prefix.len()
        && value
            .iter()
            .zip(prefix)
            .all(|(element, expected)| value_eq(element, expected))
}

fn ends_with(value: &[Value], suffix: &[Value]) -> bool {
    value.len() >= suffix.len()
        && value[value.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(element, expected)| value_eq(element, expected))
}

// Quadratic, but lists are small and elements need not be scalar.
fn has_duplicates(value: &[Value]) -> bool {
    value.iter().enumerate().any(|(index, element)| {
        value[index + 1..]
            .iter()
            .any(|other| value_eq(element, other))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(items: &[i32]) -> Vec<Value> {
        items.iter().map(|&n| Value::from(n)).collect()
    }

    #[test]
    fn index_out_of_range_never_matches() {
        let list = nums(&[1, 2]);
        assert!(!index_comparison(&list, 5, CompareOp::Ne, &Value::from(1)));
        assert!(!index_membership(
            &list,
            5,
            MembershipOp::NotIn,
            &nums(&[1])
        ));
        assert!(index_comparison(&list, 1, CompareOp::Eq, &Value::from(2)));
    }

    #[test]
    fn relation_ignores_order_and_multiplicity() {
        let value = nums(&[2, 1, 2]);
        let other = nums(&[1, 2, 3]);
        assert!(relation(&value, RelationOp::SubsetOf, &other));
        assert!(relation(&value, RelationOp::ProperSubsetOf, &other));
        assert!(!relation(&value, RelationOp::SupersetOf, &other));
        assert!(relation(&value, RelationOp::SubsetOf, &nums(&[1, 2])));
        assert!(!relation(&value, RelationOp::ProperSubsetOf, &nums(&[1, 2])));
    }

    #[test]
    fn sequence_is_order_sensitive() {
        let list = nums(&[1, 2, 3, 4]);
        assert!(sequence(&list, SequenceOp::StartsWith, &nums(&[1, 2])));
        assert!(sequence(&list, SequenceOp::NotStartsWith, &nums(&[2, 1])));
        assert!(sequence(&list, SequenceOp::EndsWith, &nums(&[3, 4])));
        assert!(!sequence(&list, SequenceOp::EndsWith, &nums(&[4, 3])));
        // An affix longer than the list never matches.
        assert!(!sequence(&nums(&[1]), SequenceOp::StartsWith, &nums(&[1, 2])));
    }

    #[test]
    fn membership_all_any_none() {
        let list = nums(&[1, 2, 3]);
        assert!(membership(&list, ElementOp::ContainsAll, &nums(&[1, 3])));
        assert!(membership(&list, ElementOp::ContainsAny, &nums(&[9, 2])));
        assert!(membership(&list, ElementOp::ContainsNone, &nums(&[8, 9])));
        // Vacuous truth over an empty needle list.
        assert!(membership(&list, ElementOp::ContainsAll, &[]));
    }

    #[test]
    fn duplicate_state() {
        assert!(state(&nums(&[1, 2, 1]), ListStateOp::HasDuplicates));
        assert!(state(&nums(&[1, 2, 3]), ListStateOp::IsDistinct));
        assert!(state(&[], ListStateOp::IsDistinct));
        assert!(state(&[], ListStateOp::IsEmpty));
    }
}
