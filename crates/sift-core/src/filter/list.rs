use crate::{
    category::{CategoryKind, ListKind},
    chain::Wherable,
    field::{FieldAccess, ListField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        list::{self, IntersectionOp, ListStateOp, SequenceOp},
        ops::{CompareOp, ElementOp, MembershipOp, RelationOp},
    },
    value::Value,
};

///
/// ListFilters
///

pub trait ListFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn list_compare(&self, field: ListField, op: CompareOp, target: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::comparison(ListKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn list_index_compare(
        &self,
        field: ListField,
        index: usize,
        op: CompareOp,
        target: &Value,
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::index_comparison(
                ListKind::narrow(value)?,
                index,
                op,
                target,
            ))
        })
    }

    #[must_use]
    fn list_index_membership(
        &self,
        field: ListField,
        index: usize,
        op: MembershipOp,
        candidates: &[Value],
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::index_membership(
                ListKind::narrow(value)?,
                index,
                op,
                candidates,
            ))
        })
    }

    #[must_use]
    fn list_intersection(&self, field: ListField, op: IntersectionOp, other: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::intersection(ListKind::narrow(value)?, op, other))
        })
    }

    #[must_use]
    fn list_membership(&self, field: ListField, op: ElementOp, needles: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::membership(ListKind::narrow(value)?, op, needles))
        })
    }

    #[must_use]
    fn list_relation(&self, field: ListField, op: RelationOp, other: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::relation(ListKind::narrow(value)?, op, other))
        })
    }

    #[must_use]
    fn list_sequence(&self, field: ListField, op: SequenceOp, affix: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::sequence(ListKind::narrow(value)?, op, affix))
        })
    }

    #[must_use]
    fn list_size(&self, field: ListField, op: CompareOp, count: usize) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::size(ListKind::narrow(value)?, op, count))
        })
    }

    #[must_use]
    fn list_state(&self, field: ListField, op: ListStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(list::state(ListKind::narrow(value)?, op))
        })
    }
}

impl<W> ListFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
