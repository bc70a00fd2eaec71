use crate::{
    category::{CategoryKind, SetKind},
    chain::Wherable,
    field::{FieldAccess, SetField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        ops::{CompareOp, ContainerStateOp, ElementOp, RelationOp},
        set::{self, MemberOp},
    },
    value::{SetValue, Value},
};

///
/// SetFilters
///

pub trait SetFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn set_compare(&self, field: SetField, op: CompareOp, target: &SetValue) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::comparison(SetKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn set_list_membership(&self, field: SetField, op: ElementOp, members: &[Value]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::list_membership(SetKind::narrow(value)?, op, members))
        })
    }

    #[must_use]
    fn set_membership(&self, field: SetField, op: MemberOp, member: &Value) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::membership(SetKind::narrow(value)?, op, member))
        })
    }

    #[must_use]
    fn set_relation(&self, field: SetField, op: RelationOp, other: &SetValue) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::relation(SetKind::narrow(value)?, op, other))
        })
    }

    #[must_use]
    fn set_size(&self, field: SetField, op: CompareOp, count: usize) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::size(SetKind::narrow(value)?, op, count))
        })
    }

    #[must_use]
    fn set_state(&self, field: SetField, op: ContainerStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(set::state(SetKind::narrow(value)?, op))
        })
    }
}

impl<W> SetFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
