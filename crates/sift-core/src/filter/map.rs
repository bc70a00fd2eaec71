use crate::{
    category::{CategoryKind, MapKind},
    chain::Wherable,
    field::{FieldAccess, MapField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        map::{self, EntryOp, ValueOp},
        ops::{CompareOp, ContainerStateOp, KeyOp},
    },
    value::Value,
};

///
/// MapFilters
///

pub trait MapFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn map_entry(&self, field: MapField, op: EntryOp, key: &Value, expected: &Value) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(map::entry(MapKind::narrow(value)?, op, key, expected))
        })
    }

    #[must_use]
    fn map_key(&self, field: MapField, op: KeyOp, key: &Value) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(map::key(MapKind::narrow(value)?, op, key))
        })
    }

    #[must_use]
    fn map_size(&self, field: MapField, op: CompareOp, count: usize) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(map::size(MapKind::narrow(value)?, op, count))
        })
    }

    #[must_use]
    fn map_state(&self, field: MapField, op: ContainerStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(map::state(MapKind::narrow(value)?, op))
        })
    }

    #[must_use]
    fn map_value(&self, field: MapField, op: ValueOp, expected: &Value) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(map::value(MapKind::narrow(value)?, op, expected))
        })
    }
}

impl<W> MapFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
