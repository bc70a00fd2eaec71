use crate::{
    category::{CategoryKind, RecordKind},
    chain::Wherable,
    field::{FieldAccess, RecordField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        ops::{CompareOp, ContainerStateOp, KeyOp},
        record::{
            self, KeySetOp, KeysRelationOp, KeysStateOp, LineageRelationOp, LineageStateOp,
            TypeOp, TypeRelationOp,
        },
    },
    value::Value,
};

///
/// RecordFilters
///

pub trait RecordFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn record_attributes(&self, field: RecordField, op: CompareOp, count: usize) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::attributes(RecordKind::narrow(value)?, op, count))
        })
    }

    #[must_use]
    fn record_instance(&self, field: RecordField, op: TypeOp, type_name: &str) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::instance_type(
                RecordKind::narrow(value)?,
                op,
                type_name,
            ))
        })
    }

    #[must_use]
    fn record_instance_relation(
        &self,
        field: RecordField,
        op: TypeRelationOp,
        type_name: &str,
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::instance_relation(
                RecordKind::narrow(value)?,
                op,
                type_name,
            ))
        })
    }

    #[must_use]
    fn record_key(&self, field: RecordField, op: KeyOp, key: &str) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::key(RecordKind::narrow(value)?, op, key))
        })
    }

    #[must_use]
    fn record_key_membership(&self, field: RecordField, op: KeySetOp, keys: &[String]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::key_membership(RecordKind::narrow(value)?, op, keys))
        })
    }

    #[must_use]
    fn record_keys(&self, field: RecordField, op: KeysRelationOp, target: &[String]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::keys(RecordKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn record_keys_state(&self, field: RecordField, op: KeysStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::keys_state(RecordKind::narrow(value)?, op))
        })
    }

    #[must_use]
    fn record_lineage_relation(
        &self,
        field: RecordField,
        op: LineageRelationOp,
        ancestors: &[String],
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::lineage_relation(
                RecordKind::narrow(value)?,
                op,
                ancestors,
            ))
        })
    }

    #[must_use]
    fn record_lineage_state(&self, field: RecordField, op: LineageStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::lineage_state(RecordKind::narrow(value)?, op))
        })
    }

    #[must_use]
    fn record_property(
        &self,
        field: RecordField,
        key: &str,
        op: CompareOp,
        expected: &Value,
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::property(
                RecordKind::narrow(value)?,
                key,
                op,
                expected,
            ))
        })
    }

    #[must_use]
    fn record_state(&self, field: RecordField, op: ContainerStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(record::state(RecordKind::narrow(value)?, op))
        })
    }
}

impl<W> RecordFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
