use crate::{
    category::{BoolKind, CategoryKind},
    chain::Wherable,
    field::{BoolField, FieldAccess},
    filter::engine::{self, MissingPolicy},
    predicate::{
        boolean::{self, BoolStateOp},
        ops::CompareOp,
    },
};

///
/// BoolFilters
///

pub trait BoolFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn bool_compare(&self, field: BoolField, op: CompareOp, target: bool) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(boolean::comparison(BoolKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn bool_state(&self, field: BoolField, op: BoolStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(boolean::state(BoolKind::narrow(value)?, op))
        })
    }
}

impl<W> BoolFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
