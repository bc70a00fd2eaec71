use crate::{
    category::{CategoryKind, NumberKind},
    chain::Wherable,
    field::{FieldAccess, NumberField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        number::{self, NumberStateOp},
        ops::{CompareOp, RangeOp},
    },
};

///
/// NumberFilters
///

pub trait NumberFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn number_compare(&self, field: NumberField, op: CompareOp, target: f64) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(number::comparison(NumberKind::narrow(value)?, op, target))
        })
    }

    /// Inclusive range filter. `NotBetween` keeps items whose field is
    /// missing or not a number.
    #[must_use]
    fn number_range(&self, field: NumberField, op: RangeOp, low: f64, high: f64) -> Self {
        engine::apply(self, field.name(), MissingPolicy::for_range(op), |value| {
            Some(number::range(NumberKind::narrow(value)?, op, low, high))
        })
    }

    #[must_use]
    fn number_state(&self, field: NumberField, op: NumberStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(number::state(NumberKind::narrow(value)?, op))
        })
    }
}

impl<W> NumberFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
