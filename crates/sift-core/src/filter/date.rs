use crate::{
    category::{CategoryKind, DateKind},
    chain::Wherable,
    field::{DateField, FieldAccess},
    filter::engine::{self, MissingPolicy},
    predicate::{
        date::{self, CalendarOp, DateStateOp},
        ops::{CompareOp, RangeOp},
    },
};
use chrono::NaiveDate;

///
/// DateFilters
///

pub trait DateFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn date_calendar(&self, field: DateField, op: CalendarOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(date::calendar(DateKind::narrow(value)?, op))
        })
    }

    #[must_use]
    fn date_compare(&self, field: DateField, op: CompareOp, target: NaiveDate) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(date::comparison(DateKind::narrow(value)?, op, target))
        })
    }

    /// Inclusive range filter. `NotBetween` keeps items whose field is
    /// missing or not a date.
    #[must_use]
    fn date_range(&self, field: DateField, op: RangeOp, low: NaiveDate, high: NaiveDate) -> Self {
        engine::apply(self, field.name(), MissingPolicy::for_range(op), |value| {
            Some(date::range(DateKind::narrow(value)?, op, low, high))
        })
    }

    #[must_use]
    fn date_state(&self, field: DateField, op: DateStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(date::state(DateKind::narrow(value)?, op))
        })
    }
}

impl<W> DateFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
