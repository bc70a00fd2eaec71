use crate::{
    category::{BigIntKind, CategoryKind},
    chain::Wherable,
    field::{BigIntField, FieldAccess},
    filter::engine::{self, MissingPolicy},
    predicate::{
        bigint::{self, BigIntStateOp},
        ops::{CompareOp, MembershipOp, RangeOp},
    },
};
use num_bigint::BigInt;

///
/// BigIntFilters
///

pub trait BigIntFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn bigint_compare(&self, field: BigIntField, op: CompareOp, target: &BigInt) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(bigint::comparison(BigIntKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn bigint_membership(
        &self,
        field: BigIntField,
        op: MembershipOp,
        candidates: &[BigInt],
    ) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(bigint::membership(
                BigIntKind::narrow(value)?,
                op,
                candidates,
            ))
        })
    }

    /// Inclusive range filter. `NotBetween` keeps items whose field is
    /// missing or not a bigint.
    #[must_use]
    fn bigint_range(&self, field: BigIntField, op: RangeOp, low: &BigInt, high: &BigInt) -> Self {
        engine::apply(self, field.name(), MissingPolicy::for_range(op), |value| {
            Some(bigint::range(BigIntKind::narrow(value)?, op, low, high))
        })
    }

    #[must_use]
    fn bigint_state(&self, field: BigIntField, op: BigIntStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(bigint::state(BigIntKind::narrow(value)?, op))
        })
    }
}

impl<W> BigIntFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
