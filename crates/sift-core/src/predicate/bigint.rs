use crate::predicate::ops::{CompareOp, MembershipOp, RangeOp};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

///
/// BigIntStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BigIntStateOp {
    IsEven,
    IsNegative,
    IsOdd,
    IsPositive,
    IsZero,
}

#[must_use]
pub fn comparison(value: &BigInt, op: CompareOp, target: &BigInt) -> bool {
    op.matches(value.cmp(target))
}

#[must_use]
pub fn membership(value: &BigInt, op: MembershipOp, candidates: &[BigInt]) -> bool {
    op.matches(candidates.iter().any(|candidate| candidate == value))
}

/// Inclusive range membership.
#[must_use]
pub fn range(value: &BigInt, op: RangeOp, low: &BigInt, high: &BigInt) -> bool {
    op.matches(value >= low && value <= high)
}

#[must_use]
pub fn state(value: &BigInt, op: BigIntStateOp) -> bool {
    match op {
        BigIntStateOp::IsEven => (value % BigInt::from(2)).is_zero(),
        BigIntStateOp::IsOdd => !(value % BigInt::from(2)).is_zero(),
        BigIntStateOp::IsNegative => value.is_negative(),
        BigIntStateOp::IsPositive => value.is_positive(),
        BigIntStateOp::IsZero => value.is_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn comparison_and_range() {
        assert!(comparison(&big(5), CompareOp::Gte, &big(5)));
        assert!(range(&big(5), RangeOp::Between, &big(1), &big(10)));
        assert!(range(&big(-5), RangeOp::NotBetween, &big(1), &big(10)));
    }

    #[test]
    fn parity_state_handles_negatives() {
        assert!(state(&big(-4), BigIntStateOp::IsEven));
        assert!(state(&big(-3), BigIntStateOp::IsOdd));
        assert!(state(&big(0), BigIntStateOp::IsEven));
        assert!(!state(&big(0), BigIntStateOp::IsPositive));
    }
}
