use crate::predicate::ops::{CompareOp, RangeOp};
use serde::{Deserialize, Serialize};

///
/// NumberStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum NumberStateOp {
    IsFinite,
    IsInteger,
    IsNan,
    IsNegative,
    IsPositive,
    IsZero,
}

/// Ordered comparison between two numbers.
///
/// NOTE: NaN comparisons are non-matches for every operator, including
/// `Ne`.
#[must_use]
pub fn comparison(value: f64, op: CompareOp, target: f64) -> bool {
    value
        .partial_cmp(&target)
        .is_some_and(|ordering| op.matches(ordering))
}

#[must_use]
pub fn state(value: f64, op: NumberStateOp) -> bool {
    match op {
        NumberStateOp::IsFinite => value.is_finite(),
        NumberStateOp::IsInteger => value.is_finite() && value.fract() == 0.0,
        NumberStateOp::IsNan => value.is_nan(),
        NumberStateOp::IsNegative => value < 0.0,
        NumberStateOp::IsPositive => value > 0.0,
        NumberStateOp::IsZero => value == 0.0,
    }
}

/// Inclusive range membership. NaN is never inside a range.
#[must_use]
pub fn range(value: f64, op: RangeOp, low: f64, high: f64) -> bool {
    op.matches(value >= low && value <= high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_never_compares() {
        assert!(!comparison(f64::NAN, CompareOp::Eq, f64::NAN));
        assert!(!comparison(f64::NAN, CompareOp::Ne, 1.0));
        assert!(!comparison(1.0, CompareOp::Lt, f64::NAN));
    }

    #[test]
    fn range_is_inclusive() {
        assert!(range(10.0, RangeOp::Between, 10.0, 20.0));
        assert!(range(20.0, RangeOp::Between, 10.0, 20.0));
        assert!(range(21.0, RangeOp::NotBetween, 10.0, 20.0));
        assert!(!range(15.0, RangeOp::NotBetween, 10.0, 20.0));
    }

    #[test]
    fn integer_state_requires_finite() {
        assert!(state(3.0, NumberStateOp::IsInteger));
        assert!(!state(3.5, NumberStateOp::IsInteger));
        assert!(!state(f64::INFINITY, NumberStateOp::IsInteger));
    }
}
