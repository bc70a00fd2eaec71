use crate::predicate::ops::CompareOp;
use serde::{Deserialize, Serialize};

///
/// BoolStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BoolStateOp {
    IsFalse,
    IsTrue,
}

/// Comparison over `false < true`.
#[must_use]
pub fn comparison(value: bool, op: CompareOp, target: bool) -> bool {
    op.matches(value.cmp(&target))
}

#[must_use]
pub const fn state(value: bool, op: BoolStateOp) -> bool {
    match op {
        BoolStateOp::IsTrue => value,
        BoolStateOp::IsFalse => !value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_orders_false_before_true() {
        assert!(comparison(false, CompareOp::Lt, true));
        assert!(comparison(true, CompareOp::Eq, true));
        assert!(comparison(true, CompareOp::Ne, false));
    }
}
