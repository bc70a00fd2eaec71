//! Predicate evaluation library.
//!
//! Pure functions, one module per category, with the shape signature
//! `shape(value, operator, operands…) -> bool`. Values arrive already
//! narrowed to the category; operator enums live with their shapes. The
//! filter engine only routes and never interprets operator semantics.
//!
//! Invalid comparisons are non-matches, never errors. Operands that can
//! be malformed (patterns) are validated at construction, so evaluation
//! is total.

pub mod bigint;
pub mod boolean;
pub mod date;
pub mod list;
pub mod map;
pub mod number;
pub mod ops;
pub mod record;
pub mod set;
pub mod text;

use crate::value::Value;
use ops::ElementOp;
use std::cmp::Ordering;

/// Canonical equality used by every collection-shape predicate.
pub(crate) fn value_eq(left: &Value, right: &Value) -> bool {
    Value::canonical_cmp(left, right) == Ordering::Equal
}

pub(crate) fn slice_contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|candidate| value_eq(candidate, needle))
}

/// Shared all/any/none element matching over a haystack slice.
///
/// `ContainsAll` over an empty needle list holds vacuously.
pub(crate) fn element_match(haystack: &[Value], op: ElementOp, needles: &[Value]) -> bool {
    match op {
        ElementOp::ContainsAll => needles.iter().all(|needle| slice_contains(haystack, needle)),
        ElementOp::ContainsAny => needles.iter().any(|needle| slice_contains(haystack, needle)),
        ElementOp::ContainsNone => !needles.iter().any(|needle| slice_contains(haystack, needle)),
    }
}
