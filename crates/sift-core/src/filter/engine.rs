use crate::{chain::Wherable, field::FieldAccess, predicate::ops::RangeOp, value::Value};

///
/// MissingPolicy
///
/// What becomes of an item whose field is absent, or whose value the
/// category guard rejects. The default is `Exclude`: an unreadable
/// value is a non-match. `NotBetween` is the single carve-out; "not in
/// range" is taken to cover values that cannot be ranged at all.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MissingPolicy {
    Exclude,
    Include,
}

impl MissingPolicy {
    pub(crate) const fn on_miss(self) -> bool {
        matches!(self, Self::Include)
    }

    pub(crate) const fn for_range(op: RangeOp) -> Self {
        match op {
            RangeOp::Between => Self::Exclude,
            RangeOp::NotBetween => Self::Include,
        }
    }
}

/// Run one filter pass over a context.
///
/// `eval` returns `None` when the value falls outside the shape's
/// category; the policy decides the verdict for those items and for
/// items missing the field entirely.
pub(crate) fn apply<W, P>(ctx: &W, field: &str, policy: MissingPolicy, eval: P) -> W
where
    W: Wherable,
    W::Item: FieldAccess,
    P: Fn(&Value) -> Option<bool>,
{
    let total = ctx.count();
    let kept = ctx.where_by(|item| {
        item.get_value(field).map_or_else(
            || policy.on_miss(),
            |value| eval(&value).unwrap_or_else(|| policy.on_miss()),
        )
    });
    log::trace!("filter on '{field}': kept {} of {total}", kept.count());

    kept
}
