use crate::{
    category::{CategoryKind, TextKind},
    chain::Wherable,
    field::{FieldAccess, TextField},
    filter::engine::{self, MissingPolicy},
    predicate::{
        ops::{CompareOp, MembershipOp},
        text::{self, Pattern, PatternOp, SubstringOp, TextStateOp},
    },
};

///
/// TextFilters
///

pub trait TextFilters: Wherable
where
    Self::Item: FieldAccess,
{
    #[must_use]
    fn text_compare(&self, field: TextField, op: CompareOp, target: &str) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::comparison(TextKind::narrow(value)?, op, target))
        })
    }

    #[must_use]
    fn text_membership(&self, field: TextField, op: MembershipOp, candidates: &[String]) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::membership(TextKind::narrow(value)?, op, candidates))
        })
    }

    #[must_use]
    fn text_pattern(&self, field: TextField, op: PatternOp, pattern: &Pattern) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::pattern(TextKind::narrow(value)?, op, pattern))
        })
    }

    #[must_use]
    fn text_size(&self, field: TextField, op: CompareOp, chars: usize) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::size(TextKind::narrow(value)?, op, chars))
        })
    }

    #[must_use]
    fn text_state(&self, field: TextField, op: TextStateOp) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::state(TextKind::narrow(value)?, op))
        })
    }

    #[must_use]
    fn text_substring(&self, field: TextField, op: SubstringOp, needle: &str) -> Self {
        engine::apply(self, field.name(), MissingPolicy::Exclude, |value| {
            Some(text::substring(TextKind::narrow(value)?, op, needle))
        })
    }
}

impl<W> TextFilters for W
where
    W: Wherable,
    W::Item: FieldAccess,
{
}
