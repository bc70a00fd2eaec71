use crate::{
    error::PatternError,
    predicate::ops::{CompareOp, MembershipOp},
};
use regex::Regex;
use serde::{Deserialize, Serialize};

///
/// TextStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TextStateOp {
    IsEmpty,
    IsNotEmpty,
    /// Empty or whitespace-only.
    IsBlank,
    IsNotBlank,
}

///
/// PatternOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PatternOp {
    Matches,
    NotMatches,
}

///
/// SubstringOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SubstringOp {
    Contains,
    NotContains,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
}

///
/// Pattern
///
/// Pre-validated regular expression operand. Validation happens here,
/// once, at definition time; evaluation can no longer fail.
///

#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|err| PatternError {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Lexicographic comparison between two text values.
#[must_use]
pub fn comparison(value: &str, op: CompareOp, target: &str) -> bool {
    op.matches(value.cmp(target))
}

#[must_use]
pub fn membership(value: &str, op: MembershipOp, candidates: &[String]) -> bool {
    op.matches(candidates.iter().any(|candidate| candidate == value))
}

#[must_use]
pub fn pattern(value: &str, op: PatternOp, pattern: &Pattern) -> bool {
    let matched = pattern.regex.is_match(value);
    match op {
        PatternOp::Matches => matched,
        PatternOp::NotMatches => !matched,
    }
}

/// Character-count comparison (not byte length).
#[must_use]
pub fn size(value: &str, op: CompareOp, chars: usize) -> bool {
    op.matches(value.chars().count().cmp(&chars))
}

#[must_use]
pub fn state(value: &str, op: TextStateOp) -> bool {
    match op {
        TextStateOp::IsEmpty => value.is_empty(),
        TextStateOp::IsNotEmpty => !value.is_empty(),
        TextStateOp::IsBlank => value.trim().is_empty(),
        TextStateOp::IsNotBlank => !value.trim().is_empty(),
    }
}

#[must_use]
pub fn substring(value: &str, op: SubstringOp, needle: &str) -> bool {
    match op {
        SubstringOp::Contains => value.contains(needle),
        SubstringOp::NotContains => !value.contains(needle),
        SubstringOp::StartsWith => value.starts_with(needle),
        SubstringOp::NotStartsWith => !value.starts_with(needle),
        SubstringOp::EndsWith => value.ends_with(needle),
        SubstringOp::NotEndsWith => !value.ends_with(needle),
    }
}
