use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// CompareOp
///
/// Ordered-comparison operators shared by every category with a total
/// order, and by the size/attributes shapes (which compare counts).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// Apply this operator to an already-computed ordering.
    #[must_use]
    pub const fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::Ne => !matches!(ordering, Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Lte => !matches!(ordering, Ordering::Greater),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Gte => !matches!(ordering, Ordering::Less),
        }
    }
}

///
/// MembershipOp
///
/// Is the value one of the listed candidates?
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MembershipOp {
    In,
    NotIn,
}

impl MembershipOp {
    #[must_use]
    pub const fn matches(self, found: bool) -> bool {
        match self {
            Self::In => found,
            Self::NotIn => !found,
        }
    }
}

///
/// RangeOp
///
/// Inclusive range membership. `NotBetween` carries the documented
/// carve-out: a value that cannot be read for the range check counts as
/// "not in range" and the item is included. No other operator family
/// has a symmetric carve-out.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RangeOp {
    Between,
    NotBetween,
}

impl RangeOp {
    #[must_use]
    pub const fn matches(self, inside: bool) -> bool {
        match self {
            Self::Between => inside,
            Self::NotBetween => !inside,
        }
    }
}

///
/// ElementOp
///
/// All/any/none element containment for list-like operands.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ElementOp {
    ContainsAll,
    ContainsAny,
    ContainsNone,
}

///
/// RelationOp
///
/// Set-algebraic relations between two collections of elements.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RelationOp {
    SubsetOf,
    ProperSubsetOf,
    SupersetOf,
    ProperSupersetOf,
}

///
/// ContainerStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ContainerStateOp {
    IsEmpty,
    IsNotEmpty,
}

impl ContainerStateOp {
    #[must_use]
    pub const fn matches(self, empty: bool) -> bool {
        match self {
            Self::IsEmpty => empty,
            Self::IsNotEmpty => !empty,
        }
    }
}

///
/// KeyOp
///
/// Key presence for map and record shapes.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeyOp {
    HasKey,
    LacksKey,
}

impl KeyOp {
    #[must_use]
    pub const fn matches(self, present: bool) -> bool {
        match self {
            Self::HasKey => present,
            Self::LacksKey => !present,
        }
    }
}
