pub(crate) mod compare;
mod map;
mod record;
mod set;


use crate::category::Category;
use chrono::NaiveDate;
use num_bigint::BigInt;
use serde::Serialize;
use std::cmp::Ordering;

// re-exports
pub use map::{MapValue, MapValueError};
pub use record::{RecordValue, RecordValueError};
pub use set::{SetValue, SetValueError};

///
/// Value
///
/// Runtime value of one record field.
///
/// Null → the field is present but carries no value; it belongs to no
/// category and fails every guard.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    BigInt(BigInt),
    Bool(bool),
    Date(NaiveDate),
    /// Ordered list of values. Order is significant and duplicates are
    /// allowed.
    List(Vec<Self>),
    /// Canonical deterministic map: scalar unique keys in canonical
    /// order. See [`MapValue`].
    Map(MapValue),
    Null,
    Number(f64),
    /// String-keyed nested record with optional type identity.
    Record(RecordValue),
    /// Unordered unique scalar members in canonical order.
    Set(SetValue),
    Text(String),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a normalized `Value::Set` from owned members.
    ///
    /// Members must be scalar; duplicates collapse silently.
    pub fn from_set<T>(members: Vec<T>) -> Result<Self, SetValueError>
    where
        T: Into<Self>,
    {
        SetValue::new(members.into_iter().map(Into::into).collect()).map(Self::Set)
    }

    /// Build a canonical `Value::Map` from owned key/value entries.
    ///
    /// Keys must be scalar and unique; entries are sorted by canonical
    /// key order.
    pub fn from_map(entries: Vec<(Self, Self)>) -> Result<Self, MapValueError> {
        MapValue::new(entries).map(Self::Map)
    }

    ///
    /// TYPES
    ///

    /// The category this value belongs to, or `None` for `Null`.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::BigInt(_) => Some(Category::BigInt),
            Self::Bool(_) => Some(Category::Bool),
            Self::Date(_) => Some(Category::Date),
            Self::List(_) => Some(Category::List),
            Self::Map(_) => Some(Category::Map),
            Self::Number(_) => Some(Category::Number),
            Self::Record(_) => Some(Category::Record),
            Self::Set(_) => Some(Category::Set),
            Self::Text(_) => Some(Category::Text),
            Self::Null => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for atomic, canonically comparable values.
    ///
    /// Scalars are the only legal set members and map keys.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::BigInt(_) | Self::Bool(_) | Self::Date(_) | Self::Number(_) | Self::Text(_)
        )
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_bigint(&self) -> Option<&BigInt> {
        if let Self::BigInt(i) = self {
            Some(i)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        if let Self::Date(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_set(&self) -> Option<&SetValue> {
        if let Self::Set(s) = self {
            Some(s)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&MapValue> {
        if let Self::Map(m) = self {
            Some(m)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordValue> {
        if let Self::Record(r) = self {
            Some(r)
        } else {
            None
        }
    }

    ///
    /// ORDERING
    ///

    /// Total canonical comparator used by set/map normalization and the
    /// cross-shape equality checks of the predicate library.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }
}

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from! {
    BigInt      => BigInt,
    bool        => Bool,
    NaiveDate   => Date,
    MapValue    => Map,
    f32         => Number,
    f64         => Number,
    i8          => Number,
    i16         => Number,
    i32         => Number,
    u8          => Number,
    u16         => Number,
    u32         => Number,
    RecordValue => Record,
    SetValue    => Set,
    &str        => Text,
    String      => Text,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

// NOTE:
// Value::partial_cmp is NOT the canonical ordering. Cross-variant
// comparisons have no ordering here; use canonical_cmp for
// normalization and deterministic sorting.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::BigInt(a), Self::BigInt(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),

            // Cross-type comparisons: no ordering
            _ => None,
        }
    }
}
