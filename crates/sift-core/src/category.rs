use crate::value::{MapValue, RecordValue, SetValue, Value};
use chrono::NaiveDate;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Category
///
/// Runtime classification a field's value must match before any shape
/// predicate runs. One variant per filterable value family. `Null` has
/// no category; it fails every guard.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Category {
    BigInt,
    Bool,
    Date,
    List,
    Map,
    Number,
    Record,
    Set,
    Text,
}

impl Category {
    /// Stable human-readable label used by diagnostics and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigInt => "bigint",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::List => "list",
            Self::Map => "map",
            Self::Number => "number",
            Self::Record => "record",
            Self::Set => "set",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// CategoryKind
///
/// Zero-sized marker binding a `Field` handle to one category at the
/// type level. `narrow` is the runtime guard: it yields the typed view
/// of a value, or `None` when the value does not belong to the category.
/// The guard never inspects operator semantics.
///

pub trait CategoryKind {
    const CATEGORY: Category;

    type View<'a>;

    fn narrow(value: &Value) -> Option<Self::View<'_>>;
}

///
/// Marker kinds, one per category.
///

#[derive(Clone, Copy, Debug)]
pub struct TextKind;

#[derive(Clone, Copy, Debug)]
pub struct NumberKind;

#[derive(Clone, Copy, Debug)]
pub struct BoolKind;

#[derive(Clone, Copy, Debug)]
pub struct BigIntKind;

#[derive(Clone, Copy, Debug)]
pub struct DateKind;

#[derive(Clone, Copy, Debug)]
pub struct ListKind;

#[derive(Clone, Copy, Debug)]
pub struct SetKind;

#[derive(Clone, Copy, Debug)]
pub struct MapKind;

#[derive(Clone, Copy, Debug)]
pub struct RecordKind;

impl CategoryKind for TextKind {
    const CATEGORY: Category = Category::Text;

    type View<'a> = &'a str;

    fn narrow(value: &Value) -> Option<&str> {
        value.as_text()
    }
}

impl CategoryKind for NumberKind {
    const CATEGORY: Category = Category::Number;

    type View<'a> = f64;

    fn narrow(value: &Value) -> Option<f64> {
        value.as_number()
    }
}

impl CategoryKind for BoolKind {
    const CATEGORY: Category = Category::Bool;

    type View<'a> = bool;

    fn narrow(value: &Value) -> Option<bool> {
        value.as_bool()
    }
}

impl CategoryKind for BigIntKind {
    const CATEGORY: Category = Category::BigInt;

    type View<'a> = &'a BigInt;

    fn narrow(value: &Value) -> Option<&BigInt> {
        value.as_bigint()
    }
}

impl CategoryKind for DateKind {
    const CATEGORY: Category = Category::Date;

    type View<'a> = NaiveDate;

    fn narrow(value: &Value) -> Option<NaiveDate> {
        value.as_date()
    }
}

impl CategoryKind for ListKind {
    const CATEGORY: Category = Category::List;

    type View<'a> = &'a [Value];

    fn narrow(value: &Value) -> Option<&[Value]> {
        value.as_list()
    }
}

impl CategoryKind for SetKind {
    const CATEGORY: Category = Category::Set;

    type View<'a> = &'a SetValue;

    fn narrow(value: &Value) -> Option<&SetValue> {
        value.as_set()
    }
}

impl CategoryKind for MapKind {
    const CATEGORY: Category = Category::Map;

    type View<'a> = &'a MapValue;

    fn narrow(value: &Value) -> Option<&MapValue> {
        value.as_map()
    }
}

impl CategoryKind for RecordKind {
    const CATEGORY: Category = Category::Record;

    type View<'a> = &'a RecordValue;

    fn narrow(value: &Value) -> Option<&RecordValue> {
        value.as_record()
    }
}
