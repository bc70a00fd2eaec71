use crate::{
    category::{
        BigIntKind, BoolKind, Category, CategoryKind, DateKind, ListKind, MapKind, NumberKind,
        RecordKind, SetKind, TextKind,
    },
    error::SchemaError,
    value::{RecordValue, Value},
};
use std::{fmt, marker::PhantomData};

///
/// FieldAccess
///
/// Runtime field lookup contract for filterable items. `None` means the
/// field is not present on the item; a present field may still hold a
/// value outside its declared category, which the guard handles per
/// item, silently.
///

pub trait FieldAccess {
    fn get_value(&self, field: &str) -> Option<Value>;
}

/// Dynamic records are their own field source.
impl FieldAccess for RecordValue {
    fn get_value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }
}

///
/// FieldSpec
///
/// One declared (field, category) pairing in a schema.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub category: Category,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, category: Category) -> Self {
        Self { name, category }
    }
}

///
/// Schema
///
/// Declared field/category table for a record type. Consulted once, at
/// the point typed field handles are constructed; never per item.
///

pub trait Schema {
    const FIELDS: &'static [FieldSpec];

    #[must_use]
    fn declared_category(field: &str) -> Option<Category> {
        Self::FIELDS
            .iter()
            .find(|spec| spec.name == field)
            .map(|spec| spec.category)
    }
}

///
/// Field
///
/// Typed field handle. The category marker makes the handle legal only
/// for filter methods of the matching category, so a field of the wrong
/// category is rejected at compile time. Construction through `new`
/// additionally validates the schema declaration up front: a
/// configuration error, raised exactly once.
///

pub struct Field<C> {
    name: &'static str,
    _category: PhantomData<C>,
}

// Manual impls: `C` is a marker, the handle itself is always copyable.
impl<C> Clone for Field<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Field<C> {}

impl<C: CategoryKind> Field<C> {
    /// Construct a schema-checked field handle.
    pub fn new<T: Schema>(name: &'static str) -> Result<Self, SchemaError> {
        match T::declared_category(name) {
            None => Err(SchemaError::UnknownField {
                field: name.to_string(),
            }),
            Some(declared) if declared != C::CATEGORY => Err(SchemaError::CategoryMismatch {
                field: name.to_string(),
                declared,
                requested: C::CATEGORY,
            }),
            Some(_) => Ok(Self::assume(name)),
        }
    }

    /// Unchecked constructor for schema-less items (dynamic records).
    #[must_use]
    pub const fn assume(name: &'static str) -> Self {
        Self {
            name,
            _category: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<C: CategoryKind> fmt::Debug for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({}: {})", self.name, C::CATEGORY)
    }
}

impl<C: CategoryKind> fmt::Display for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub type TextField = Field<TextKind>;
pub type NumberField = Field<NumberKind>;
pub type BoolField = Field<BoolKind>;
pub type BigIntField = Field<BigIntKind>;
pub type DateField = Field<DateKind>;
pub type ListField = Field<ListKind>;
pub type SetField = Field<SetKind>;
pub type MapField = Field<MapKind>;
pub type RecordField = Field<RecordKind>;
