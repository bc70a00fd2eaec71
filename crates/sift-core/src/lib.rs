//! Core engine for sift: the value model, category narrowing, the
//! wherable chain contract, the predicate evaluation library, and the
//! filter factory matrix, with the ergonomics exported via the `prelude`.

pub mod category;
pub mod chain;
pub mod collection;
pub mod error;
pub mod field;
pub mod filter;
pub mod predicate;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and internal helpers are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        category::Category,
        chain::{Chain, Wherable},
        collection::Collection,
        field::{
            BigIntField, BoolField, DateField, Field, FieldAccess, FieldSpec, ListField, MapField,
            NumberField, RecordField, Schema, SetField, TextField,
        },
        filter::{
            BigIntFilters, BoolFilters, DateFilters, ListFilters, MapFilters, NumberFilters,
            RecordFilters, SetFilters, TextFilters,
        },
        predicate::ops::{
            CompareOp, ContainerStateOp, ElementOp, KeyOp, MembershipOp, RangeOp, RelationOp,
        },
        value::{MapValue, RecordValue, SetValue, Value},
    };
}
