use crate::category::Category;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Definition-time field registration failures. Raised when a typed
/// field handle is constructed against a schema that does not declare
/// the requested (name, category) pairing. Never raised per item.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' is declared as {declared}, not {requested}")]
    CategoryMismatch {
        field: String,
        declared: Category,
        requested: Category,
    },
}

///
/// PatternError
///
/// Invalid regular expression operand, surfaced when the pattern is
/// constructed. Evaluation itself cannot fail.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}
