//! Type-constrained, chainable filtering over in-memory record
//! sequences.
//!
//! ## Crate layout
//! - `value`: the runtime value model and its canonical ordering.
//! - `category`: value families and the narrowing guards.
//! - `field`: typed field handles, schemas, and item field access.
//! - `chain` / `collection`: the wherable contract and its contexts.
//! - `filter`: the per-category filter traits.
//! - `predicate`: the pure evaluation library behind the filters.
//!
//! The `prelude` module mirrors the surface a query site needs; the
//! filter traits come into scope there and every wherable context
//! grows the full shape vocabulary.

pub use sift_core::{category, chain, collection, error, field, filter, predicate, value};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use sift_core::prelude::*;
}
