//! Filter factory matrix.
//!
//! One trait per category, blanket-implemented for every wherable
//! context whose items expose field access. Each method is a thin
//! factory: read the field, narrow it to the category, hand the typed
//! view to the predicate library, and route the verdict through the
//! engine's missing-value policy.

pub(crate) mod engine;

mod bigint;
mod boolean;
mod date;
mod list;
mod map;
mod number;
mod record;
mod set;
mod text;

pub use bigint::BigIntFilters;
pub use boolean::BoolFilters;
pub use date::DateFilters;
pub use list::ListFilters;
pub use map::MapFilters;
pub use number::NumberFilters;
pub use record::RecordFilters;
pub use set::SetFilters;
pub use text::TextFilters;
