//! Field Projector/Sorter
//!
//! Sorts sequences of homogeneous records by one field, named through a
//! reusable [`FieldRef`].
//!
//! # Guarantees
//!
//! - The input sequence is never modified
//! - Output is a permutation of the input
//! - Sorting is stable: equal keys keep their input order
//! - Pure: no I/O, no shared state
//!
//! # Known limitation
//!
//! Floating point fields only have a partial order. Use
//! [`try_sort_by_partial_field`] to reject NaN, or pass `f64::total_cmp` to
//! [`sort_by_field_with`] for a total order that places NaN last.

mod errors;
mod field_ref;
mod sort_spec;
mod sorter;

pub use errors::{ProjectionError, ProjectionResult};
pub use field_ref::FieldRef;
pub use sort_spec::{SortDirection, SortSpec};
pub use sorter::{
    sort_by_field, sort_by_field_directed, sort_by_field_with, sort_refs_by_field,
    try_sort_by_partial_field,
};
