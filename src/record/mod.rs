//! Records
//!
//! Two kinds of record live here:
//!
//! - [`Person`]: a typed record whose fields are reached through
//!   [`FieldRef`](crate::projection::FieldRef)s
//! - [`DynamicRecord`]: fields looked up by runtime name, holding tagged
//!   [`FieldValue`]s
//!
//! Records are never mutated by sorting.

mod dynamic;
mod errors;
mod person;
mod sorter;
mod value;

pub use dynamic::DynamicRecord;
pub use errors::{RecordError, RecordResult};
pub use person::Person;
pub use sorter::DynamicSorter;
pub use value::FieldValue;
