//! Name-keyed sorting for dynamic records
//!
//! Ordering rules:
//! - missing < bool < number < text
//! - ints and floats compare numerically
//! - for same types, natural ordering
//!
//! Sort is stable and deterministic.

use std::cmp::Ordering;

use super::dynamic::DynamicRecord;
use super::value::FieldValue;
use crate::projection::SortSpec;

/// Sorts dynamic records by a named field
pub struct DynamicSorter;

impl DynamicSorter {
    /// Returns a sorted copy of `records`; the input is left as is.
    pub fn sort(records: &[DynamicRecord], sort_spec: &SortSpec) -> Vec<DynamicRecord> {
        let mut sorted = records.to_vec();
        Self::sort_in_place(&mut sorted, sort_spec);
        sorted
    }

    /// Sorts `records` in place.
    pub fn sort_in_place(records: &mut [DynamicRecord], sort_spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare_values(
                a.member(&sort_spec.field),
                b.member(&sort_spec.field),
            );
            sort_spec.direction.apply(ordering)
        });
    }

    fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => a_val.total_cmp(b_val),
        }
    }
}
