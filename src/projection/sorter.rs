//! Stable sorting by field reference
//!
//! All sorts here copy (or borrow) the input into a new sequence and sort
//! that with the standard library's stable sort. The input slice is never
//! reordered.

use std::cmp::Ordering;

use super::errors::{ProjectionError, ProjectionResult};
use super::field_ref::FieldRef;
use super::sort_spec::SortDirection;

/// Returns `records` sorted ascending by `field`.
///
/// Records with equal field values keep their input order.
pub fn sort_by_field<R, V>(records: &[R], field: &FieldRef<R, V>) -> Vec<R>
where
    R: Clone,
    V: Ord,
{
    sort_by_field_with(records, field, V::cmp)
}

/// Returns `records` sorted by `field` in the given direction.
///
/// Descending reverses the comparison, not the output, so ties still keep
/// their input order.
pub fn sort_by_field_directed<R, V>(
    records: &[R],
    field: &FieldRef<R, V>,
    direction: SortDirection,
) -> Vec<R>
where
    R: Clone,
    V: Ord,
{
    sort_by_field_with(records, field, |a, b| direction.apply(a.cmp(b)))
}

/// Returns `records` sorted by `field` using a caller-supplied comparator.
///
/// `compare` must be a total order over the values it sees.
pub fn sort_by_field_with<R, V, F>(records: &[R], field: &FieldRef<R, V>, mut compare: F) -> Vec<R>
where
    R: Clone,
    F: FnMut(&V, &V) -> Ordering,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(field.project(a), field.project(b)));
    sorted
}

/// Borrowing variant of [`sort_by_field`]; no record is cloned.
pub fn sort_refs_by_field<'r, R, V>(records: &'r [R], field: &FieldRef<R, V>) -> Vec<&'r R>
where
    V: Ord,
{
    let mut sorted: Vec<&R> = records.iter().collect();
    sorted.sort_by(|a, b| field.project(a).cmp(field.project(b)));
    sorted
}

/// Sorts by a partially ordered field, rejecting values with no order.
///
/// A value that does not compare equal to itself (NaN) fails with
/// `Incomparable`. Two distinct values that cannot be ordered fail with
/// `Unordered`. Both checks run before sorting, so the sort only ever sees
/// a total order. The pairwise check is quadratic in the input length.
pub fn try_sort_by_partial_field<R, V>(
    records: &[R],
    field: &FieldRef<R, V>,
) -> ProjectionResult<Vec<R>>
where
    R: Clone,
    V: PartialOrd,
{
    let values = field.project_all(records);

    for (index, value) in values.iter().enumerate() {
        if value.partial_cmp(value).is_none() {
            return Err(ProjectionError::Incomparable {
                field: field.name(),
                index,
            });
        }
    }

    for (i, a) in values.iter().enumerate() {
        if values[i + 1..].iter().any(|b| a.partial_cmp(b).is_none()) {
            return Err(ProjectionError::Unordered { field: field.name() });
        }
    }

    // Every pair is ordered, so the fallback is never taken
    Ok(sort_by_field_with(records, field, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }))
}
