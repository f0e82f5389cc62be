//! Reusable field references
//!
//! A `FieldRef<R, V>` names one field of record type `R` and knows how to
//! read a `&V` out of any `R`. It is independent of any particular record
//! and is compared only by the field it denotes.

use std::fmt;

/// Accessor for a single field of `R` holding a `V`.
pub struct FieldRef<R, V> {
    /// Field name within `R`
    name: &'static str,
    /// Projection from record to field value
    get: fn(&R) -> &V,
}

impl<R, V> FieldRef<R, V> {
    /// Creates a field reference from a name and a projection.
    ///
    /// The name identifies the field; two references with the same name on
    /// the same record type are considered the same field.
    pub fn new(name: &'static str, get: fn(&R) -> &V) -> Self {
        Self { name, get }
    }

    /// Returns the field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the field out of a record.
    pub fn project<'r>(&self, record: &'r R) -> &'r V {
        (self.get)(record)
    }

    /// Reads the field out of every record, preserving order.
    pub fn project_all<'r>(&self, records: &'r [R]) -> Vec<&'r V> {
        records.iter().map(|record| self.project(record)).collect()
    }
}

impl<R, V> Clone for FieldRef<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for FieldRef<R, V> {}

impl<R, V> PartialEq for FieldRef<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R, V> Eq for FieldRef<R, V> {}

impl<R, V> fmt::Debug for FieldRef<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef").field("name", &self.name).finish()
    }
}

impl<R, V> fmt::Display for FieldRef<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\.{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        y: i32,
    }

    fn x_of(p: &Point) -> &i32 {
        &p.x
    }

    fn y_of(p: &Point) -> &i32 {
        &p.y
    }

    #[test]
    fn test_project_reads_field() {
        let x = FieldRef::new("x", x_of);
        let y = FieldRef::new("y", y_of);
        let p = Point { x: 3, y: 7 };

        assert_eq!(*x.project(&p), 3);
        assert_eq!(*y.project(&p), 7);
    }

    #[test]
    fn test_project_all_preserves_order() {
        let x = FieldRef::new("x", x_of);
        let points = vec![Point { x: 2, y: 0 }, Point { x: 1, y: 0 }];

        assert_eq!(x.project_all(&points), vec![&2, &1]);
    }

    #[test]
    fn test_equality_by_field_only() {
        let a = FieldRef::new("x", x_of);
        let b = FieldRef::new("x", x_of);
        let c = FieldRef::new("y", y_of);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reusable_after_copy() {
        let x = FieldRef::new("x", x_of);
        let copy = x;
        let p = Point { x: 9, y: 0 };

        assert_eq!(*x.project(&p), *copy.project(&p));
        assert_eq!(format!("{}", x), "\\.x");
    }
}
