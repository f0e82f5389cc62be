//! Tagged field values for dynamic records
//!
//! Supported types:
//! - text: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point (never NaN when built through `float`)
//! - bool: Boolean

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::errors::{RecordError, RecordResult};

/// A single value stored in a dynamic record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Creates a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Creates a float value, rejecting NaN
    pub fn float(value: f64) -> RecordResult<Self> {
        if value.is_nan() {
            return Err(RecordError::NotANumber);
        }
        Ok(FieldValue::Float(value))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value; ints widen to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Rank used when comparing values of different types.
    ///
    /// bool < number < text
    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Total order over field values.
    ///
    /// Values of different types order by type rank. Numbers compare by
    /// exact mathematical value, ints against floats included, so the
    /// order stays transitive above 2^53. NaN (only reachable by building
    /// `FieldValue::Float` directly) sorts after every other number.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        let rank = self.type_rank().cmp(&other.type_rank());
        if rank != Ordering::Equal {
            return rank;
        }

        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => cmp_floats(*a, *b),
            (FieldValue::Int(a), FieldValue::Float(b)) => cmp_int_float(*a, *b),
            (FieldValue::Float(a), FieldValue::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Converts a JSON scalar into a field value.
    ///
    /// `field` is only used for error messages.
    pub fn from_json(field: &str, value: &serde_json::Value) -> RecordResult<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Err(RecordError::NullValue(field.to_string())),
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(FieldValue::Int(i)),
                // u64 beyond i64::MAX or a real float; JSON numbers are never NaN
                None => Ok(FieldValue::Float(n.as_f64().unwrap_or(f64::MAX))),
            },
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Array(_) => Err(RecordError::UnsupportedType {
                field: field.to_string(),
                actual: "array",
            }),
            Value::Object(_) => Err(RecordError::UnsupportedType {
                field: field.to_string(),
                actual: "object",
            }),
        }
    }

    /// Converts back to JSON
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::from(*i),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Orders floats with NaN last; -0.0 equals 0.0.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compares an int with a float without rounding the int.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63; i64::MIN is -2^63 and exactly representable
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() || f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_rejects_nan() {
        assert_eq!(FieldValue::float(f64::NAN), Err(RecordError::NotANumber));
        assert_eq!(FieldValue::float(1.5), Ok(FieldValue::Float(1.5)));
    }

    #[test]
    fn test_type_rank_ordering() {
        let b = FieldValue::Bool(true);
        let n = FieldValue::Int(-5);
        let t = FieldValue::text("a");

        assert_eq!(b.total_cmp(&n), Ordering::Less);
        assert_eq!(n.total_cmp(&t), Ordering::Less);
        assert_eq!(t.total_cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_mixed_numeric_compare() {
        let i = FieldValue::Int(2);
        let f = FieldValue::Float(2.5);

        assert_eq!(i.total_cmp(&f), Ordering::Less);
        assert_eq!(f.total_cmp(&i), Ordering::Greater);
    }

    #[test]
    fn test_nan_sorts_last() {
        let nan = FieldValue::Float(f64::NAN);
        let big = FieldValue::Float(f64::INFINITY);

        assert_eq!(big.total_cmp(&nan), Ordering::Less);
    }

    #[test]
    fn test_int_float_exact_above_2_pow_53() {
        let two_53: i64 = 1 << 53;
        let int_low = FieldValue::Int(two_53);
        let int_high = FieldValue::Int(two_53 + 1);
        let float = FieldValue::Float(two_53 as f64);

        assert_eq!(int_low.total_cmp(&float), Ordering::Equal);
        assert_eq!(float.total_cmp(&int_high), Ordering::Less);
        assert_eq!(int_high.total_cmp(&float), Ordering::Greater);
    }

    #[test]
    fn test_int_float_fraction_and_extremes() {
        assert_eq!(FieldValue::Int(2).total_cmp(&FieldValue::Float(2.5)), Ordering::Less);
        assert_eq!(FieldValue::Int(-2).total_cmp(&FieldValue::Float(-2.5)), Ordering::Greater);
        assert_eq!(FieldValue::Int(-3).total_cmp(&FieldValue::Float(-2.5)), Ordering::Less);
        assert_eq!(
            FieldValue::Int(i64::MAX).total_cmp(&FieldValue::Float(f64::INFINITY)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Int(i64::MIN).total_cmp(&FieldValue::Float(i64::MIN as f64)),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Int(i64::MAX).total_cmp(&FieldValue::Float(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from_json("a", &json!(25)), Ok(FieldValue::Int(25)));
        assert_eq!(FieldValue::from_json("a", &json!(2.5)), Ok(FieldValue::Float(2.5)));
        assert_eq!(FieldValue::from_json("a", &json!("x")), Ok(FieldValue::text("x")));
        assert_eq!(FieldValue::from_json("a", &json!(false)), Ok(FieldValue::Bool(false)));
    }

    #[test]
    fn test_from_json_rejects_null_and_nested() {
        assert_eq!(
            FieldValue::from_json("age", &json!(null)),
            Err(RecordError::NullValue("age".into()))
        );
        assert!(matches!(
            FieldValue::from_json("tags", &json!(["a"])),
            Err(RecordError::UnsupportedType { actual: "array", .. })
        ));
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<FieldValue> = serde_json::from_value(json!([true, 3, 1.5, "s"])).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Bool(true),
                FieldValue::Int(3),
                FieldValue::Float(1.5),
                FieldValue::text("s"),
            ]
        );
    }
}
