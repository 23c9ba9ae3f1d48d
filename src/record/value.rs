use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar field value.
///
/// Untagged on the wire: JSON strings, numbers, and booleans map onto the
/// variants directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Comparison class of a field value.
///
/// Integers and floats share the `Numeric` class; the distinction never
/// changes how two values order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Numeric,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Numeric => "numeric",
            ValueKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Integer(_) | FieldValue::Float(_) => ValueKind::Numeric,
            FieldValue::Bool(_) => ValueKind::Boolean,
        }
    }

    /// Order two values of the same kind.
    ///
    /// Text is lexicographic, numerics use a total order (`total_cmp`, so
    /// NaN has a fixed position), booleans order `false < true`. Values of
    /// different kinds compare `Equal`; the sort engine validates kinds
    /// before comparing, so that case never decides an ordering.
    pub fn compare_same_kind(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}
