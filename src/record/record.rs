use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::value::FieldValue;
use crate::types::fields::FieldName;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record JSON must be an object")]
    NotAnObject,
    #[error("field {0} holds a non-scalar value")]
    UnsupportedValue(String),
    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A uniformly-shaped data row: field name to scalar value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: BTreeMap::new(),
        }
    }

    /// Parse one record from a JSON object with scalar values.
    ///
    /// Nested objects, arrays, and nulls are rejected: every field must
    /// hold a value that can order under a relational comparison. Whole
    /// JSON numbers become `Integer`, the rest become `Float`.
    pub fn from_json(raw: &str) -> Result<Self, RecordError> {
        let parsed: serde_json::Value = serde_json::from_str(raw)?;
        let serde_json::Value::Object(map) = parsed else {
            return Err(RecordError::NotAnObject);
        };

        let mut record = Record::new();
        for (key, value) in map {
            let scalar = match value {
                serde_json::Value::String(s) => FieldValue::Text(s),
                serde_json::Value::Bool(b) => FieldValue::Bool(b),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        FieldValue::Integer(i)
                    } else if let Some(f) = n.as_f64() {
                        FieldValue::Float(f)
                    } else {
                        return Err(RecordError::UnsupportedValue(key));
                    }
                }
                _ => return Err(RecordError::UnsupportedValue(key)),
            };
            record.fields.insert(FieldName::new(key), scalar);
        }

        Ok(record)
    }

    pub fn insert(&mut self, field: FieldName, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn insert_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(FieldName::new(field), FieldValue::Text(value.into()));
    }

    pub fn insert_integer(&mut self, field: impl Into<String>, value: i64) {
        self.fields
            .insert(FieldName::new(field), FieldValue::Integer(value));
    }

    pub fn insert_float(&mut self, field: impl Into<String>, value: f64) {
        self.fields
            .insert(FieldName::new(field), FieldValue::Float(value));
    }

    pub fn insert_bool(&mut self, field: impl Into<String>, value: bool) {
        self.fields
            .insert(FieldName::new(field), FieldValue::Bool(value));
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
