use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{Record, ValueKind};
use crate::types::fields::FieldName;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("sort key {field} is missing on record {record}")]
    KeyNotFound { field: String, record: usize },

    #[error("sort key {field} is declared {expected} but record {record} holds a {found} value")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
        record: usize,
    },
}

/// Sort direction, applied uniformly to every key of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub(crate) fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// One sort criterion: a field and its declared comparison kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: FieldName,
    pub kind: ValueKind,
}

impl SortKey {
    pub fn new(field: FieldName, kind: ValueKind) -> Self {
        SortKey { field, kind }
    }

    pub fn text(field: impl Into<String>) -> Self {
        SortKey::new(FieldName::new(field), ValueKind::Text)
    }

    pub fn numeric(field: impl Into<String>) -> Self {
        SortKey::new(FieldName::new(field), ValueKind::Numeric)
    }

    pub fn boolean(field: impl Into<String>) -> Self {
        SortKey::new(FieldName::new(field), ValueKind::Boolean)
    }
}

/// A full sort specification.
///
/// Key order is priority order: the first key is the primary criterion,
/// every later key only breaks ties left by the keys before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortPlan {
    keys: Vec<SortKey>,
    direction: Direction,
}

impl SortPlan {
    pub fn new(keys: Vec<SortKey>, direction: Direction) -> Self {
        SortPlan { keys, direction }
    }

    /// Derive a plan from key names by reading each key's kind off the
    /// first record.
    ///
    /// An empty record sequence yields an empty plan (there is nothing to
    /// probe and nothing to order). Kinds inferred here are still checked
    /// against every record when the plan is executed.
    pub fn infer(
        records: &[Record],
        keys: &[&str],
        direction: Direction,
    ) -> Result<Self, SortError> {
        let Some(first) = records.first() else {
            return Ok(SortPlan::new(Vec::new(), direction));
        };

        let mut resolved = Vec::with_capacity(keys.len());
        for key in keys {
            let value = first.get(key).ok_or_else(|| SortError::KeyNotFound {
                field: (*key).to_string(),
                record: 0,
            })?;
            resolved.push(SortKey::new(FieldName::new(*key), value.kind()));
        }

        Ok(SortPlan::new(resolved, direction))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
