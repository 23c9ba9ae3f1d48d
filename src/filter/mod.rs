use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{FieldValue, Record};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filter field {field} is missing on record {record}")]
    KeyNotFound { field: String, record: usize },

    #[error("filter field {field} is not text on record {record}")]
    NotText { field: String, record: usize },
}

/// Outcome of a containment filter: the surviving records plus accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub records: Vec<Record>,
    pub matched: usize,
    pub is_empty: bool,
}

/// Keep the records whose text value under `field` contains `needle`.
///
/// Every record must carry `field` as text. An empty `needle` matches
/// everything. Returns a new sequence; the input is only read.
pub fn filter_records(
    records: &[Record],
    field: &str,
    needle: &str,
) -> Result<FilterOutcome, FilterError> {
    let mut kept = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let value = record.get(field).ok_or_else(|| FilterError::KeyNotFound {
            field: field.to_string(),
            record: index,
        })?;
        let FieldValue::Text(text) = value else {
            return Err(FilterError::NotText {
                field: field.to_string(),
                record: index,
            });
        };
        if text.contains(needle) {
            kept.push(record.clone());
        }
    }

    let matched = kept.len();
    Ok(FilterOutcome {
        records: kept,
        matched,
        is_empty: matched == 0,
    })
}
