use std::cmp::Ordering;

use super::plan::{SortError, SortPlan};
use crate::record::{FieldValue, Record, ValueKind};

/// Strategy for ordering two field values under one sort key.
///
/// The engine validates kinds before comparing, so implementations only
/// ever see value pairs matching the declared `kind`.
pub trait KeyComparator {
    fn compare(&self, kind: ValueKind, a: &FieldValue, b: &FieldValue) -> Ordering;
}

/// Default comparator: the natural ordering of each kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypedKeyComparator;

impl KeyComparator for TypedKeyComparator {
    fn compare(&self, _kind: ValueKind, a: &FieldValue, b: &FieldValue) -> Ordering {
        a.compare_same_kind(b)
    }
}

/// Check that every record carries every planned key with the declared
/// kind. Runs to completion before any comparison is made.
pub(crate) fn validate(records: &[Record], plan: &SortPlan) -> Result<(), SortError> {
    for key in plan.keys() {
        for (index, record) in records.iter().enumerate() {
            match record.get(key.field.as_str()) {
                None => {
                    return Err(SortError::KeyNotFound {
                        field: key.field.as_str().to_string(),
                        record: index,
                    })
                }
                Some(value) if value.kind() != key.kind => {
                    return Err(SortError::TypeMismatch {
                        field: key.field.as_str().to_string(),
                        expected: key.kind,
                        found: value.kind(),
                        record: index,
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

/// Cascade comparison: walk the key list in priority order and return the
/// first non-equal ordering, direction-adjusted. Pairs equal on every key
/// compare `Equal`.
pub(crate) fn compare_records<C: KeyComparator>(
    comparator: &C,
    plan: &SortPlan,
    a: &Record,
    b: &Record,
) -> Ordering {
    for key in plan.keys() {
        let ordering = match (a.get(key.field.as_str()), b.get(key.field.as_str())) {
            (Some(va), Some(vb)) => comparator.compare(key.kind, va, vb),
            // Unreachable once validate has passed; tie rather than panic.
            _ => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return plan.direction().apply(ordering);
        }
    }
    Ordering::Equal
}
