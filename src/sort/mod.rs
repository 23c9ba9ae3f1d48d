pub mod comparator;
pub mod plan;
pub mod primitives;

use std::cmp::Ordering;

use crate::record::Record;
pub use comparator::{KeyComparator, TypedKeyComparator};
pub use plan::{Direction, SortError, SortKey, SortPlan};
pub use primitives::{sort_primitives_ascending, sort_primitives_descending};

pub struct RecordSorter<C> {
	comparator: C,
}

impl Default for RecordSorter<TypedKeyComparator> {
	fn default() -> Self {
		Self {
			comparator: TypedKeyComparator,
		}
	}
}

impl<C> RecordSorter<C>
where
	C: KeyComparator,
{
	pub fn new(comparator: C) -> Self {
		Self { comparator }
	}

	/// Execute `plan` over `records` and return a new, independently owned
	/// sequence. The input is only read, never reordered.
	pub fn sort(&self, records: &[Record], plan: &SortPlan) -> Result<Vec<Record>, SortError> {
		// 0. Nothing to order: no records, or no keys to order by.
		if records.is_empty() || plan.keys().is_empty() {
			return Ok(records.to_vec());
		}

		// 1. Validation phase
		// Every key on every record, with the declared kind.
		comparator::validate(records, plan)?;

		// 2. Ordering phase
		// One stable sort with the cascade comparator; records equal on
		// all keys keep their input order.
		let mut sorted = records.to_vec();
		sorted.sort_by(|a, b| comparator::compare_records(&self.comparator, plan, a, b));

		debug_assert_eq!(sorted.len(), records.len());
		debug_assert!(sorted.windows(2).all(|w| {
			comparator::compare_records(&self.comparator, plan, &w[0], &w[1])
				!= Ordering::Greater
		}));

		Ok(sorted)
	}
}

/// Sort records ascending by `keys`: primary key first, later keys break
/// ties among records equal on all earlier keys.
///
/// Key kinds are inferred from the first record, then enforced across the
/// whole input. Empty input returns empty without probing anything.
pub fn sort_records_ascending(
	records: &[Record],
	keys: &[&str],
) -> Result<Vec<Record>, SortError> {
	let plan = SortPlan::infer(records, keys, Direction::Ascending)?;
	RecordSorter::default().sort(records, &plan)
}

/// Descending counterpart of [`sort_records_ascending`].
pub fn sort_records_descending(
	records: &[Record],
	keys: &[&str],
) -> Result<Vec<Record>, SortError> {
	let plan = SortPlan::infer(records, keys, Direction::Descending)?;
	RecordSorter::default().sort(records, &plan)
}
