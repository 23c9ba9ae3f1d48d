//! Deterministic cascading multi-key sorting for in-memory records.
//!
//! `cascade-sort` orders flat sequences of scalars and sequences of
//! uniformly-shaped records. Record sorts follow a priority-ordered key
//! list: the first key decides, every later key only breaks ties left by
//! the keys before it. All operations are pure and deterministic:
//! identical inputs always produce identical outputs, and the caller's
//! input is never mutated.

pub mod filter;
pub mod record;
pub mod sort;
pub mod types;
