pub mod record;
pub mod value;

pub use crate::types::fields::FieldName;
pub use record::{Record, RecordError};
pub use value::{FieldValue, ValueKind};
