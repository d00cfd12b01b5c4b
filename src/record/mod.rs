//! Schema-driven record machinery
//!
//! Callers describe a schema with [`FieldSpec`]s, build a [`RecordLayout`],
//! allocate a [`RecordBuffer`] sized to a capacity, then read and write
//! records by index.

mod buffer;
mod field;
mod layout;

pub use buffer::RecordBuffer;
pub use field::{FieldSpec, FieldType, FieldValue, COMPONENT_SIZE};
pub use layout::{LayoutOptions, Record, RecordLayout};
