//! Record layouts: ordered field schemas with computed byte offsets.
//!
//! A `RecordLayout` is the immutable schema shared by every record written
//! through it. Field order is the wire order; each field's byte offset is
//! the prefix sum of the sizes of the fields before it, with no padding or
//! alignment inserted.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::record::field::{FieldSpec, FieldValue};
use crate::{engine_bail, engine_err};

// ===== LAYOUT OPTIONS =====

bitflags! {
    /// Policy flags for the lenient positional record builder
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayoutOptions: u8 {
        /// Missing trailing positional values take each field's default
        const ACCEPT_FEWER = 0b01;
        /// Extra positional values are dropped instead of rejected
        const ACCEPT_MORE = 0b10;
    }
}

// ===== RECORD =====

/// Decoded representation of one record: field name → value
pub type Record = FxHashMap<String, FieldValue>;

// ===== RECORD LAYOUT =====

/// Ordered, duplicate-free record schema with computed offsets.
///
/// Created once, immutable, typically shared via `Arc` by every buffer that
/// uses it.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    fields: Vec<FieldSpec>,
    /// Field name → field index
    field_names: FxHashMap<String, usize>,
    /// Byte offset per field (prefix sum of preceding sizes)
    field_offsets: Vec<usize>,
    /// Total record size in bytes
    size: usize,
    options: LayoutOptions,
}

impl RecordLayout {
    /// Build a layout from an ordered field list.
    ///
    /// Fails with `InvalidSchema` if `fields` is empty or contains an empty
    /// or duplicate name.
    pub fn new(fields: Vec<FieldSpec>, options: LayoutOptions) -> Result<Self> {
        if fields.is_empty() {
            engine_bail!(
                "nebula::RecordLayout",
                Error::InvalidSchema("layout must have at least one field".to_string())
            );
        }

        let mut field_names = FxHashMap::default();
        let mut field_offsets = Vec::with_capacity(fields.len());
        let mut offset = 0usize;

        for (index, field) in fields.iter().enumerate() {
            if field.name().is_empty() {
                engine_bail!(
                    "nebula::RecordLayout",
                    Error::InvalidSchema(format!("field {} has an empty name", index))
                );
            }
            if field_names.insert(field.name().to_string(), index).is_some() {
                engine_bail!(
                    "nebula::RecordLayout",
                    Error::InvalidSchema(format!("duplicate field name '{}'", field.name()))
                );
            }
            field_offsets.push(offset);
            offset += field.field_type().size_bytes();
        }

        Ok(Self {
            fields,
            field_names,
            field_offsets,
            size: offset,
            options,
        })
    }

    // ===== ACCESSORS =====

    /// Total record size in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field specs in wire order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Policy flags
    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Field index by name
    pub fn field_id(&self, name: &str) -> Option<usize> {
        self.field_names.get(name).copied()
    }

    /// Field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.field_names.get(name).map(|&id| &self.fields[id])
    }

    /// Byte offset of a field by index
    pub fn offset(&self, field_index: usize) -> Option<usize> {
        self.field_offsets.get(field_index).copied()
    }

    /// Byte offset of a field by name, failing with `UnknownField`
    pub fn offset_of(&self, name: &str) -> Result<usize> {
        self.field_id(name)
            .map(|id| self.field_offsets[id])
            .ok_or_else(|| {
                engine_err!(
                    "nebula::RecordLayout",
                    Error::UnknownField(name.to_string())
                )
            })
    }

    // ===== RECORD CONSTRUCTION / VALIDATION =====

    /// Build a record from positional values.
    ///
    /// Lenient per the layout's options: missing trailing values take each
    /// field's default when `ACCEPT_FEWER` is set, extra values are dropped
    /// when `ACCEPT_MORE` is set; otherwise the count mismatch fails with
    /// `ArityMismatch`. Every value is type-checked against its field.
    pub fn to_record(&self, values: &[FieldValue]) -> Result<Record> {
        if values.len() < self.fields.len() && !self.options.contains(LayoutOptions::ACCEPT_FEWER)
        {
            engine_bail!(
                "nebula::RecordLayout",
                Error::ArityMismatch {
                    expected: self.fields.len(),
                    found: values.len(),
                }
            );
        }
        if values.len() > self.fields.len() && !self.options.contains(LayoutOptions::ACCEPT_MORE) {
            engine_bail!(
                "nebula::RecordLayout",
                Error::ArityMismatch {
                    expected: self.fields.len(),
                    found: values.len(),
                }
            );
        }

        let mut record = Record::default();
        for (index, field) in self.fields.iter().enumerate() {
            let value = values
                .get(index)
                .copied()
                .unwrap_or_else(|| field.field_type().default_value());
            field
                .check_value(&value)
                .map_err(|e| engine_err!("nebula::RecordLayout", e))?;
            record.insert(field.name().to_string(), value);
        }
        Ok(record)
    }

    /// Validate a record for a whole-record write.
    ///
    /// Strict, unlike [`RecordLayout::to_record`]: the record must carry
    /// exactly one type-correct entry per field — no missing, no extra.
    pub fn validate_full(&self, record: &Record) -> Result<()> {
        for field in &self.fields {
            match record.get(field.name()) {
                Some(value) => field
                    .check_value(value)
                    .map_err(|e| engine_err!("nebula::RecordLayout", e))?,
                None => engine_bail!(
                    "nebula::RecordLayout",
                    Error::SchemaViolation(format!("missing field '{}'", field.name()))
                ),
            }
        }
        if record.len() != self.fields.len() {
            let extra = record
                .keys()
                .find(|name| !self.field_names.contains_key(*name))
                .map(|s| s.as_str())
                .unwrap_or("?");
            engine_bail!(
                "nebula::RecordLayout",
                Error::SchemaViolation(format!("extra field '{}'", extra))
            );
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
