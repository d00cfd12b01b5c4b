//! Record buffers: fixed-capacity record arrays over one contiguous block.
//!
//! A `RecordBuffer` owns a single zero-initialized block of
//! `capacity × layout.size()` bytes and addresses records through its
//! layout's offsets. The block is stored as native-endian `f32` components
//! so its byte view (`as_bytes`) can be copied verbatim into a GPU-side
//! buffer.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::record::field::{FieldValue, COMPONENT_SIZE};
use crate::record::layout::{Record, RecordLayout};
use crate::registry::Disposable;
use crate::{engine_bail, engine_err, engine_trace};

/// Fixed-capacity array of records over one contiguous memory block.
///
/// Single-threaded: concurrent mutation from multiple threads must be
/// serialized by the caller. The buffer exclusively owns its block until
/// [`RecordBuffer::dispose`] releases it; any use after that fails with
/// `UseAfterDispose`.
#[derive(Debug)]
pub struct RecordBuffer {
    layout: Arc<RecordLayout>,
    capacity: usize,
    /// Record stride in f32 components
    stride: usize,
    /// Backing block; None once disposed
    block: Option<Vec<f32>>,
}

impl RecordBuffer {
    /// Allocate a zero-initialized buffer for `capacity` records.
    ///
    /// Fails with `InvalidCapacity` if `capacity` is 0.
    pub fn new(layout: Arc<RecordLayout>, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            engine_bail!("nebula::RecordBuffer", Error::InvalidCapacity);
        }
        let stride = layout.size() / COMPONENT_SIZE;
        engine_trace!(
            "nebula::RecordBuffer",
            "allocating {} records x {} bytes",
            capacity,
            layout.size()
        );
        Ok(Self {
            layout,
            capacity,
            stride,
            block: Some(vec![0.0; capacity * stride]),
        })
    }

    // ===== ACCESSORS =====

    /// Maximum record count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of one record in bytes
    pub fn record_size(&self) -> usize {
        self.layout.size()
    }

    /// Total block size in bytes
    pub fn byte_len(&self) -> usize {
        self.capacity * self.layout.size()
    }

    /// The layout records are addressed through
    pub fn layout(&self) -> &Arc<RecordLayout> {
        &self.layout
    }

    /// Whether the block has been released
    pub fn is_disposed(&self) -> bool {
        self.block.is_none()
    }

    /// Raw byte view of the whole block, for hand-off to an external
    /// consumer (e.g. a GPU buffer upload). Native-endian f32 components.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.block()
            .map(|block| bytemuck::cast_slice(block))
    }

    // ===== RECORD ACCESS =====

    /// Decode the record at `index` into a name → value map.
    ///
    /// Pure read; fails with `IndexOutOfRange` or `UseAfterDispose`.
    pub fn get(&self, index: usize) -> Result<Record> {
        let base = self.record_base(index)?;
        let block = self.block()?;
        let mut record = Record::default();
        for (field_index, field) in self.layout.fields().iter().enumerate() {
            let start = base + self.layout.offset(field_index).unwrap_or(0) / COMPONENT_SIZE;
            let end = start + field.field_type().component_count();
            record.insert(
                field.name().to_string(),
                field.field_type().decode(&block[start..end]),
            );
        }
        Ok(record)
    }

    /// Write a whole record at `index`.
    ///
    /// The record is validated against the layout first
    /// ([`RecordLayout::validate_full`]); on any validation failure the
    /// block is left untouched.
    pub fn set(&mut self, index: usize, record: &Record) -> Result<()> {
        let base = self.record_base(index)?;
        self.layout.validate_full(record)?;
        let layout = Arc::clone(&self.layout);
        let block = self.block_mut()?;
        for (field_index, field) in layout.fields().iter().enumerate() {
            // validate_full guarantees presence and type
            let value = &record[field.name()];
            let start = base + layout.offset(field_index).unwrap_or(0) / COMPONENT_SIZE;
            let end = start + field.field_type().component_count();
            field.field_type().encode(value, &mut block[start..end]);
        }
        Ok(())
    }

    /// Write one field of one record, leaving every other byte untouched.
    ///
    /// This is the narrow-write path for high-frequency per-field updates
    /// (e.g. one animated attribute across many records).
    pub fn set_field(&mut self, index: usize, name: &str, value: FieldValue) -> Result<()> {
        let base = self.record_base(index)?;
        let field = self
            .layout
            .field(name)
            .cloned()
            .ok_or_else(|| {
                engine_err!(
                    "nebula::RecordBuffer",
                    Error::UnknownField(name.to_string())
                )
            })?;
        field
            .check_value(&value)
            .map_err(|e| engine_err!("nebula::RecordBuffer", e))?;
        let offset = self.layout.offset_of(name)? / COMPONENT_SIZE;
        let block = self.block_mut()?;
        let start = base + offset;
        let end = start + field.field_type().component_count();
        field.field_type().encode(&value, &mut block[start..end]);
        Ok(())
    }

    /// Zero-fill the record at `index`, returning its previous value
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        let previous = self.get(index)?;
        let base = self.record_base(index)?;
        let stride = self.stride;
        let block = self.block_mut()?;
        block[base..base + stride].fill(0.0);
        Ok(previous)
    }

    // ===== LIFECYCLE =====

    /// Release the backing block.
    ///
    /// Exactly once: a second dispose, like any other operation on a
    /// disposed buffer, fails with `UseAfterDispose`.
    pub fn dispose(&mut self) -> Result<()> {
        if self.block.take().is_none() {
            engine_bail!("nebula::RecordBuffer", Error::UseAfterDispose);
        }
        engine_trace!(
            "nebula::RecordBuffer",
            "released block of {} bytes",
            self.byte_len()
        );
        Ok(())
    }

    // ===== INTERNAL =====

    fn block(&self) -> Result<&[f32]> {
        self.block
            .as_deref()
            .ok_or_else(|| engine_err!("nebula::RecordBuffer", Error::UseAfterDispose))
    }

    fn block_mut(&mut self) -> Result<&mut [f32]> {
        match self.block.as_deref_mut() {
            Some(block) => Ok(block),
            None => Err(engine_err!("nebula::RecordBuffer", Error::UseAfterDispose)),
        }
    }

    /// Bounds-check `index` and return the record's base component index
    fn record_base(&self, index: usize) -> Result<usize> {
        if index >= self.capacity {
            engine_bail!(
                "nebula::RecordBuffer",
                Error::IndexOutOfRange {
                    index,
                    capacity: self.capacity,
                }
            );
        }
        Ok(index * self.stride)
    }
}

impl Disposable for RecordBuffer {
    fn dispose(&mut self) -> Result<()> {
        RecordBuffer::dispose(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
