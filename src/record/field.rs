//! Field types, values and specs for record schemas.
//!
//! A field is one named, typed component of a record (e.g. a 2D position).
//! All field types are small float aggregates, stored tightly packed as
//! native-endian `f32` components in a fixed x, y, \[z\], \[w\] order. No
//! padding or alignment is ever inserted: a consumer computing offsets from
//! field order and sizes alone (e.g. a renderer describing vertex
//! attributes) agrees with the engine byte for byte.

use std::fmt;

use glam::{Vec2, Vec3, Vec4};

use crate::error::{Error, Result};

/// Size of one field component in bytes
pub const COMPONENT_SIZE: usize = 4;

// ===== FIELD TYPE =====

/// Data type of a field within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl FieldType {
    /// Number of f32 components (1 to 4)
    pub fn component_count(&self) -> usize {
        match self {
            FieldType::Float => 1,
            FieldType::Vec2 => 2,
            FieldType::Vec3 => 3,
            FieldType::Vec4 => 4,
        }
    }

    /// Size in bytes (tightly packed, no padding)
    pub fn size_bytes(&self) -> usize {
        self.component_count() * COMPONENT_SIZE
    }

    /// Null-replacement value used when a positional value is missing
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldType::Float => FieldValue::Float(0.0),
            FieldType::Vec2 => FieldValue::Vec2(Vec2::ZERO),
            FieldType::Vec3 => FieldValue::Vec3(Vec3::ZERO),
            FieldType::Vec4 => FieldValue::Vec4(Vec4::ZERO),
        }
    }

    /// Encode a value's components into `out` in x, y, z, w order.
    ///
    /// `out` must be exactly `component_count()` floats and `value` must
    /// already be type-checked against this type (callers go through
    /// `FieldSpec::check_value` first).
    pub fn encode(&self, value: &FieldValue, out: &mut [f32]) {
        debug_assert_eq!(value.field_type(), *self, "encode of unchecked value");
        debug_assert_eq!(out.len(), self.component_count());
        match value {
            FieldValue::Float(v) => out[0] = *v,
            FieldValue::Vec2(v) => out.copy_from_slice(&v.to_array()),
            FieldValue::Vec3(v) => out.copy_from_slice(&v.to_array()),
            FieldValue::Vec4(v) => out.copy_from_slice(&v.to_array()),
        }
    }

    /// Decode a value from `src` (exactly `component_count()` floats)
    pub fn decode(&self, src: &[f32]) -> FieldValue {
        debug_assert_eq!(src.len(), self.component_count());
        match self {
            FieldType::Float => FieldValue::Float(src[0]),
            FieldType::Vec2 => FieldValue::Vec2(Vec2::from_slice(src)),
            FieldType::Vec3 => FieldValue::Vec3(Vec3::from_slice(src)),
            FieldType::Vec4 => FieldValue::Vec4(Vec4::from_slice(src)),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Float => "Float",
            FieldType::Vec2 => "Vec2",
            FieldType::Vec3 => "Vec3",
            FieldType::Vec4 => "Vec4",
        };
        write!(f, "{}", name)
    }
}

// ===== FIELD VALUE =====

/// A single typed field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl FieldValue {
    /// The type this value belongs to
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Vec2(_) => FieldType::Vec2,
            FieldValue::Vec3(_) => FieldType::Vec3,
            FieldValue::Vec4(_) => FieldType::Vec4,
        }
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

impl From<Vec2> for FieldValue {
    fn from(v: Vec2) -> Self {
        FieldValue::Vec2(v)
    }
}

impl From<Vec3> for FieldValue {
    fn from(v: Vec3) -> Self {
        FieldValue::Vec3(v)
    }
}

impl From<Vec4> for FieldValue {
    fn from(v: Vec4) -> Self {
        FieldValue::Vec4(v)
    }
}

// ===== FIELD SPEC =====

/// A named field in a record schema
///
/// Names are case-sensitive and must be non-empty and unique within their
/// owning layout (enforced by `RecordLayout::new`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    field_type: FieldType,
}

impl FieldSpec {
    /// Create a field spec
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field type
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Check that a value is assignable to this field
    pub fn check_value(&self, value: &FieldValue) -> Result<()> {
        if value.field_type() != self.field_type {
            return Err(Error::TypeMismatch {
                field: self.name.clone(),
                expected: self.field_type,
                found: value.field_type(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
