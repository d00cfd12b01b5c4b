//! Error types for the Nebula resource engine
//!
//! This module defines the error taxonomy used throughout the engine:
//! schema/validation errors, buffer misuse, pool lifecycle errors and
//! registry lookup misses. All failures are local and synchronous — nothing
//! here is retried internally.

use std::fmt;

use crate::record::FieldType;

/// Result type for Nebula resource engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula resource engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Layout construction rejected (empty schema, empty or duplicate field name)
    InvalidSchema(String),

    /// Field name not present in the layout
    UnknownField(String),

    /// Value's type does not match the field's declared type
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },

    /// Positional value count incompatible with the layout's field count
    ArityMismatch { expected: usize, found: usize },

    /// Whole-record validation failed (missing or extra entries)
    SchemaViolation(String),

    /// Buffer capacity must be at least one record
    InvalidCapacity,

    /// Record index outside `[0, capacity)`
    IndexOutOfRange { index: usize, capacity: usize },

    /// Operation on a buffer whose block has been released
    UseAfterDispose,

    /// No free slot id left in the pool
    PoolExhausted { capacity: u32 },

    /// Slot id returned to the pool while already free
    DoubleRelease { slot: u32 },

    /// Required named resource missing from the registry
    RequiredResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSchema(msg) => write!(f, "Invalid schema: {}", msg),
            Error::UnknownField(name) => write!(f, "Unknown field '{}'", name),
            Error::TypeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Type mismatch on field '{}': expected {}, found {}",
                field, expected, found
            ),
            Error::ArityMismatch { expected, found } => write!(
                f,
                "Arity mismatch: layout has {} fields, {} values given",
                expected, found
            ),
            Error::SchemaViolation(msg) => write!(f, "Schema violation: {}", msg),
            Error::InvalidCapacity => write!(f, "Capacity must be at least 1"),
            Error::IndexOutOfRange { index, capacity } => write!(
                f,
                "Record index {} out of range (capacity: {})",
                index, capacity
            ),
            Error::UseAfterDispose => write!(f, "Buffer used after dispose"),
            Error::PoolExhausted { capacity } => {
                write!(f, "Slot pool exhausted ({} slots)", capacity)
            }
            Error::DoubleRelease { slot } => {
                write!(f, "Slot {} released while already free", slot)
            }
            Error::RequiredResource(name) => {
                write!(f, "Required resource '{}' not found", name)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== LOG-AND-RETURN MACROS =====

/// Build an error value, logging it at ERROR level on the way out.
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("nebula::RecordBuffer", Error::UseAfterDispose));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::engine_error!($source, "{}", err);
        err
    }};
}

/// Log an error at ERROR level and return it from the enclosing function.
///
/// # Example
///
/// ```ignore
/// if fields.is_empty() {
///     engine_bail!("nebula::RecordLayout",
///         Error::InvalidSchema("layout must have at least one field".to_string()));
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::engine_err!($source, $err))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
