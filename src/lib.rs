/*!
# Nebula Resource Engine

Core resource primitives for the Nebula rendering engine.

This crate provides the schema-driven record machinery the engine's resource
layer is built on: named, typed fields mapped onto byte offsets inside one
contiguous block, plus the slot-pool and named-registry patterns used to hand
out and tear down finite GPU-side resources.

## Architecture

- **RecordLayout**: schema describing field order, types and byte offsets
- **RecordBuffer**: fixed-capacity array of records over one contiguous block
- **SlotPool**: bounded allocator of recyclable integer slot ids
- **NamedRegistry**: owning name→resource map with bulk disposal

Renderers consume a `RecordBuffer`'s raw byte view directly (e.g. copied
verbatim into a GPU buffer); the layout guarantees a stable, tightly packed
binary format.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod pool;
pub mod record;
pub mod registry;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (global logger host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Record sub-module: schemas, layouts, buffers
    pub mod record {
        pub use crate::record::*;
    }

    // Pool sub-module: slot allocation
    pub mod pool {
        pub use crate::pool::*;
    }

    // Registry sub-module: named resource ownership
    pub mod registry {
        pub use crate::registry::*;
    }
}

// Re-export math library at crate root
pub use glam;
