//! Named resource ownership and bulk lifecycle teardown

mod named_registry;

pub use named_registry::{Disposable, NamedRegistry};
