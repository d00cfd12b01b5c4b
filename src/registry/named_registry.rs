//! Named resource registry: owning name → resource map with bulk teardown.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::{engine_err, engine_trace, engine_warn};

// ===== DISPOSABLE =====

/// A resource with an explicit dispose operation.
///
/// Disposal releases whatever the resource owns (a memory block, a GPU
/// object, a nested registry). It is called at most once per resource by
/// [`NamedRegistry::dispose`].
pub trait Disposable {
    fn dispose(&mut self) -> Result<()>;
}

// ===== NAMED REGISTRY =====

/// Owning name → resource map.
///
/// Every resource reachable through a live mapping belongs to the registry
/// until it is removed ([`NamedRegistry::remove_by_name`], ownership back to
/// the caller) or swept by [`NamedRegistry::dispose`].
///
/// The map itself is not internally synchronized; registration from a
/// loader thread while another thread iterates must be serialized by the
/// caller, like the rest of the resource layer.
pub struct NamedRegistry<R: Disposable> {
    resources: FxHashMap<String, R>,
}

impl<R: Disposable> NamedRegistry<R> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            resources: FxHashMap::default(),
        }
    }

    /// Store a resource under `name`, taking ownership.
    ///
    /// Returns the resource previously tracked under that name, if any —
    /// the caller decides what happens to it. `put(name, None)` clears the
    /// mapping without tracking anything, so later lookups miss.
    pub fn put(&mut self, name: &str, resource: Option<R>) -> Option<R> {
        match resource {
            Some(resource) => self.resources.insert(name.to_string(), resource),
            None => self.resources.remove(name),
        }
    }

    /// Look up a resource by name
    pub fn get(&self, name: &str) -> Option<&R> {
        self.resources.get(name)
    }

    /// Look up a resource by name, mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut R> {
        self.resources.get_mut(name)
    }

    /// Look up a resource that must be present.
    ///
    /// Fails with `RequiredResource` on a miss.
    pub fn get_required(&self, name: &str) -> Result<&R> {
        self.resources.get(name).ok_or_else(|| {
            engine_err!(
                "nebula::NamedRegistry",
                Error::RequiredResource(name.to_string())
            )
        })
    }

    /// Remove a mapping and stop tracking the resource.
    ///
    /// The resource is NOT disposed; ownership transfers back to the caller.
    pub fn remove_by_name(&mut self, name: &str) -> Option<R> {
        self.resources.remove(name)
    }

    /// Whether a resource is tracked under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Number of tracked resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no resources are tracked
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Names of all tracked resources
    pub fn names(&self) -> Vec<&str> {
        self.resources.keys().map(|k| k.as_str()).collect()
    }

    /// Dispose every tracked resource and empty the registry.
    ///
    /// Best-effort sweep: each resource is disposed exactly once; a single
    /// resource's failure is logged and does not stop the rest of the
    /// teardown. The registry is empty and reusable afterwards.
    pub fn dispose(&mut self) {
        let count = self.resources.len();
        for (name, mut resource) in self.resources.drain() {
            if let Err(e) = resource.dispose() {
                engine_warn!(
                    "nebula::NamedRegistry",
                    "failed to dispose '{}': {}",
                    name,
                    e
                );
            }
        }
        engine_trace!("nebula::NamedRegistry", "disposed {} resources", count);
    }
}

impl<R: Disposable> Default for NamedRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registries nest: a registry of registries sweeps recursively
impl<R: Disposable> Disposable for NamedRegistry<R> {
    fn dispose(&mut self) -> Result<()> {
        NamedRegistry::dispose(self);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "named_registry_tests.rs"]
mod tests;
