//! Live, swappable route table.
//!
//! Readers load an `Arc<RouteRegistry>` snapshot without locking; a reload
//! publishes a whole new table. A snapshot stays valid for as long as the
//! reader holds it, even after a swap.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::registry::RouteRegistry;

/// Shared handle to the current route table.
#[derive(Debug)]
pub struct RegistryHandle {
    current: ArcSwap<RouteRegistry>,
}

impl RegistryHandle {
    pub fn new(registry: RouteRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Snapshot of the current table.
    pub fn load(&self) -> Arc<RouteRegistry> {
        self.current.load_full()
    }

    /// Publish a new table, returning the one it replaced.
    pub fn replace(&self, registry: RouteRegistry) -> Arc<RouteRegistry> {
        let routes = registry.len();
        let previous = self.current.swap(Arc::new(registry));
        tracing::info!(
            previous_routes = previous.len(),
            routes,
            "Route table replaced"
        );
        previous
    }
}
