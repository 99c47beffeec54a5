//! Route registry and lookup.
//!
//! # Responsibilities
//! - Store compiled route descriptors by key
//! - Look up a route by key
//! - Resolve a URL fragment to the first matching route
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Duplicate keys are rejected, never silently overridden
//! - Ordered by key so resolution is deterministic
//! - Absence is `None`; the caller decides whether it is fatal

use std::collections::BTreeMap;

use crate::config::{RouteConfig, RoutesConfig};
use crate::observability::metrics;
use crate::routing::builtin;
use crate::routing::descriptor::RouteDescriptor;
use crate::routing::error::RegistryError;
use crate::routing::matcher::RouteMatch;

/// Named mapping from route key to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    routes: BTreeMap<String, RouteDescriptor>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and register every declaration; the first failure aborts.
    pub fn from_routes<I>(routes: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = RouteConfig>,
    {
        let mut registry = Self::new();
        for config in routes {
            let key = config.key.clone();
            let descriptor = RouteDescriptor::compile(config)
                .map_err(|source| RegistryError::Route { key: key.clone(), source })?;
            registry.register(key, descriptor)?;
        }
        Ok(registry)
    }

    /// Build from a loaded config, falling back to the built-in mock table
    /// when the config declares no routes.
    pub fn from_config(config: &RoutesConfig) -> Result<Self, RegistryError> {
        if config.routes.is_empty() {
            tracing::info!(
                table = builtin::MOCK_ROUTES_CONFIG,
                "No routes declared, using built-in table"
            );
            return Self::builtin();
        }
        Self::from_routes(config.routes.iter().cloned())
    }

    /// Registry holding the built-in mock routes.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_routes(builtin::mock_routes())
    }

    /// Insert a descriptor under a unique key.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        descriptor: RouteDescriptor,
    ) -> Result<(), RegistryError> {
        let key = key.into();

        if key != descriptor.key() {
            return Err(RegistryError::KeyMismatch {
                key,
                descriptor: descriptor.key().to_string(),
            });
        }
        if self.routes.contains_key(&key) {
            tracing::warn!(route = %key, "Rejected duplicate route registration");
            return Err(RegistryError::DuplicateKey(key));
        }

        tracing::debug!(
            route = %key,
            base = %descriptor.base(),
            dialog = %descriptor.dialog(),
            "Route registered"
        );
        self.routes.insert(key, descriptor);
        Ok(())
    }

    /// Look up a route by key.
    pub fn lookup(&self, key: &str) -> Option<&RouteDescriptor> {
        let found = self.routes.get(key);
        metrics::record_lookup(found.is_some());
        found
    }

    /// All descriptors, ordered by key.
    pub fn all(&self) -> impl Iterator<Item = &RouteDescriptor> + '_ {
        self.routes.values()
    }

    /// All route keys, ordered.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a URL fragment to the first matching route.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let matched = self.routes.values().find_map(|d| d.match_path(path));

        match &matched {
            Some(m) => {
                metrics::record_match(&m.key);
                tracing::debug!(path = %path, route = %m.key, "Route matched");
            }
            None => tracing::debug!(path = %path, "No route matched"),
        }
        matched
    }

    /// Build a link for a route from positional arguments.
    pub fn link<S: AsRef<str>>(&self, key: &str, args: &[S]) -> Option<String> {
        self.lookup(key).map(|d| d.link(args))
    }
}
