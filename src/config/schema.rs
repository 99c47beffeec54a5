//! Configuration schema definitions.
//!
//! This module defines the route file structure. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration for the route registry.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route declarations. Empty means "use the built-in table".
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Declaration of a single route.
///
/// The `url` pattern is kept as source text here; it is compiled into a
/// `RouteDescriptor` when the registry is built.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Unique route key (e.g. "termsOfUse").
    pub key: String,

    /// Logical context the route belongs to.
    pub base: String,

    /// Identifier of the dialog the router invokes.
    pub dialog: String,

    /// Regular expression matched against URL fragments.
    pub url: String,

    /// Human-readable template; each `?` is one argument slot.
    #[serde(default)]
    pub pattern: String,

    /// Names bound to the capture groups, by position.
    #[serde(default)]
    pub argument_names: Vec<String>,

    /// Default value per argument, by position.
    #[serde(default)]
    pub defaults: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
