//! Typed registry of named UI routes.
//!
//! Routes are declared (in `routes.toml` or the built-in table), compiled
//! once into immutable [`RouteDescriptor`]s, and served to an external
//! router through [`RouteRegistry`] lookups and path resolution.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RoutesConfig;
pub use routing::{RegistryError, RegistryHandle, RouteDescriptor, RouteMatch, RouteRegistry};
