//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[] (routes.toml or builtin.rs)
//!     → descriptor.rs (compile regex, check invariants)
//!     → registry.rs (unique keys)
//!     → Freeze as immutable RouteRegistry
//!
//! Incoming URL fragment:
//!     → registry.rs (route lookup / resolve)
//!     → matcher.rs (apply pattern, bind arguments, apply defaults)
//!     → Return: RouteMatch or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Reload replaces the whole table (handle.rs)
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by key)

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod handle;
pub mod matcher;
pub mod registry;

pub use descriptor::RouteDescriptor;
pub use error::{RegistryError, RouteError};
pub use handle::RegistryHandle;
pub use matcher::RouteMatch;
pub use registry::RouteRegistry;
