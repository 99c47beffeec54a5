//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registry, config loader and watcher produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (lookup and match counters)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → whatever `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted strings, for route keys and paths
//! - Metrics go through the `metrics` facade; without a recorder they are no-ops

pub mod logging;
pub mod metrics;
