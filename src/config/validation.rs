//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route declaration compiles (non-empty fields, valid regex)
//! - Check argument names, defaults and capture groups line up
//! - Detect duplicate route keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutesConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::RoutesConfig;
use crate::routing::{RouteDescriptor, RouteError};

/// A single semantic problem found in a config.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("route `{key}`: {source}")]
    Route {
        key: String,
        #[source]
        source: RouteError,
    },

    #[error("duplicate route key `{0}`")]
    DuplicateKey(String),

    #[error("invalid log level `{0}`")]
    LogLevel(String),
}

/// Validate a parsed config, collecting every problem.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in &config.routes {
        if !seen.insert(route.key.as_str()) {
            errors.push(ValidationError::DuplicateKey(route.key.clone()));
        }
        if let Err(source) = RouteDescriptor::compile(route.clone()) {
            errors.push(ValidationError::Route {
                key: route.key.clone(),
                source,
            });
        }
    }

    if config
        .observability
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .is_err()
    {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
