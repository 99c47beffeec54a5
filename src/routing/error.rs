//! Routing error types.

/// Error compiling a route declaration into a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("invalid url pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("pattern has {groups} capture groups but {arguments} argument names")]
    TooFewCaptureGroups { groups: usize, arguments: usize },

    #[error("{defaults} defaults given for {arguments} argument names")]
    DefaultsLength { defaults: usize, arguments: usize },
}

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("route already registered: {0}")]
    DuplicateKey(String),

    #[error("route registered as `{key}` but its descriptor is keyed `{descriptor}`")]
    KeyMismatch { key: String, descriptor: String },

    #[error("route `{key}`: {source}")]
    Route {
        key: String,
        #[source]
        source: RouteError,
    },
}
