//! Built-in route tables, retrievable by their well-known name.

use crate::config::RouteConfig;

/// Well-known name of the mock UI route table.
pub const MOCK_ROUTES_CONFIG: &str = "config/routes/MockRoutesConfig";

/// Url pattern of the terms-of-use route: a realm segment and an optional
/// `&`-prefixed parameter tail. A parameter tail requires a realm; only the
/// bare `registerTerms` matches without one and falls back to the defaults.
pub const TERMS_OF_USE_URL: &str = r"registerTerms(?:(/[^&]*)(&.+)?)?$";

/// Declarations of the mock UI routes.
pub fn mock_routes() -> Vec<RouteConfig> {
    vec![RouteConfig {
        key: "termsOfUse".to_string(),
        base: "selfRegistration".to_string(),
        dialog: "org/forgerock/mock/ui/user/TermsOfUseDialog".to_string(),
        url: TERMS_OF_USE_URL.to_string(),
        pattern: "registerTerms??".to_string(),
        argument_names: vec!["realm".to_string(), "additionalParameters".to_string()],
        defaults: vec!["/".to_string(), String::new()],
    }]
}

/// Look up a built-in route table by name.
pub fn by_name(name: &str) -> Option<Vec<RouteConfig>> {
    match name {
        MOCK_ROUTES_CONFIG => Some(mock_routes()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name(MOCK_ROUTES_CONFIG), Some(mock_routes()));
        assert!(by_name("config/routes/AdminRoutesConfig").is_none());
    }
}
