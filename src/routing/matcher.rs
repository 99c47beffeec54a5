//! Route matching logic.
//!
//! # Responsibilities
//! - Apply a descriptor's url pattern to a URL fragment
//! - Bind capture groups to argument names by position
//! - Substitute defaults for empty or absent captures
//!
//! # Design Decisions
//! - Patterns are unanchored unless the pattern itself anchors
//! - Capture group `i + 1` binds `argument_names[i]`; extra groups are ignored
//! - An empty capture is treated the same as an absent one

use serde::Serialize;

use crate::routing::descriptor::RouteDescriptor;

/// Outcome of a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Key of the matched route.
    pub key: String,

    /// Base context of the matched route.
    pub base: String,

    /// Dialog the router should invoke.
    pub dialog: String,

    /// `(name, value)` pairs in argument order, defaults applied.
    pub arguments: Vec<(String, String)>,
}

impl RouteMatch {
    /// Value bound to an argument name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Argument values in order, as passed to `RouteDescriptor::link`.
    pub fn values(&self) -> Vec<&str> {
        self.arguments.iter().map(|(_, v)| v.as_str()).collect()
    }
}

impl RouteDescriptor {
    /// Match a URL fragment against this route.
    ///
    /// Returns `None` when the pattern does not match.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let captures = self.url_pattern().captures(path)?;

        let arguments = self
            .argument_names()
            .iter()
            .zip(self.defaults())
            .enumerate()
            .map(|(i, (name, default))| {
                let value = captures
                    .get(i + 1)
                    .map(|m| m.as_str())
                    .filter(|v| !v.is_empty())
                    .unwrap_or(default);
                (name.clone(), value.to_string())
            })
            .collect();

        Some(RouteMatch {
            key: self.key().to_string(),
            base: self.base().to_string(),
            dialog: self.dialog().to_string(),
            arguments,
        })
    }

    /// True if the pattern matches the fragment.
    pub fn matches(&self, path: &str) -> bool {
        self.url_pattern().is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RouteConfig;
    use crate::routing::RouteDescriptor;

    fn descriptor() -> RouteDescriptor {
        RouteDescriptor::compile(RouteConfig {
            key: "profile".into(),
            base: "user".into(),
            dialog: "ProfileDialog".into(),
            url: r"^profile(/[^/]*)?(/[^/]*)?(/extra)?$".into(),
            pattern: "profile??".into(),
            argument_names: vec!["section".into(), "tab".into()],
            defaults: vec!["/details".into(), "/main".into()],
        })
        .unwrap()
    }

    #[test]
    fn test_binds_captures_by_position() {
        let m = descriptor().match_path("profile/security/keys").unwrap();
        assert_eq!(m.key, "profile");
        assert_eq!(m.dialog, "ProfileDialog");
        assert_eq!(m.get("section"), Some("/security"));
        assert_eq!(m.get("tab"), Some("/keys"));
        assert_eq!(m.values(), vec!["/security", "/keys"]);
    }

    #[test]
    fn test_absent_and_empty_use_defaults() {
        let m = descriptor().match_path("profile").unwrap();
        assert_eq!(m.get("section"), Some("/details"));
        assert_eq!(m.get("tab"), Some("/main"));
    }

    #[test]
    fn test_extra_groups_not_bound() {
        let m = descriptor().match_path("profile/a/b/extra").unwrap();
        assert_eq!(m.arguments.len(), 2);
        assert_eq!(m.get("extra"), None);
    }

    #[test]
    fn test_no_match() {
        let d = descriptor();
        assert!(d.match_path("settings").is_none());
        assert!(!d.matches("profil"));
    }
}
