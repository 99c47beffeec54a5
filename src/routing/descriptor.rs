//! Compiled route descriptors.
//!
//! A `RouteDescriptor` is the immutable, checked form of a `RouteConfig`:
//! the url pattern is compiled once and the argument/default/capture-group
//! counts are known to line up.

use regex::Regex;

use crate::config::RouteConfig;
use crate::routing::error::RouteError;

/// One entry in the registry.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    key: String,
    base: String,
    dialog: String,
    url_pattern: Regex,
    pattern_template: String,
    argument_names: Vec<String>,
    defaults: Vec<String>,
}

impl RouteDescriptor {
    /// Compile a declaration, enforcing the descriptor invariants.
    pub fn compile(config: RouteConfig) -> Result<Self, RouteError> {
        for (field, value) in [
            ("key", &config.key),
            ("base", &config.base),
            ("dialog", &config.dialog),
            ("url", &config.url),
        ] {
            if value.trim().is_empty() {
                return Err(RouteError::EmptyField(field));
            }
        }

        let url_pattern = Regex::new(&config.url)?;

        // Group 0 is the whole match.
        let groups = url_pattern.captures_len() - 1;
        let arguments = config.argument_names.len();
        if groups < arguments {
            return Err(RouteError::TooFewCaptureGroups { groups, arguments });
        }
        if config.defaults.len() != arguments {
            return Err(RouteError::DefaultsLength {
                defaults: config.defaults.len(),
                arguments,
            });
        }

        Ok(Self {
            key: config.key,
            base: config.base,
            dialog: config.dialog,
            url_pattern,
            pattern_template: config.pattern,
            argument_names: config.argument_names,
            defaults: config.defaults,
        })
    }

    /// The declaration this descriptor was compiled from.
    pub fn to_config(&self) -> RouteConfig {
        RouteConfig {
            key: self.key.clone(),
            base: self.base.clone(),
            dialog: self.dialog.clone(),
            url: self.url_pattern.as_str().to_string(),
            pattern: self.pattern_template.clone(),
            argument_names: self.argument_names.clone(),
            defaults: self.defaults.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn dialog(&self) -> &str {
        &self.dialog
    }

    pub fn url_pattern(&self) -> &Regex {
        &self.url_pattern
    }

    pub fn pattern_template(&self) -> &str {
        &self.pattern_template
    }

    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Build a link by filling each `?` in the pattern template.
    ///
    /// Slot `i` takes `args[i]`, then `defaults[i]`, then the empty string.
    pub fn link<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut out = String::with_capacity(self.pattern_template.len());
        let mut slot = 0;

        for ch in self.pattern_template.chars() {
            if ch != '?' {
                out.push(ch);
                continue;
            }
            let value = args
                .get(slot)
                .map(|a| a.as_ref())
                .or_else(|| self.defaults.get(slot).map(String::as_str))
                .unwrap_or("");
            out.push_str(value);
            slot += 1;
        }

        out
    }
}

// Regex has no PartialEq; two descriptors are equal when compiled from equal
// declarations.
impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.base == other.base
            && self.dialog == other.dialog
            && self.url_pattern.as_str() == other.url_pattern.as_str()
            && self.pattern_template == other.pattern_template
            && self.argument_names == other.argument_names
            && self.defaults == other.defaults
    }
}

impl Eq for RouteDescriptor {}

impl TryFrom<RouteConfig> for RouteDescriptor {
    type Error = RouteError;

    fn try_from(config: RouteConfig) -> Result<Self, Self::Error> {
        Self::compile(config)
    }
}
