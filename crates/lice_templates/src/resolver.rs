//! Variable resolution.
//!
//! The final variables for one render are an ordered merge of layers:
//! computed defaults first, then any configured values, then the caller's
//! overrides. A later layer always wins over an earlier one.

use std::collections::BTreeMap;
use std::process::Command;

use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, warn};

use crate::manifest::LicenseTemplate;

/// Well-known variable names.
pub mod vars {
    pub const YEAR: &str = "year";
    pub const ORGANIZATION: &str = "organization";
    pub const PROJECT: &str = "project";
}

/// Mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet {
    values: BTreeMap<String, String>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Merge two layers; every value in `overrides` replaces the one in `base`.
pub fn merge(base: &VariableSet, overrides: &VariableSet) -> VariableSet {
    let mut merged = base.clone();
    for (name, value) in overrides.iter() {
        if let Some(previous) = merged.get(name) {
            debug!("Override for '{}' replaces '{}'", name, previous);
        }
        merged.insert(name, value);
    }
    merged
}

/// Resolves the variables for a render from defaults and overrides.
#[derive(Debug, Clone, Default)]
pub struct VariableResolver {
    defaults: VariableSet,
}

impl VariableResolver {
    /// Create a resolver over explicit defaults.
    pub fn new(defaults: VariableSet) -> Self {
        Self { defaults }
    }

    /// Create a resolver with defaults detected from the system.
    pub fn from_system() -> Self {
        Self::new(SystemDefaults::detect())
    }

    /// Layer values on top of the current defaults.
    pub fn with_layer(mut self, layer: &VariableSet) -> Self {
        self.defaults = merge(&self.defaults, layer);
        self
    }

    pub fn defaults(&self) -> &VariableSet {
        &self.defaults
    }

    /// Resolve the variables for a template.
    ///
    /// Extra overrides are kept even if the template never references them.
    pub fn resolve(&self, template: &LicenseTemplate, overrides: &VariableSet) -> VariableSet {
        let resolved = merge(&self.defaults, overrides);

        let unresolved: Vec<&str> = template
            .variables
            .iter()
            .map(|v| v.as_str())
            .filter(|v| !resolved.contains(v))
            .collect();
        if !unresolved.is_empty() {
            debug!(
                "Template '{}' has no value for: {}",
                template.id,
                unresolved.join(", ")
            );
        }

        resolved
    }
}

/// Defaults computed from the clock and the environment.
pub struct SystemDefaults;

impl SystemDefaults {
    /// Detect `year`, `organization` and `project`. Values that cannot be
    /// detected are left out.
    pub fn detect() -> VariableSet {
        let mut defaults = VariableSet::new();
        defaults.insert(vars::YEAR, Self::year());

        match Self::organization() {
            Some(org) => defaults.insert(vars::ORGANIZATION, org),
            None => warn!("Could not detect a default organization"),
        }

        if let Some(project) = Self::project() {
            defaults.insert(vars::PROJECT, project);
        }

        debug!("Detected defaults: {:?}", defaults);
        defaults
    }

    /// Current year from the local clock.
    pub fn year() -> String {
        chrono::Local::now().year().to_string()
    }

    /// `git config user.name`, falling back to the login user.
    pub fn organization() -> Option<String> {
        Self::git_user_name().or_else(Self::login_user)
    }

    /// Name of the current directory.
    pub fn project() -> Option<String> {
        std::env::current_dir()
            .ok()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    fn git_user_name() -> Option<String> {
        let output = Command::new("git")
            .args(["config", "user.name"])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        non_empty(String::from_utf8_lossy(&output.stdout).trim())
    }

    fn login_user() -> Option<String> {
        ["USER", "USERNAME", "LOGNAME"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .and_then(|name| non_empty(name.trim()))
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
