//! License template definitions and the template store.
//!
//! The store is built once by [`TemplateStore::builtin`] and is read-only
//! afterwards. External templates are loaded per request through
//! [`TemplateStore::load_external`] and are never added to the store.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::builtin;
use crate::error::{LookupKind, TemplateError, TemplateResult};
use crate::language::{LanguageHeaderSpec, LANGUAGES};
use crate::loader::TemplateLoader;
use crate::placeholder;

/// Where a template came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Builtin,
    External(PathBuf),
}

/// A license template.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseTemplate {
    /// Unique identifier (e.g. "mit")
    pub id: String,
    /// Display name
    pub name: String,
    /// SPDX identifier, if known
    pub spdx: Option<String>,
    /// Raw body with placeholders
    pub body: String,
    /// Short notice used for source headers
    pub header: Option<String>,
    /// Placeholder names referenced by the body, in order of first appearance
    pub variables: Vec<String>,
    /// Template origin
    pub origin: Origin,
}

impl LicenseTemplate {
    /// Create a built-in template. The body is scanned for placeholders.
    pub fn new(id: impl Into<String>, name: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let variables = placeholder::names(&body);
        Self {
            id: id.into(),
            name: name.into(),
            spdx: None,
            body,
            header: None,
            variables,
            origin: Origin::Builtin,
        }
    }

    pub fn with_spdx(mut self, spdx: impl Into<String>) -> Self {
        self.spdx = Some(spdx.into());
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Placeholder names referenced by the header notice.
    pub fn header_variables(&self) -> Vec<String> {
        self.header
            .as_deref()
            .map(placeholder::names)
            .unwrap_or_default()
    }

    /// Check if the body references a variable.
    pub fn uses_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }

    pub fn is_external(&self) -> bool {
        matches!(self.origin, Origin::External(_))
    }
}

/// How a caller selects a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSelector {
    /// A built-in license identifier.
    Builtin(String),
    /// A template file on disk.
    External(PathBuf),
}

impl TemplateSelector {
    pub fn builtin(id: impl Into<String>) -> Self {
        TemplateSelector::Builtin(id.into())
    }

    pub fn external(path: impl Into<PathBuf>) -> Self {
        TemplateSelector::External(path.into())
    }
}

/// Read-only store of built-in license templates and language header specs.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    licenses: Vec<LicenseTemplate>,
    languages: Vec<LanguageHeaderSpec>,
}

impl TemplateStore {
    /// Build the store with every built-in license and language.
    pub fn builtin() -> Self {
        let store = Self {
            licenses: builtin::licenses(),
            languages: LANGUAGES.to_vec(),
        };
        debug!(
            "Template store ready: {} licenses, {} languages",
            store.licenses.len(),
            store.languages.len()
        );
        store
    }

    /// Get a license template by ID.
    pub fn get_template(&self, id: &str) -> TemplateResult<&LicenseTemplate> {
        self.licenses
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::not_found(LookupKind::License, id))
    }

    /// Get a language header spec by ID.
    pub fn get_language(&self, id: &str) -> TemplateResult<&LanguageHeaderSpec> {
        self.languages
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| TemplateError::not_found(LookupKind::Language, id))
    }

    /// Check if a language exists.
    pub fn has_language(&self, id: &str) -> bool {
        self.languages.iter().any(|l| l.id == id)
    }

    /// Load a template file. The result is not cached.
    pub fn load_external(&self, path: &Path) -> TemplateResult<LicenseTemplate> {
        TemplateLoader::new(path).load()
    }

    /// Resolve a selector to a template, borrowing built-ins.
    pub fn select(&self, selector: &TemplateSelector) -> TemplateResult<Cow<'_, LicenseTemplate>> {
        match selector {
            TemplateSelector::Builtin(id) => self.get_template(id).map(Cow::Borrowed),
            TemplateSelector::External(path) => self.load_external(path).map(Cow::Owned),
        }
    }

    /// License identifiers in declaration order.
    pub fn list_templates(&self) -> Vec<&str> {
        self.licenses.iter().map(|t| t.id.as_str()).collect()
    }

    /// Language identifiers in declaration order.
    pub fn list_languages(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.id).collect()
    }

    pub fn licenses(&self) -> impl Iterator<Item = &LicenseTemplate> {
        self.licenses.iter()
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageHeaderSpec> {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_builtin_template() {
        let store = TemplateStore::builtin();
        let mit = store.get_template("mit").unwrap();
        assert_eq!(mit.name, "MIT License");
        assert_eq!(mit.spdx.as_deref(), Some("MIT"));
        assert_eq!(mit.variables, vec!["year", "organization"]);
        assert_eq!(mit.origin, Origin::Builtin);
    }

    #[test]
    fn test_unknown_template() {
        let store = TemplateStore::builtin();
        let err = store.get_template("nonexistent-license").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::NotFound {
                kind: LookupKind::License,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_language() {
        let store = TemplateStore::builtin();
        let err = store.get_language("cobol").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::NotFound {
                kind: LookupKind::Language,
                ..
            }
        ));
        assert!(!store.has_language("cobol"));
        assert!(store.has_language("py"));
    }

    #[test]
    fn test_listing_order_is_declaration_order() {
        let store = TemplateStore::builtin();
        let ids = store.list_templates();
        assert_eq!(ids.first(), Some(&"bsd2"));
        assert_eq!(ids.last(), Some(&"wtfpl"));
        assert_eq!(store.list_languages().first(), Some(&"agda"));
    }

    #[test]
    fn test_header_variables() {
        let store = TemplateStore::builtin();
        let apache = store.get_template("apache").unwrap();
        assert_eq!(apache.header_variables(), vec!["year", "organization"]);
        let unlicense = store.get_template("unlicense").unwrap();
        assert!(unlicense.header.is_none());
        assert!(unlicense.header_variables().is_empty());
    }

    #[test]
    fn test_select_builtin_borrows() {
        let store = TemplateStore::builtin();
        let selected = store.select(&TemplateSelector::builtin("isc")).unwrap();
        assert!(matches!(selected, Cow::Borrowed(_)));
        assert_eq!(selected.id, "isc");
    }
}
