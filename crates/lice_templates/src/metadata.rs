//! Metadata listings over the template store.

use serde::Serialize;

use crate::error::{LookupKind, TemplateError, TemplateResult};
use crate::manifest::{LicenseTemplate, TemplateStore};
use crate::resolver::VariableSet;

/// An identifier with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// A template variable with its default, empty when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub default: String,
}

/// Machine-readable export of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub licenses: Vec<CatalogEntry>,
    pub languages: Vec<CatalogEntry>,
}

impl Metadata {
    pub fn to_json(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct MetadataReporter<'a> {
    store: &'a TemplateStore,
}

impl<'a> MetadataReporter<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    pub fn list_licenses(&self) -> Vec<CatalogEntry> {
        self.store
            .licenses()
            .map(|t| CatalogEntry {
                id: t.id.clone(),
                name: t.name.clone(),
            })
            .collect()
    }

    pub fn list_languages(&self) -> Vec<CatalogEntry> {
        self.store
            .languages()
            .map(|l| CatalogEntry {
                id: l.id.to_string(),
                name: l.name.to_string(),
            })
            .collect()
    }

    /// Variables referenced by a template, with the defaults that would apply.
    pub fn list_vars(
        &self,
        template: &LicenseTemplate,
        defaults: &VariableSet,
    ) -> Vec<VariableEntry> {
        entries(&template.variables, defaults)
    }

    /// Variables referenced by a template's header notice.
    pub fn list_header_vars(
        &self,
        template: &LicenseTemplate,
        defaults: &VariableSet,
    ) -> TemplateResult<Vec<VariableEntry>> {
        if template.header.is_none() {
            return Err(TemplateError::not_found(LookupKind::Header, &template.id));
        }
        Ok(entries(&template.header_variables(), defaults))
    }

    pub fn export(&self) -> Metadata {
        Metadata {
            licenses: self.list_licenses(),
            languages: self.list_languages(),
        }
    }
}

fn entries(names: &[String], defaults: &VariableSet) -> Vec<VariableEntry> {
    names
        .iter()
        .map(|name| VariableEntry {
            name: name.clone(),
            default: defaults.get(name).unwrap_or_default().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_licenses_unique_and_ordered() {
        let store = TemplateStore::builtin();
        let reporter = MetadataReporter::new(&store);

        let licenses = reporter.list_licenses();
        assert!(!licenses.is_empty());
        let ids: HashSet<_> = licenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), licenses.len());
        assert_eq!(licenses, reporter.list_licenses());
        assert_eq!(licenses[0].id, "bsd2");
    }

    #[test]
    fn test_languages_unique_and_ordered() {
        let store = TemplateStore::builtin();
        let reporter = MetadataReporter::new(&store);

        let languages = reporter.list_languages();
        assert!(!languages.is_empty());
        let ids: HashSet<_> = languages.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), languages.len());
        assert!(languages.iter().any(|e| e.id == "py" && e.name == "Python"));
    }

    #[test]
    fn test_list_vars_with_defaults() {
        let store = TemplateStore::builtin();
        let reporter = MetadataReporter::new(&store);
        let mit = store.get_template("mit").unwrap();
        let defaults = VariableSet::new().with("year", "2024");

        let entries = reporter.list_vars(mit, &defaults);
        assert_eq!(
            entries,
            vec![
                VariableEntry {
                    name: "year".to_string(),
                    default: "2024".to_string(),
                },
                VariableEntry {
                    name: "organization".to_string(),
                    default: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_list_header_vars() {
        let store = TemplateStore::builtin();
        let reporter = MetadataReporter::new(&store);
        let defaults = VariableSet::new().with("organization", "Test Org");

        let gpl3 = store.get_template("gpl3").unwrap();
        let names: Vec<_> = reporter
            .list_header_vars(gpl3, &defaults)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["project", "year", "organization"]);
        assert_ne!(names, gpl3.variables);

        let wtfpl = store.get_template("wtfpl").unwrap();
        assert!(matches!(
            reporter.list_header_vars(wtfpl, &defaults),
            Err(TemplateError::NotFound {
                kind: LookupKind::Header,
                ..
            })
        ));
    }

    #[test]
    fn test_export_json_keys() {
        let store = TemplateStore::builtin();
        let json = MetadataReporter::new(&store).export().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(!value["licenses"].as_array().unwrap().is_empty());
        assert!(!value["languages"].as_array().unwrap().is_empty());
        assert_eq!(value["licenses"][0]["id"], "bsd2");
    }
}
