//! External template loading.
//!
//! Two formats are accepted:
//!
//! - plain text: the whole file is the body, the id is the file stem;
//! - YAML manifest (`.yaml`/`.yml`) with `id`, `name`, `body` and optional
//!   `spdx` and `header` fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::{LicenseTemplate, Origin};
use crate::placeholder;

/// YAML manifest for an external template.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalManifest {
    id: String,
    name: String,
    body: String,
    #[serde(default)]
    spdx: Option<String>,
    #[serde(default)]
    header: Option<String>,
}

/// Loader for a single external template file.
pub struct TemplateLoader {
    path: PathBuf,
}

impl TemplateLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and validate the template.
    pub fn load(&self) -> TemplateResult<LicenseTemplate> {
        debug!("Loading external template from {:?}", self.path);
        let content = fs::read_to_string(&self.path).map_err(|source| TemplateError::Io {
            path: self.path.clone(),
            source,
        })?;

        let template = if self.is_manifest() {
            self.parse_manifest(&content)?
        } else {
            self.text_template(content)
        };

        self.check_placeholders(&template.body)?;
        if let Some(header) = &template.header {
            self.check_placeholders(header)?;
        }

        Ok(template.with_origin(Origin::External(self.path.clone())))
    }

    fn is_manifest(&self) -> bool {
        matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }

    fn parse_manifest(&self, content: &str) -> TemplateResult<LicenseTemplate> {
        let manifest: ExternalManifest =
            serde_yaml::from_str(content).map_err(|e| self.parse_error(e.to_string()))?;

        if manifest.id.trim().is_empty() {
            return Err(self.parse_error("template id must not be empty"));
        }

        let mut template = LicenseTemplate::new(manifest.id, manifest.name, manifest.body);
        if let Some(spdx) = manifest.spdx {
            template = template.with_spdx(spdx);
        }
        if let Some(header) = manifest.header {
            template = template.with_header(header);
        }
        Ok(template)
    }

    fn text_template(&self, content: String) -> LicenseTemplate {
        let id = file_label(self.path.file_stem());
        let name = file_label(self.path.file_name());
        LicenseTemplate::new(id, name, content)
    }

    fn check_placeholders(&self, body: &str) -> TemplateResult<()> {
        match placeholder::find_malformed(body) {
            Some(malformed) => Err(self.parse_error(malformed.to_string())),
            None => Ok(()),
        }
    }

    fn parse_error(&self, message: impl Into<String>) -> TemplateError {
        TemplateError::Parse {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}

fn file_label(part: Option<&std::ffi::OsStr>) -> String {
    part.map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".to_string())
}

/// Load an external template.
pub fn load_file_template(path: &Path) -> TemplateResult<LicenseTemplate> {
    TemplateLoader::new(path).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_plain_text_template() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("company.txt");
        fs::write(&path, "Copyright {{ year }} {{ organization }}. Internal use only.\n").unwrap();

        let template = load_file_template(&path).unwrap();
        assert_eq!(template.id, "company");
        assert_eq!(template.name, "company.txt");
        assert_eq!(template.variables, vec!["year", "organization"]);
        assert!(template.is_external());
    }

    #[test]
    fn test_yaml_manifest_template() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("acme.yaml");
        fs::write(
            &path,
            r#"
id: acme
name: ACME Proprietary License
spdx: LicenseRef-ACME
body: |
  ACME Proprietary License
  Copyright {{ year }} {{ organization }} for {{ project }}
header: "Copyright {{ year }} {{ organization }}"
"#,
        )
        .unwrap();

        let template = load_file_template(&path).unwrap();
        assert_eq!(template.id, "acme");
        assert_eq!(template.name, "ACME Proprietary License");
        assert_eq!(template.spdx.as_deref(), Some("LicenseRef-ACME"));
        assert_eq!(template.variables, vec!["year", "organization", "project"]);
        assert!(template.header.is_some());
    }

    #[test]
    fn test_yaml_manifest_unknown_field() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "id: bad\nname: Bad\nbody: text\ncolour: red\n").unwrap();

        let err = load_file_template(&path).unwrap_err();
        assert!(matches!(err, TemplateError::Parse { .. }));
    }

    #[test]
    fn test_yaml_manifest_missing_body() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.yaml");
        fs::write(&path, "id: bad\nname: Bad\n").unwrap();

        let err = load_file_template(&path).unwrap_err();
        assert!(matches!(err, TemplateError::Parse { .. }));
    }

    #[test]
    fn test_malformed_placeholder() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.txt");
        fs::write(&path, "Copyright {{ year\n").unwrap();

        let err = load_file_template(&path).unwrap_err();
        match err {
            TemplateError::Parse { path: p, message } => {
                assert_eq!(p, path);
                assert!(message.contains("line 1"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_file_template(&temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }
}
