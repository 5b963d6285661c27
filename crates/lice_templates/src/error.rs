//! Error types for templates.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// What kind of identifier a failed lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    License,
    Language,
    Header,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            LookupKind::License => "License",
            LookupKind::Language => "Language",
            LookupKind::Header => "Header for license",
        };
        f.write_str(kind)
    }
}

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: LookupKind, id: String },

    #[error("Variable not provided: {0}")]
    MissingVariable(String),

    #[error("Malformed template {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Cannot read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemplateError {
    pub fn not_found(kind: LookupKind, id: impl Into<String>) -> Self {
        TemplateError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
