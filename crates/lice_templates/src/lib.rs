//! # lice_templates
//!
//! License template store, variable resolution and rendering for lice.
//!
//! This crate turns a license template plus a set of variables into license
//! text, optionally wrapped in a programming language's comment syntax so it
//! can sit at the top of a source file. It covers:
//!
//! - the built-in license and language tables ([`TemplateStore`])
//! - external templates, plain text or YAML ([`TemplateLoader`])
//! - default/override variable merging ([`VariableResolver`])
//! - placeholder substitution and comment wrapping ([`TemplateRenderer`])
//! - catalog listings and the JSON export ([`MetadataReporter`])
//!
//! ## Example
//!
//! ```rust
//! use lice_templates::{
//!     render_request, RenderRequest, TemplateSelector, TemplateStore, VariableResolver,
//!     VariableSet,
//! };
//!
//! let store = TemplateStore::builtin();
//! let resolver = VariableResolver::new(VariableSet::new().with("year", "2024"));
//!
//! let request = RenderRequest::new(TemplateSelector::builtin("mit"))
//!     .with_variable("organization", "Test Org")
//!     .with_language("rs");
//!
//! let output = render_request(&store, &resolver, &request).unwrap();
//! assert!(output.text.starts_with("// MIT License"));
//! assert!(output.text.contains("// Copyright (c) 2024 Test Org"));
//! ```

mod builtin;
pub mod error;
pub mod language;
pub mod loader;
pub mod manifest;
pub mod metadata;
pub mod placeholder;
pub mod renderer;
pub mod resolver;

pub use builtin::DEFAULT_LICENSE;
pub use error::{LookupKind, TemplateError, TemplateResult};
pub use language::{CommentStyle, LanguageHeaderSpec};
pub use loader::{load_file_template, TemplateLoader};
pub use manifest::{LicenseTemplate, Origin, TemplateSelector, TemplateStore};
pub use metadata::{CatalogEntry, Metadata, MetadataReporter, VariableEntry};
pub use renderer::{render_request, substitute, RenderRequest, RenderedOutput, TemplateRenderer};
pub use resolver::{merge, vars, SystemDefaults, VariableResolver, VariableSet};
