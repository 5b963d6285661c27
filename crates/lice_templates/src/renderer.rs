//! Template rendering.

use regex::Captures;
use serde::Serialize;
use tracing::debug;

use crate::error::{LookupKind, TemplateError, TemplateResult};
use crate::manifest::{LicenseTemplate, TemplateSelector, TemplateStore};
use crate::placeholder;
use crate::resolver::{VariableResolver, VariableSet};

/// A request to render one template.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub template: TemplateSelector,
    /// Language id for header mode.
    pub language: Option<String>,
    /// Render the header notice instead of the full license text.
    pub header: bool,
    pub overrides: VariableSet,
}

impl RenderRequest {
    pub fn new(template: TemplateSelector) -> Self {
        Self {
            template,
            language: None,
            header: false,
            overrides: VariableSet::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name, value);
        self
    }

    pub fn with_variables(mut self, vars: VariableSet) -> Self {
        for (name, value) in vars.iter() {
            self.overrides.insert(name, value);
        }
        self
    }
}

/// Rendered text with a suggested default filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutput {
    pub text: String,
    pub suggested_filename: String,
}

impl RenderedOutput {
    /// Extension of the suggested filename, without the dot.
    pub fn suggested_extension(&self) -> &str {
        self.suggested_filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("txt")
    }
}

/// Renders templates against a store.
pub struct TemplateRenderer<'a> {
    store: &'a TemplateStore,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Render the full license text.
    pub fn render(
        &self,
        template: &LicenseTemplate,
        variables: &VariableSet,
        language: Option<&str>,
    ) -> TemplateResult<RenderedOutput> {
        self.render_body(template, &template.body, variables, language)
    }

    /// Render the license's header notice.
    pub fn render_header(
        &self,
        template: &LicenseTemplate,
        variables: &VariableSet,
        language: Option<&str>,
    ) -> TemplateResult<RenderedOutput> {
        let header = template
            .header
            .as_deref()
            .ok_or_else(|| TemplateError::not_found(LookupKind::Header, &template.id))?;
        self.render_body(template, header, variables, language)
    }

    fn render_body(
        &self,
        template: &LicenseTemplate,
        body: &str,
        variables: &VariableSet,
        language: Option<&str>,
    ) -> TemplateResult<RenderedOutput> {
        // Resolve the language first so an unknown id fails before any work.
        let style = language
            .map(|id| self.store.get_language(id).map(|spec| spec.style))
            .transpose()?;

        let substituted = substitute(body, variables)?;
        let text = match style {
            Some(style) => style.wrap(&substituted),
            None => format!("{}\n", substituted.trim_end_matches('\n')),
        };

        let suggested_filename = format!("{}.{}", template.id, language.unwrap_or("txt"));
        debug!(
            "Rendered '{}' ({} bytes, language: {:?})",
            template.id,
            text.len(),
            language
        );

        Ok(RenderedOutput {
            text,
            suggested_filename,
        })
    }
}

/// Replace every placeholder in `body`.
///
/// Fails with the first placeholder, in reading order, that has no value.
pub fn substitute(body: &str, variables: &VariableSet) -> TemplateResult<String> {
    let pattern = placeholder::pattern();

    if let Some(missing) = pattern
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .find(|name| !variables.contains(name))
    {
        return Err(TemplateError::MissingVariable(missing));
    }

    Ok(pattern
        .replace_all(body, |caps: &Captures| {
            variables.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned())
}

/// Select, resolve and render in one step.
pub fn render_request(
    store: &TemplateStore,
    resolver: &VariableResolver,
    request: &RenderRequest,
) -> TemplateResult<RenderedOutput> {
    let template = store.select(&request.template)?;
    let variables = resolver.resolve(&template, &request.overrides);
    let renderer = TemplateRenderer::new(store);
    let language = request.language.as_deref();

    if request.header {
        renderer.render_header(&template, &variables, language)
    } else {
        renderer.render(&template, &variables, language)
    }
}
