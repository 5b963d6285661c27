//! Render a license and dispatch it.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use lice_templates::{render_request, RenderRequest, TemplateStore, VariableResolver};

use crate::commands::Cli;
use crate::config::Config;
use crate::output::{Destination, Dispatcher};

pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let store = TemplateStore::builtin();
    let resolver = VariableResolver::from_system().with_layer(&config.variables());

    let mut request = RenderRequest::new(cli.selector(config))
        .with_header(cli.header)
        .with_variables(cli.overrides());
    if let Some(language) = language_for(cli, &store) {
        request = request.with_language(language);
    }

    info!("Rendering {:?}", request.template);
    let output = render_request(&store, &resolver, &request)
        .with_context(|| format!("Failed to render {}", describe(&request)))?;

    Dispatcher::new()
        .dispatch(&output, &destination(cli))
        .context("Failed to deliver license text")?;

    Ok(())
}

/// Explicit `--language`, otherwise the `--file` extension when it names a
/// known language.
fn language_for(cli: &Cli, store: &TemplateStore) -> Option<String> {
    if let Some(language) = &cli.language {
        return Some(language.clone());
    }

    let ext = cli
        .file
        .as_deref()
        .and_then(Path::extension)
        .and_then(|e| e.to_str())?;

    if store.has_language(ext) {
        debug!("Using language '{}' from output file extension", ext);
        Some(ext.to_string())
    } else {
        None
    }
}

fn destination(cli: &Cli) -> Destination {
    match (&cli.file, cli.clipboard) {
        (Some(path), _) => Destination::File(path.clone()),
        (None, true) => Destination::Clipboard,
        (None, false) => Destination::Stdout,
    }
}

fn describe(request: &RenderRequest) -> String {
    match &request.template {
        lice_templates::TemplateSelector::Builtin(id) => format!("license '{}'", id),
        lice_templates::TemplateSelector::External(path) => {
            format!("template {}", path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_language_from_file_extension() {
        let store = TemplateStore::builtin();

        let cli = Cli::parse_from(["lice", "-f", "output.py"]);
        assert_eq!(language_for(&cli, &store), Some("py".to_string()));

        let cli = Cli::parse_from(["lice", "-f", "LICENSE.txt"]);
        assert_eq!(language_for(&cli, &store), None);

        let cli = Cli::parse_from(["lice", "-f", "output"]);
        assert_eq!(language_for(&cli, &store), None);
    }

    #[test]
    fn test_explicit_language_wins() {
        let store = TemplateStore::builtin();
        let cli = Cli::parse_from(["lice", "-l", "rs", "-f", "output.py"]);
        assert_eq!(language_for(&cli, &store), Some("rs".to_string()));
    }

    #[test]
    fn test_destination() {
        let cli = Cli::parse_from(["lice"]);
        assert_eq!(destination(&cli), Destination::Stdout);

        let cli = Cli::parse_from(["lice", "-c"]);
        assert_eq!(destination(&cli), Destination::Clipboard);

        let cli = Cli::parse_from(["lice", "-f", "LICENSE"]);
        assert_eq!(destination(&cli), Destination::File(PathBuf::from("LICENSE")));
    }
}
