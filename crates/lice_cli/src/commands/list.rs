//! Catalog listings: licenses, languages, variables and the JSON export.

use anyhow::{Context, Result};

use lice_templates::{
    CatalogEntry, LicenseTemplate, MetadataReporter, TemplateStore, VariableEntry,
    VariableResolver, VariableSet,
};

use crate::commands::Cli;
use crate::config::Config;

pub fn licenses() -> Result<()> {
    let store = TemplateStore::builtin();
    print!("{}", format_entries(&MetadataReporter::new(&store).list_licenses()));
    Ok(())
}

pub fn languages() -> Result<()> {
    let store = TemplateStore::builtin();
    print!("{}", format_entries(&MetadataReporter::new(&store).list_languages()));
    Ok(())
}

pub fn metadata() -> Result<()> {
    let store = TemplateStore::builtin();
    let json = MetadataReporter::new(&store)
        .export()
        .to_json()
        .context("Failed to serialize metadata")?;
    println!("{}", json);
    Ok(())
}

/// Variables of the selected template with the defaults that would apply.
///
/// With `--header` the header notice's variables are listed instead.
pub fn vars(cli: &Cli, config: &Config) -> Result<()> {
    let store = TemplateStore::builtin();
    let template = store
        .select(&cli.selector(config))
        .context("Failed to load template")?;
    let resolver = VariableResolver::from_system().with_layer(&config.variables());

    let entries = variable_entries(&store, &template, resolver.defaults(), cli.header)?;
    if entries.is_empty() {
        println!("{} has no variables", template.id);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!("{:width$}  {}", entry.name, entry.default, width = width);
    }
    Ok(())
}

fn variable_entries(
    store: &TemplateStore,
    template: &LicenseTemplate,
    defaults: &VariableSet,
    header: bool,
) -> Result<Vec<VariableEntry>> {
    let reporter = MetadataReporter::new(store);
    if header {
        Ok(reporter
            .list_header_vars(template, defaults)
            .context("Failed to list header variables")?)
    } else {
        Ok(reporter.list_vars(template, defaults))
    }
}

fn format_entries(entries: &[CatalogEntry]) -> String {
    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|e| format!("{:width$}  {}\n", e.id, e.name, width = width))
        .collect()
}
