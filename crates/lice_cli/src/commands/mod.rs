//! CLI command definitions.
//!
//! lice has a single flag-driven interface: listing flags (`--licenses`,
//! `--languages`, `--vars`, `--metadata`) print catalog information, anything
//! else renders a license.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use lice_templates::{TemplateSelector, VariableSet, DEFAULT_LICENSE};

use crate::config::Config;

pub mod generate;
pub mod list;

/// lice - generate license files and source headers
#[derive(Parser, Debug)]
#[command(name = "lice")]
#[command(version, about = "Generate license files and source-code license headers")]
#[command(long_about = r#"
Generate license text from built-in or custom templates, optionally wrapped
in a programming language's comment syntax for use as a source header.

EXAMPLES:
  lice mit -o "Test Org" -y 2024          → MIT license on stdout
  lice apache --header -l rs              → Apache header as Rust comments
  lice bsd3 -f LICENSE                    → write LICENSE.txt
  lice -t ./company.txt --var email=x@y   → render a custom template
  lice --metadata                         → JSON catalog

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - License, language or header not found
  4 - Missing template variable
  5 - Template unreadable or malformed
  6 - Clipboard unavailable
"#)]
#[command(group(ArgGroup::new("destination").args(["file", "clipboard"])))]
pub struct Cli {
    /// License identifier (see --licenses)
    pub license: Option<String>,

    /// Organization, defaults to `git config user.name` or the login user
    #[arg(short, long)]
    pub org: Option<String>,

    /// Project name, defaults to the current directory name
    #[arg(short, long)]
    pub proj: Option<String>,

    /// Copyright year, defaults to the current year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Extra template variable (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub vars_override: Vec<(String, String)>,

    /// Path to a custom template file (.txt or .yaml)
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Format output as a source header for this language (see --languages)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Write to a file; a known language extension implies --language
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Copy the result to the clipboard
    #[arg(short, long)]
    pub clipboard: bool,

    /// Render the short header notice instead of the full license
    #[arg(long)]
    pub header: bool,

    /// List the variables of the selected template
    #[arg(long)]
    pub vars: bool,

    /// List available licenses
    #[arg(long)]
    pub licenses: bool,

    /// List available languages
    #[arg(long)]
    pub languages: bool,

    /// Print licenses and languages as JSON
    #[arg(long)]
    pub metadata: bool,

    /// Config file (defaults to <config dir>/lice/config.toml)
    #[arg(long, env = "LICE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Template selected by the arguments and config.
    pub fn selector(&self, config: &Config) -> TemplateSelector {
        match &self.template {
            Some(path) => TemplateSelector::external(path),
            None => TemplateSelector::builtin(
                self.license
                    .as_deref()
                    .or(config.license.as_deref())
                    .unwrap_or(DEFAULT_LICENSE),
            ),
        }
    }

    /// Variables given explicitly on the command line.
    pub fn overrides(&self) -> VariableSet {
        let mut set: VariableSet = self.vars_override.iter().cloned().collect();
        if let Some(year) = &self.year {
            set.insert(lice_templates::vars::YEAR, year.as_str());
        }
        if let Some(org) = &self.org {
            set.insert(lice_templates::vars::ORGANIZATION, org.as_str());
        }
        if let Some(proj) = &self.proj {
            set.insert(lice_templates::vars::PROJECT, proj.as_str());
        }
        set
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty variable name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run the command described by the arguments.
///
/// Catalog listings never read the config file.
pub fn execute(cli: Cli) -> Result<()> {
    if cli.licenses {
        return list::licenses();
    }
    if cli.languages {
        return list::languages();
    }
    if cli.metadata {
        return list::metadata();
    }

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.vars {
        return list::vars(&cli, &config);
    }

    generate::execute(&cli, &config)
}
