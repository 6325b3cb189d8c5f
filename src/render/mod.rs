//! Output rendering (text, JSON, TOML, YAML, provenance reports)

pub mod report;

use crate::config::Settings;
use crate::domain::SettingsMap;
use crate::redact::mask_value;
use anyhow::{Context, Result};
use std::fmt::Write as _;

pub use report::{build_report, write_report};

/// Output format for rendered settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `NAME = value` lines, values as JSON
    #[default]
    Text,
    Json,
    Toml,
    Yaml,
}

/// Settings as a plain map, with secrets masked unless `reveal_secrets` is set.
pub fn display_map(settings: &Settings, reveal_secrets: bool) -> SettingsMap {
    settings
        .iter()
        .map(|(name, value)| {
            let shown = if reveal_secrets { value.clone() } else { mask_value(name, value) };
            (name.to_string(), shown)
        })
        .collect()
}

pub fn render(settings: &Settings, format: OutputFormat, reveal_secrets: bool) -> Result<String> {
    let map = display_map(settings, reveal_secrets);
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, value) in &map {
                writeln!(out, "{name} = {value}")?;
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&map)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Toml => {
            toml::to_string(&map).context("Settings cannot be represented as TOML")
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&map)?),
    }
}
