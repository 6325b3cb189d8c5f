//! Core types shared by the loader, renderers and CLI

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Schema version of the provenance report emitted by `render::report`.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Flat mapping from setting name to value.
pub type SettingsMap = BTreeMap<String, Value>;

/// Named override set applied on top of the base source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Debug-friendly overrides for local work.
    #[default]
    Development,
    /// No overrides; the base source is used as-is.
    Base,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Development => f.write_str("development"),
            Profile::Base => f.write_str("base"),
        }
    }
}

/// Where a layer of settings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Base,
    Profile,
    Local,
    Env,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::Base => "base",
            Origin::Profile => "profile",
            Origin::Local => "local",
            Origin::Env => "env",
        };
        f.write_str(name)
    }
}

/// A contributing source with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub origin: Origin,

    /// File path (None for profile/env layers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 of the raw file bytes (None for profile/env layers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// One stage of the ordered merge.
#[derive(Debug, Clone)]
pub struct Layer {
    pub source: SourceInfo,
    pub values: SettingsMap,
}

impl Layer {
    pub fn new(origin: Origin, values: SettingsMap) -> Self {
        Self { source: SourceInfo { origin, path: None, digest: None }, values }
    }

    pub fn origin(&self) -> Origin {
        self.source.origin
    }
}

/// A merged setting: its final value, the layer that set it, and the layers it shadowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setting {
    pub value: Value,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadowed: Vec<Origin>,
}

/// On-disk format of a settings source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Yaml,
    Json,
}

impl SourceFormat {
    /// Extensions probed during discovery, in priority order.
    pub const EXTENSIONS: [&'static str; 4] = ["toml", "yaml", "yml", "json"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Some(SourceFormat::Toml),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// Errors produced while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Base settings source not found: {}", .0.display())]
    BaseNotFound(PathBuf),

    #[error("Failed reading settings source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings source {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("Unsupported settings extension '.{ext}' for file {}", .path.display())]
    UnsupportedFormat { path: PathBuf, ext: String },

    #[error("Invalid environment overrides: {0}")]
    Env(Box<figment::Error>),

    #[error("Settings have already been installed for this process")]
    AlreadyInstalled,

    #[error("Settings do not match the requested shape: {0}")]
    Extract(#[from] serde_json::Error),
}
