//! Settings source reading and discovery

use crate::domain::{Layer, Origin, SettingsError, SettingsMap, SourceFormat, SourceInfo};
use figment::providers::{Format, Json, Toml, Yaml};
use figment::Figment;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File stem of the required base source during discovery.
pub const BASE_STEM: &str = "base";

/// File stem of the optional local source during discovery.
pub const LOCAL_STEM: &str = "local";

static SETTING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("setting name pattern is valid"));

/// Returns true if `name` follows the uppercase setting-name convention.
pub fn is_setting_name(name: &str) -> bool {
    SETTING_NAME.is_match(name)
}

/// Load the base source. A missing base is fatal.
pub fn load_base(path: &Path) -> Result<Layer, SettingsError> {
    if !path.exists() {
        return Err(SettingsError::BaseNotFound(path.to_path_buf()));
    }
    let layer = read_source(path, Origin::Base)?;
    debug!(path = %path.display(), settings = layer.values.len(), "Loaded base settings");
    Ok(layer)
}

/// Load the local override source, if there is one.
///
/// Absence is the expected case and yields `Ok(None)`. A local file that exists
/// but cannot be read or parsed is still an error.
pub fn load_local(path: &Path) -> Result<Option<Layer>, SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "No local settings found, skipping");
        return Ok(None);
    }
    let layer = read_source(path, Origin::Local)?;
    debug!(path = %path.display(), settings = layer.values.len(), "Loaded local settings");
    Ok(Some(layer))
}

/// Read one settings file into a layer, recording its path and digest.
pub fn read_source(path: &Path, origin: Origin) -> Result<Layer, SettingsError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let format = SourceFormat::from_extension(ext).ok_or_else(|| {
        SettingsError::UnsupportedFormat { path: path.to_path_buf(), ext: ext.to_string() }
    })?;

    let io_err = |source| SettingsError::Io { path: path.to_path_buf(), source };
    let bytes = fs::read(path).map_err(io_err)?;
    let digest = sha256_hex(&bytes);
    let content = String::from_utf8(bytes)
        .map_err(|e| io_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let raw = parse_settings(&content, format).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    Ok(Layer {
        source: SourceInfo {
            origin,
            path: Some(path.display().to_string()),
            digest: Some(digest),
        },
        values: keep_setting_names(raw, origin),
    })
}

/// Find `<stem>.<ext>` in `dir`, probing extensions in priority order.
pub fn discover_source(dir: &Path, stem: &str) -> Option<PathBuf> {
    SourceFormat::EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|candidate| candidate.is_file())
}

fn parse_settings(
    content: &str,
    format: SourceFormat,
) -> Result<BTreeMap<String, Value>, figment::Error> {
    let figment = match format {
        SourceFormat::Toml => Figment::from(Toml::string(content)),
        SourceFormat::Yaml => Figment::from(Yaml::string(content)),
        SourceFormat::Json => Figment::from(Json::string(content)),
    };
    let raw: BTreeMap<String, Value> = figment.extract()?;
    Ok(raw.into_iter().map(|(name, value)| (name, unwrap_toml_datetime(value))).collect())
}

/// Key figment uses to carry TOML dates and datetimes through serde.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Replace `{"$__toml_private_datetime": "..."}` wrappers with the plain string.
fn unwrap_toml_datetime(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 && map.contains_key(TOML_DATETIME_KEY) => {
            map.into_iter().next().map(|(_, inner)| inner).unwrap_or(Value::Null)
        }
        Value::Object(map) => Value::Object(
            map.into_iter().map(|(key, inner)| (key, unwrap_toml_datetime(inner))).collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(unwrap_toml_datetime).collect()),
        other => other,
    }
}

/// Drop names that don't follow the uppercase convention.
pub(crate) fn keep_setting_names(raw: BTreeMap<String, Value>, origin: Origin) -> SettingsMap {
    raw.into_iter()
        .filter(|(name, _)| {
            let keep = is_setting_name(name);
            if !keep {
                debug!(%origin, name = %name, "Ignoring non-setting name");
            }
            keep
        })
        .collect()
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
