//! Provenance report JSON generation.

use crate::config::Settings;
use crate::domain::REPORT_SCHEMA_VERSION;
use crate::redact::mask_value;
use anyhow::Result;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Where every setting came from, which layers it shadowed, and the contributing sources.
pub fn build_report(settings: &Settings, reveal_secrets: bool) -> Result<Value> {
    let mut entries = Map::new();
    for name in settings.names() {
        let Some(setting) = settings.setting(name) else {
            continue;
        };
        let value =
            if reveal_secrets { setting.value.clone() } else { mask_value(name, &setting.value) };
        let mut entry = Map::new();
        entry.insert("value".to_string(), value);
        entry.insert("origin".to_string(), serde_json::to_value(setting.origin)?);
        if !setting.shadowed.is_empty() {
            entry.insert("shadowed".to_string(), serde_json::to_value(&setting.shadowed)?);
        }
        entries.insert(name.to_string(), Value::Object(entry));
    }

    Ok(json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "loaded_at": settings.loaded_at().format("%Y-%m-%dT%H:%M:%S+00:00").to_string(),
        "profile": settings.profile(),
        "sources": settings.sources(),
        "settings": Value::Object(entries),
    }))
}

pub fn write_report(report_path: &Path, settings: &Settings, reveal_secrets: bool) -> Result<()> {
    let report = build_report(settings, reveal_secrets)?;
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
