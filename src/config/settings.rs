//! The immutable, merged configuration set

use crate::domain::{Origin, Profile, Setting, SettingsError, SettingsMap, SourceInfo};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::merge::Merger;

/// Final configuration produced by [`Loader::load`](super::Loader::load).
///
/// Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    profile: Profile,
    loaded_at: DateTime<Utc>,
    sources: Vec<SourceInfo>,
    entries: BTreeMap<String, Setting>,
}

impl Settings {
    pub(crate) fn from_merger(profile: Profile, merger: Merger) -> Self {
        let (entries, sources) = merger.into_parts();
        Self { profile, loaded_at: Utc::now(), sources, entries }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(|s| &s.value)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// A list of strings. `None` if unset or if any element is not a string.
    pub fn get_list(&self, name: &str) -> Option<Vec<&str>> {
        self.get(name)?.as_array()?.iter().map(Value::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Setting names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, s)| (name.as_str(), &s.value))
    }

    /// Value plus provenance for one setting.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.entries.get(name)
    }

    pub fn origin_of(&self, name: &str) -> Option<Origin> {
        self.entries.get(name).map(|s| s.origin)
    }

    /// Contributing sources in precedence order.
    pub fn sources(&self) -> &[SourceInfo] {
        &self.sources
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn to_map(&self) -> SettingsMap {
        self.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
    }

    /// Deserialize the settings into a typed view.
    ///
    /// This is where a wrongly typed override first surfaces as an error.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, SettingsError> {
        let object: serde_json::Map<String, Value> =
            self.iter().map(|(name, value)| (name.to_string(), value.clone())).collect();
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::merge::merge_layers;
    use crate::domain::Layer;
    use serde::Deserialize;
    use serde_json::json;

    fn settings(values: Value) -> Settings {
        let values: SettingsMap = serde_json::from_value(values).expect("object");
        let merger = merge_layers([Layer::new(Origin::Base, values)]);
        Settings::from_merger(Profile::Base, merger)
    }

    #[test]
    fn test_typed_getters() {
        let s = settings(json!({
            "DEBUG": true,
            "EMAIL_BACKEND": "console",
            "ALLOWED_HOSTS": ["localhost", "127.0.0.1"],
            "MIXED": ["a", 1],
        }));

        assert_eq!(s.get_bool("DEBUG"), Some(true));
        assert_eq!(s.get_str("EMAIL_BACKEND"), Some("console"));
        assert_eq!(s.get_list("ALLOWED_HOSTS"), Some(vec!["localhost", "127.0.0.1"]));
        assert_eq!(s.get_list("MIXED"), None);
        assert_eq!(s.get_bool("EMAIL_BACKEND"), None);
        assert_eq!(s.get("MISSING"), None);
        assert_eq!(s.len(), 4);
        assert_eq!(s.names().collect::<Vec<_>>(), ["ALLOWED_HOSTS", "DEBUG", "EMAIL_BACKEND", "MIXED"]);
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    struct Mail {
        email_backend: String,
        #[serde(default)]
        email_port: Option<u16>,
    }

    #[test]
    fn test_extract_typed_view() {
        let s = settings(json!({"EMAIL_BACKEND": "console", "DEBUG": true}));
        let mail: Mail = s.extract().expect("extract");
        assert_eq!(mail.email_backend, "console");
        assert_eq!(mail.email_port, None);
    }

    #[test]
    fn test_extract_surfaces_wrong_types() {
        let s = settings(json!({"EMAIL_BACKEND": "console", "EMAIL_PORT": "not-a-port"}));
        let err = s.extract::<Mail>().expect_err("wrong type");
        assert!(matches!(err, SettingsError::Extract(_)));
    }
}
