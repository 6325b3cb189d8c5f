//! Optional environment override layer

use crate::domain::{Layer, Origin, SettingsError};
use figment::providers::Env;
use figment::Figment;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::source::keep_setting_names;

/// Read `<prefix><NAME>` variables as a final override layer.
///
/// Values are parsed the way figment parses environment values, so `false`
/// becomes a boolean and `8000` an integer. Returns `None` if nothing matched.
pub fn load_env(prefix: &str) -> Result<Option<Layer>, SettingsError> {
    if prefix.is_empty() {
        debug!("Empty environment prefix, skipping environment overrides");
        return Ok(None);
    }

    let raw: BTreeMap<String, Value> = Figment::from(Env::prefixed(prefix))
        .extract()
        .map_err(|e| SettingsError::Env(Box::new(e)))?;

    let upper = raw.into_iter().map(|(name, value)| (name.to_ascii_uppercase(), value)).collect();
    let values = keep_setting_names(upper, Origin::Env);
    if values.is_empty() {
        return Ok(None);
    }

    debug!(prefix, settings = values.len(), "Loaded environment overrides");
    Ok(Some(Layer::new(Origin::Env, values)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_values_are_parsed_and_uppercased() {
        std::env::set_var("LSTEST_ENV_PARSE_DEBUG", "false");
        std::env::set_var("LSTEST_ENV_PARSE_PORT", "8000");
        std::env::set_var("LSTEST_ENV_PARSE_TIME_ZONE", "Asia/Shanghai");

        let layer = load_env("LSTEST_ENV_PARSE_").expect("env").expect("layer");
        assert_eq!(layer.origin(), Origin::Env);
        assert_eq!(layer.values["DEBUG"], false);
        assert_eq!(layer.values["PORT"], 8000);
        assert_eq!(layer.values["TIME_ZONE"], "Asia/Shanghai");
    }

    #[test]
    fn test_no_matching_variables() {
        assert!(load_env("LSTEST_ENV_NOTHING_SET_").expect("env").is_none());
    }

    #[test]
    fn test_empty_prefix_reads_nothing() {
        assert!(load_env("").expect("env").is_none());
    }
}
