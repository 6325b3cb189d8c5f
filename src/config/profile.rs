//! Profile overrides applied on top of the base source

use crate::domain::{Layer, Origin, Profile, SettingsMap};
use serde_json::{json, Value};

/// Signing key used by the development profile. Placeholder only; never rotated.
pub const DEVELOPMENT_SECRET_KEY: &str = "&4(!5jdp1e9x!yyc_#b$mjz-e6mvbxug((^o+!*_35hyc$*&9i";

/// Email backend that writes outgoing mail to the console.
pub const CONSOLE_EMAIL_BACKEND: &str = "console";

impl Profile {
    /// Overrides for this profile, in application order.
    pub fn overrides(self) -> Vec<(&'static str, Value)> {
        match self {
            Profile::Development => vec![
                ("DEBUG", Value::Bool(true)),
                ("SECRET_KEY", Value::String(DEVELOPMENT_SECRET_KEY.to_string())),
                ("ALLOWED_HOSTS", json!(["*"])),
                ("EMAIL_BACKEND", Value::String(CONSOLE_EMAIL_BACKEND.to_string())),
            ],
            Profile::Base => Vec::new(),
        }
    }

    /// The overrides as a merge layer, or `None` when the profile adds nothing.
    pub fn layer(self) -> Option<Layer> {
        let overrides = self.overrides();
        if overrides.is_empty() {
            return None;
        }
        let values: SettingsMap =
            overrides.into_iter().map(|(name, value)| (name.to_string(), value)).collect();
        Some(Layer::new(Origin::Profile, values))
    }
}
