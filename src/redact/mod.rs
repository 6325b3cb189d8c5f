//! Secret masking for displayed settings

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const REDACTED: &str = "[REDACTED]";

/// Setting names that hold secrets.
static SECRET_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(SECRET|PASSWORD|TOKEN|API_KEY|PRIVATE_KEY|CREDENTIAL)")
        .expect("secret name pattern is valid")
});

pub fn is_secret_name(name: &str) -> bool {
    SECRET_NAME.is_match(&name.to_ascii_uppercase())
}

/// Mask `value` if `name` looks like a secret, recursing into tables.
///
/// Everything under a secret name is masked. Only strings are replaced;
/// booleans and numbers are left as-is.
pub fn mask_value(name: &str, value: &Value) -> Value {
    if is_secret_name(name) {
        return mask_strings(value);
    }
    match value {
        Value::Object(map) => Value::Object(
            map.iter().map(|(key, inner)| (key.clone(), mask_value(key, inner))).collect(),
        ),
        other => other.clone(),
    }
}

fn mask_strings(value: &Value) -> Value {
    match value {
        Value::String(_) => Value::String(REDACTED.to_string()),
        Value::Object(map) => {
            Value::Object(map.iter().map(|(key, inner)| (key.clone(), mask_strings(inner))).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(mask_strings).collect()),
        other => other.clone(),
    }
}
