//! Advisory checks for settings that are unsafe outside development
//!
//! Loading never validates; these checks only report.

use crate::config::{Settings, CONSOLE_EMAIL_BACKEND, DEVELOPMENT_SECRET_KEY};
use serde::Serialize;
use std::collections::HashSet;

const SECRET_KEY_MIN_LENGTH: usize = 50;
const SECRET_KEY_MIN_UNIQUE_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub setting: String,
    pub message: String,
}

impl Finding {
    fn new(setting: &str, message: impl Into<String>) -> Self {
        Self { setting: setting.to_string(), message: message.into() }
    }
}

pub fn run(settings: &Settings) -> Vec<Finding> {
    let mut findings = Vec::new();

    if settings.get_bool("DEBUG") == Some(true) {
        findings.push(Finding::new(
            "DEBUG",
            "DEBUG is enabled; never run with debug turned on in production",
        ));
    }

    findings.extend(check_secret_key(settings.get_str("SECRET_KEY")));

    match settings.get_list("ALLOWED_HOSTS") {
        Some(hosts) if hosts.contains(&"*") => findings.push(Finding::new(
            "ALLOWED_HOSTS",
            "ALLOWED_HOSTS contains '*'; host header validation is disabled",
        )),
        Some(hosts) if hosts.is_empty() => {
            findings.push(Finding::new("ALLOWED_HOSTS", "ALLOWED_HOSTS is empty"))
        }
        _ => {}
    }

    if settings.get_str("EMAIL_BACKEND") == Some(CONSOLE_EMAIL_BACKEND) {
        findings.push(Finding::new(
            "EMAIL_BACKEND",
            "EMAIL_BACKEND is 'console'; outgoing mail is only printed",
        ));
    }

    findings
}

fn check_secret_key(key: Option<&str>) -> Option<Finding> {
    let message = match key {
        None => "SECRET_KEY is not set".to_string(),
        Some("") => "SECRET_KEY is empty".to_string(),
        Some(DEVELOPMENT_SECRET_KEY) => {
            "SECRET_KEY is the development placeholder; keep the production key secret".to_string()
        }
        Some(key) if key.chars().count() < SECRET_KEY_MIN_LENGTH => {
            format!("SECRET_KEY has fewer than {SECRET_KEY_MIN_LENGTH} characters")
        }
        Some(key) if key.chars().collect::<HashSet<_>>().len() < SECRET_KEY_MIN_UNIQUE_CHARS => {
            format!("SECRET_KEY has fewer than {SECRET_KEY_MIN_UNIQUE_CHARS} unique characters")
        }
        Some(_) => return None,
    };
    Some(Finding::new("SECRET_KEY", message))
}
