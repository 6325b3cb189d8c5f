//! layered-settings: ordered settings loading for web application profiles
//!
//! Merges a required base source, a profile's overrides and an optional
//! local source into one immutable settings set, tracking where every value
//! came from.

pub mod check;
pub mod config;
pub mod domain;
pub mod redact;
pub mod render;

pub use config::{Loader, Settings};
pub use domain::{Origin, Profile, Setting, SettingsError, SettingsMap, SourceInfo};
