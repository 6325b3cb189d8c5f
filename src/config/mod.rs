//! Settings loading and merging
//!
//! Builds one immutable settings set from ordered layers
//! (base, then profile, then local, then env; later layers win).

pub mod env;
pub mod global;
pub mod loader;
pub mod merge;
pub mod profile;
pub mod settings;
pub mod source;

pub use loader::Loader;
pub use merge::{merge_layers, Merger};
pub use profile::{CONSOLE_EMAIL_BACKEND, DEVELOPMENT_SECRET_KEY};
pub use settings::Settings;
pub use source::{discover_source, is_setting_name, load_base, load_local, read_source};
