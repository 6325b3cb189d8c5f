//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use layered_settings::{Loader, Profile, Settings};
use std::path::PathBuf;

/// Where to find settings sources and which profile to apply.
#[derive(Args)]
pub struct SourceArgs {
    /// Directory holding base.* and an optional local.*
    #[arg(long, global = true, env = "SETTINGS_DIR", default_value = "settings", value_name = "DIR")]
    pub settings_dir: PathBuf,

    /// Base settings file (overrides discovery in --settings-dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// Local override file (overrides discovery in --settings-dir)
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_local")]
    pub local: Option<PathBuf>,

    /// Ignore any local override file
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Profile whose overrides are applied after the base settings
    #[arg(long, global = true, value_enum, default_value_t = Profile::Development)]
    pub profile: Profile,

    /// Apply environment overrides from variables with this prefix
    #[arg(long, global = true, value_name = "PREFIX")]
    pub env_prefix: Option<String>,
}

impl SourceArgs {
    pub fn loader(&self) -> Loader {
        let mut loader = Loader::from_dir(&self.settings_dir);
        if let Some(base) = &self.base {
            let local = loader.local_path().map(PathBuf::from);
            loader = Loader::new(base);
            if let Some(local) = local {
                loader = loader.local(local);
            }
        }
        if let Some(local) = &self.local {
            loader = loader.local(local);
        }
        if self.no_local {
            loader = loader.without_local();
        }
        if let Some(prefix) = &self.env_prefix {
            loader = loader.env_prefix(prefix);
        }
        loader.profile(self.profile)
    }

    pub fn load(&self) -> Result<Settings> {
        let loader = self.loader();
        loader
            .load()
            .with_context(|| format!("Failed loading settings from {}", loader.base_path().display()))
    }
}
