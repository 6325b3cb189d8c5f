//! Settings loading: base, then profile, then local, then environment

use crate::domain::{Layer, Profile, SettingsError};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::env::load_env;
use super::merge::merge_layers;
use super::settings::Settings;
use super::source::{discover_source, load_base, load_local, BASE_STEM, LOCAL_STEM};

/// Builds [`Settings`] from an ordered set of sources.
#[derive(Debug, Clone)]
pub struct Loader {
    base: PathBuf,
    local: Option<PathBuf>,
    profile: Profile,
    env_prefix: Option<String>,
}

impl Loader {
    /// Loader for an explicit base file, with the development profile and no local file.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), local: None, profile: Profile::default(), env_prefix: None }
    }

    /// Loader for a settings directory holding `base.*` and an optional `local.*`.
    ///
    /// When no base file is found the loader still points at `base.toml`, so
    /// [`Loader::load`] reports which file is missing.
    pub fn from_dir(dir: &Path) -> Self {
        let base = discover_source(dir, BASE_STEM).unwrap_or_else(|| dir.join("base.toml"));
        let local = discover_source(dir, LOCAL_STEM).unwrap_or_else(|| dir.join("local.toml"));
        Self::new(base).local(local)
    }

    pub fn local(mut self, path: impl Into<PathBuf>) -> Self {
        self.local = Some(path.into());
        self
    }

    pub fn without_local(mut self) -> Self {
        self.local = None;
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Enable the environment layer for variables starting with `prefix`.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base
    }

    pub fn local_path(&self) -> Option<&Path> {
        self.local.as_deref()
    }

    /// Collect the layers that apply, in merge order.
    pub fn layers(&self) -> Result<Vec<Layer>, SettingsError> {
        let mut layers = vec![load_base(&self.base)?];

        layers.extend(self.profile.layer());

        if let Some(local) = &self.local {
            layers.extend(load_local(local)?);
        }

        if let Some(prefix) = &self.env_prefix {
            layers.extend(load_env(prefix)?);
        }

        Ok(layers)
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        let layers = self.layers()?;
        debug!(profile = %self.profile, layers = layers.len(), "Merging settings");
        Ok(Settings::from_merger(self.profile, merge_layers(layers)))
    }
}
