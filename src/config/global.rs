//! Process-wide settings handle, written once at startup

use crate::domain::SettingsError;
use once_cell::sync::OnceCell;

use super::settings::Settings;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the settings for this process. Fails if settings were already installed.
pub fn install(settings: Settings) -> Result<&'static Settings, SettingsError> {
    SETTINGS.set(settings).map_err(|_| SettingsError::AlreadyInstalled)?;
    SETTINGS.get().ok_or(SettingsError::AlreadyInstalled)
}

pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Loader;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_install_once() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("base.toml"), "SITE_ID = 1\n").expect("write");
        let loader = Loader::from_dir(tmp.path());

        let installed = install(loader.load().expect("settings")).expect("first install");
        assert_eq!(installed.get("SITE_ID"), Some(&serde_json::json!(1)));
        assert!(get().is_some());

        let err = install(loader.load().expect("settings")).expect_err("second install");
        assert!(matches!(err, SettingsError::AlreadyInstalled));
    }
}
