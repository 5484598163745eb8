//! Where the settings file lives.
//!
//! Production: `<platform local data dir>/highscore/settings.json`.
//! In tests and tooling, use `StorageConfig::in_dir()`.

use crate::error::{ScoreError, ScoreResult};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Subdirectory of the platform data dir owned by this application.
pub const APP_DIR_NAME: &str = "highscore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir:  PathBuf,
    pub file_name: String,
}

impl StorageConfig {
    /// The application's private storage under the platform's local
    /// data directory (e.g. `~/.local/share` on Linux).
    pub fn platform_default() -> ScoreResult<Self> {
        let base = dirs::data_local_dir().ok_or(ScoreError::NoDataDir)?;
        Ok(Self::in_dir(base.join(APP_DIR_NAME)))
    }

    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir:  data_dir.into(),
            file_name: SETTINGS_FILE_NAME.to_string(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_uses_settings_json() {
        let config = StorageConfig::in_dir("/tmp/scores");
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/scores/settings.json"));
    }

    #[test]
    fn platform_default_lands_in_app_dir() {
        // Headless CI boxes may have no data dir at all.
        if let Ok(config) = StorageConfig::platform_default() {
            assert!(config.data_dir().ends_with(APP_DIR_NAME));
            assert!(config.settings_path().ends_with(SETTINGS_FILE_NAME));
        }
    }
}
