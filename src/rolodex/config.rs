use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// How birthday proximity is measured. See [`crate::commands::birthdays`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BirthdayMode {
    #[default]
    DayOfMonth,
    Calendar,
}

/// Configuration for rolodex, stored as `config.json` in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    #[serde(default)]
    pub birthday_mode: BirthdayMode,
}

impl RolodexConfig {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rolodex", "rolodex")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RolodexError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            RolodexConfig::default().birthday_mode,
            BirthdayMode::DayOfMonth
        );
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = RolodexConfig::load(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let config = RolodexConfig {
            birthday_mode: BirthdayMode::Calendar,
        };
        config.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"calendar\""));
        assert_eq!(RolodexConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: RolodexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.birthday_mode, BirthdayMode::DayOfMonth);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            RolodexConfig::load(&path),
            Err(RolodexError::Config(_))
        ));
    }
}
