//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::listing::ListingOptions;

/// Top-level application configuration.
///
/// All fields have defaults so twinpane works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub panes: PanesConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::OperationFailed`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, falling back to defaults when it is missing or broken.
    ///
    /// A missing file is normal; any other problem is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Listing settings shared by both panes.
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.general.show_hidden,
        }
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            confirm_delete: true,
        }
    }
}

/// Start directories. Unset panes open at the first filesystem root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_general() {
        let config = Config::default();

        assert!(!config.general.show_hidden);
        assert!(config.general.confirm_delete);
        assert!(config.panes.left.is_none());
        assert!(config.panes.right.is_none());
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
show_hidden = true
confirm_delete = false

[panes]
left = "/srv/left"
right = "/srv/right"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert!(config.general.show_hidden);
        assert!(!config.general.confirm_delete);
        assert_eq!(config.panes.left, Some(PathBuf::from("/srv/left")));
        assert_eq!(config.panes.right, Some(PathBuf::from("/srv/right")));
        assert!(config.listing_options().show_hidden);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[panes]\nleft = \"/data\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert!(!config.general.show_hidden);
        assert!(config.general.confirm_delete);
        assert_eq!(config.panes.left, Some(PathBuf::from("/data")));
        assert!(config.panes.right.is_none());
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.listing_options(), ListingOptions::default());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn load_or_default_tolerates_missing_and_broken_files() {
        let tmp = TempDir::new().unwrap();
        let missing = Config::load_or_default(&tmp.path().join("missing.toml"));
        assert!(missing.general.confirm_delete);

        let path = tmp.path().join("broken.toml");
        fs::write(&path, "general = [").unwrap();
        let broken = Config::load_or_default(&path);
        assert!(!broken.general.show_hidden);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.general.show_hidden = true;
        config.panes.right = Some(PathBuf::from("/opt"));

        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert!(back.general.show_hidden);
        assert_eq!(back.panes.right, Some(PathBuf::from("/opt")));
    }
}
