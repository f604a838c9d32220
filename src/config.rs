// Shell configuration loaded from YAML

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "tasknotes";
const CONFIG_FILE_NAME: &str = "config.yml";

/// Presentation settings for the shell
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trim each comma-separated tag and drop empty ones
    pub trim_tags: bool,
    /// Color success and warning messages
    pub color: bool,
    /// Tracing filter directive, e.g. "debug" or "tasknotes=trace"
    pub log_level: Option<String>,
    /// Shown by `show-tasks` and friends when nothing matches
    pub tasks_placeholder: String,
    /// Shown by `show-notes` when there are no notes
    pub notes_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trim_tags: false,
            color: true,
            log_level: None,
            tasks_placeholder: "No tasks available.".to_string(),
            notes_placeholder: "No notes available.".to_string(),
        }
    }
}

impl Config {
    /// Default config location: `<config_dir>/tasknotes/config.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a config file that must exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load an explicit config file, or fall back to the default location
    ///
    /// An explicit path must exist. A missing file at the default location just
    /// means defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match &self.log_level {
            Some(level) if level.trim().is_empty() => Err(eyre!("log_level cannot be empty")),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.trim_tags);
        assert!(config.color);
        assert!(config.log_level.is_none());
        assert_eq!(config.tasks_placeholder, "No tasks available.");
        assert_eq!(config.notes_placeholder, "No notes available.");
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "trim_tags: true\nlog_level: debug\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.trim_tags);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        // Unset keys keep their defaults
        assert!(config.color);
        assert_eq!(config.notes_placeholder, "No notes available.");
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            r#"trim_tags: false
color: false
tasks_placeholder: "Nothing to do"
notes_placeholder: "Empty notebook"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.color);
        assert_eq!(config.tasks_placeholder, "Nothing to do");
        assert_eq!(config.notes_placeholder, "Empty notebook");
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "\n").unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = Config::load_or_default(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "trim_tags: [not, a, bool]\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config file"));
    }

    #[test]
    fn test_blank_log_level_rejected() {
        assert!(Config::parse("log_level: \"  \"\n").is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("tasknotes/config.yml"));
        }
    }
}
