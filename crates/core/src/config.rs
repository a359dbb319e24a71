//! Configuration path utilities and settings for jumprun.
//!
//! This module resolves the settings file and database locations, expanding
//! shell variables like `~`, and loads the optional YAML settings file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.jumprun/config.yml";
/// Default path for the shortcut database
const DEFAULT_DATABASE_PATH: &str = "~/.jumprun/shortcuts.db";

/// Default shell used to run shortcut commands
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Optional user settings read from `config.yml`.
///
/// Every field may be omitted; a missing file is the same as an empty one.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub database_path: Option<String>,
    pub shell: Option<String>,
}

impl Settings {
    /// Picks the shell to run commands with.
    ///
    /// The settings file wins, then `environment_shell` (normally `$SHELL`),
    /// then [`DEFAULT_SHELL`].
    pub fn shell(&self, environment_shell: Option<String>) -> String {
        self.shell
            .clone()
            .or(environment_shell)
            .filter(|shell| !shell.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use jumprun_core::config::get_config_path;
///
/// let default_path = get_config_path(&None);
/// assert!(default_path.ends_with("config.yml"));
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the database path.
///
/// The command-line argument takes precedence over the settings file, which
/// takes precedence over the default location.
pub fn get_database_path(database_path_arg: &Option<String>, settings: &Settings) -> PathBuf {
    let database_path = database_path_arg
        .as_deref()
        .or(settings.database_path.as_deref())
        .unwrap_or(DEFAULT_DATABASE_PATH);

    PathBuf::from(shellexpand::tilde(database_path).to_string())
}

/// Expands shell variables like `~` in a user supplied directory.
pub fn expand_directory(directory: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(directory).to_string())
}

/// Loads the settings file.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// YAML for [`Settings`]. A missing file yields the default settings.
pub fn load_settings(config_path: &str) -> Result<Settings> {
    if !Path::new(config_path).exists() {
        debug!("No settings file at `{}`, using defaults", config_path);
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("settings".to_string(), config_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            config_path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".jumprun/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_database_path_precedence() {
        let settings = Settings {
            database_path: Some("/from/settings.db".to_string()),
            shell: None,
        };

        let from_arg = get_database_path(&Some("/from/arg.db".to_string()), &settings);
        assert_eq!(from_arg, PathBuf::from("/from/arg.db"));

        let from_settings = get_database_path(&None, &settings);
        assert_eq!(from_settings, PathBuf::from("/from/settings.db"));

        let default = get_database_path(&None, &Settings::default());
        assert!(default.ends_with(".jumprun/shortcuts.db"));
        assert!(!default.starts_with("~"));
    }

    #[test]
    fn test_expand_directory_with_tilde() {
        let expanded = expand_directory("~/projects");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("projects"));
    }

    #[test]
    fn test_shell_precedence() {
        let configured = Settings {
            database_path: None,
            shell: Some("/bin/zsh".to_string()),
        };
        assert_eq!(configured.shell(Some("/bin/bash".to_string())), "/bin/zsh");

        let unconfigured = Settings::default();
        assert_eq!(unconfigured.shell(Some("/bin/bash".to_string())), "/bin/bash");
        assert_eq!(unconfigured.shell(None), DEFAULT_SHELL);
        assert_eq!(unconfigured.shell(Some(String::new())), DEFAULT_SHELL);
    }

    #[test]
    fn test_load_settings_missing_file() {
        let settings = load_settings("/this/path/does/not/exist.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_valid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "database_path: /tmp/jr.db\nshell: /bin/bash\n").unwrap();

        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.database_path, Some("/tmp/jr.db".to_string()));
        assert_eq!(settings.shell, Some("/bin/bash".to_string()));
    }

    #[test]
    fn test_load_settings_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "shell: [unclosed").unwrap();

        let result = load_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }
}
