//! Shell configuration.
//!
//! Loaded from `~/.config/inodefs/shell.ron` unless a path is given on the
//! command line. Every field is optional:
//!
//! ```ron
//! (
//!     default_permissions: "rw",
//!     directories: ["/home/user", "/tmp"],
//!     log_level: "info",
//!     show_octal: true,
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Permission string given to files made with "Create File".
    pub default_permissions: String,
    /// Directories that exist before the first prompt.
    pub directories: Vec<String>,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Print the numeric form next to permission strings.
    pub show_octal: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_permissions: inodefs_kernel::DEFAULT_PERMISSIONS.to_string(),
            directories: Vec::new(),
            log_level: "warn".to_string(),
            show_octal: true,
        }
    }
}

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Get the default config path (~/.config/inodefs/shell.ron).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("inodefs").join("shell.ron"))
}

impl ShellConfig {
    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&text)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.default_permissions, "rw");
        assert!(config.directories.is_empty());
        assert!(config.show_octal);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"(directories: ["/home/user", "/tmp"], show_octal: false)"#).unwrap();

        let config = ShellConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.directories, ["/home/user", "/tmp"]);
        assert!(!config.show_octal);
        assert_eq!(config.default_permissions, "rw");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.ron");
        std::fs::write(
            &path,
            r#"(
                default_permissions: "rwx",
                directories: [],
                log_level: "debug",
                show_octal: true,
            )"#,
        )
        .unwrap();

        let config = ShellConfig::load_from(&path).unwrap();
        assert_eq!(config.default_permissions, "rwx");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(Some(&dir.path().join("absent.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(directories: 42)").unwrap();
        let err = ShellConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }
}
