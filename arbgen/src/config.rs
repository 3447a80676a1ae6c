//! Run configuration.
//!
//! A [`Config`] names the CSV source and where the ARB files live. It can be
//! built in code, or loaded from a TOML file:
//!
//! ```toml
//! csv_file = "csv/lang.csv"
//! arb_dir = "arb"
//! file_prefix = "intl_"
//! file_extension = ".arb"
//! ```
//!
//! Every key is optional. Relative paths in a file are resolved against the
//! directory that contains the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "arbgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSV translation table.
    pub csv_file: PathBuf,
    /// Directory holding one ARB file per language.
    pub arb_dir: PathBuf,
    /// Prepended to the language code to form a file name.
    pub file_prefix: String,
    /// Appended to the language code to form a file name, dot included.
    pub file_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_file: PathBuf::from("csv").join("lang.csv"),
            arb_dir: PathBuf::from("arb"),
            file_prefix: "intl_".to_string(),
            file_extension: ".arb".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration for a run.
    ///
    /// An explicit `path` must exist. Without one, [`CONFIG_FILE_NAME`] in the
    /// working directory is used when present, and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::read_from(path),
            None => {
                let candidate = Path::new(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    Self::read_from(candidate)
                } else {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads a TOML configuration file.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::config_file(path, Error::Io(e)))?;
        let config = Self::from_toml(&content).map_err(|e| Error::config_file(path, e))?;
        debug!(path = %path.display(), "loaded configuration");

        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    /// Parses TOML without resolving paths.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves relative paths against `base`. Absolute paths are kept.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.csv_file.is_relative() {
            self.csv_file = base.join(&self.csv_file);
        }
        if self.arb_dir.is_relative() {
            self.arb_dir = base.join(&self.arb_dir);
        }
        self
    }

    /// File name of the ARB resource for `language`: prefix, code, extension.
    pub fn arb_file_name(&self, language: &str) -> String {
        format!("{}{}{}", self.file_prefix, language, self.file_extension)
    }

    /// Full path of the ARB resource for `language`.
    pub fn arb_path(&self, language: &str) -> PathBuf {
        self.arb_dir.join(self.arb_file_name(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.csv_file, Path::new("csv").join("lang.csv"));
        assert_eq!(config.arb_file_name("en"), "intl_en.arb");
        assert_eq!(config.arb_path("fr"), Path::new("arb").join("intl_fr.arb"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("file_prefix = \"app_\"\n").unwrap();
        assert_eq!(config.arb_file_name("de"), "app_de.arb");
        assert_eq!(config.arb_dir, PathBuf::from("arb"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("arb_directory = \"out\"\n").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_read_from_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "csv_file = \"data/table.csv\"\narb_dir = \"l10n\"\nfile_extension = \".json\"\n",
        )
        .unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.csv_file, temp_dir.path().join("data/table.csv"));
        assert_eq!(
            config.arb_path("en"),
            temp_dir.path().join("l10n").join("intl_en.json")
        );
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            arb_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
        .relative_to(Path::new("/elsewhere"));
        assert_eq!(config.arb_dir, temp_dir.path());
        assert_eq!(config.csv_file, Path::new("/elsewhere/csv/lang.csv"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(Some(&temp_dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
        assert!(err.is_not_found());
    }
}
