//! Global tripcheck configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::DirHolidaySource;
use crate::store::JsonFileTripStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/tripcheck";
static DEFAULT_COUNTRY: &str = "US";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Configuration at ~/.config/tripcheck/config.toml
///
/// Any key can be overridden with a `TRIPCHECK_` environment variable,
/// e.g. `TRIPCHECK_DEFAULT_COUNTRY=DE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripcheckConfig {
    /// Where trips.json lives
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Provider-format holiday files; defaults to `<data_dir>/holidays`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays_dir: Option<PathBuf>,

    #[serde(default = "default_country")]
    pub default_country: String,
}

impl Default for TripcheckConfig {
    fn default() -> Self {
        TripcheckConfig {
            data_dir: default_data_dir(),
            holidays_dir: None,
            default_country: default_country(),
        }
    }
}

impl TripcheckConfig {
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError("Could not determine config directory".into()))?
            .join("tripcheck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first if
    /// no config file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix("TRIPCHECK"))
    }

    /// Load `path`, letting `env` override any key it sets.
    pub fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| ConfigError(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn holidays_path(&self) -> PathBuf {
        match &self.holidays_dir {
            Some(dir) => expand(dir),
            None => self.data_path().join("holidays"),
        }
    }

    pub fn trip_store(&self) -> JsonFileTripStore {
        JsonFileTripStore::in_dir(&self.data_path())
    }

    pub fn holiday_source(&self) -> DirHolidaySource {
        DirHolidaySource::new(self.holidays_path())
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError(format!("Could not write config file: {e}")))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let contents = format!(
            "\
# tripcheck configuration

# Where your trips are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Public holiday JSON files (<dir>/<year>/<CC>.json), default <data_dir>/holidays:
# holidays_dir = \"~/holidays\"

# Country to check trips against:
# default_country = \"{DEFAULT_COUNTRY}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ConfigError(format!("Could not write config file: {e}")))?;

        tracing::info!(path = %path.display(), "created default config");
        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
