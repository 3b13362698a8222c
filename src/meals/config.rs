use crate::error::{MealsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "meals.json";
const DEFAULT_MAX_RATING: i32 = 5;

/// Largest rating scale `max-rating` may be set to.
pub const MAX_RATING_LIMIT: i32 = 10;

/// Configuration for meals, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealsConfig {
    /// Name of the file holding the meal list, relative to the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Highest rating the CLI accepts (ratings start at 0)
    #[serde(default = "default_max_rating")]
    pub max_rating: i32,

    /// Fill an empty journal with sample meals on first run
    #[serde(default = "default_seed")]
    pub seed_on_first_run: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_max_rating() -> i32 {
    DEFAULT_MAX_RATING
}

fn default_seed() -> bool {
    true
}

impl Default for MealsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_rating: default_max_rating(),
            seed_on_first_run: default_seed(),
        }
    }
}

/// Keys accepted by the `config` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataFile,
    MaxRating,
    SeedOnFirstRun,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::DataFile,
        ConfigKey::MaxRating,
        ConfigKey::SeedOnFirstRun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DataFile => "data-file",
            ConfigKey::MaxRating => "max-rating",
            ConfigKey::SeedOnFirstRun => "seed-on-first-run",
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = MealsError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| MealsError::Config(format!("Unknown config key: {}", s)))
    }
}

impl MealsConfig {
    /// Load config from the given directory. A missing, unreadable or
    /// malformed file gives the defaults; the last two are logged.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                let path = config_path.display();
                warn!(path = %path, error = %e, "config unreadable, using defaults");
                return Self::default();
            }
        };

        let mut config: MealsConfig = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                let path = config_path.display();
                warn!(path = %path, error = %e, "config malformed, using defaults");
                return Self::default();
            }
        };

        if !(1..=MAX_RATING_LIMIT).contains(&config.max_rating) {
            let max_rating = config.max_rating;
            warn!(max_rating, "max-rating out of range, using default");
            config.max_rating = DEFAULT_MAX_RATING;
        }
        config
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MealsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(MealsError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataFile => self.data_file.clone(),
            ConfigKey::MaxRating => self.max_rating.to_string(),
            ConfigKey::SeedOnFirstRun => self.seed_on_first_run.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DataFile => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(MealsError::Config(format!(
                        "data-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            ConfigKey::MaxRating => {
                let max: i32 = value.parse().map_err(|_| {
                    let msg = format!("max-rating must be a number, got '{}'", value);
                    MealsError::Config(msg)
                })?;
                if !(1..=MAX_RATING_LIMIT).contains(&max) {
                    return Err(MealsError::Config(format!(
                        "max-rating must be between 1 and {}, got {}",
                        MAX_RATING_LIMIT, max
                    )));
                }
                self.max_rating = max;
            }
            ConfigKey::SeedOnFirstRun => {
                self.seed_on_first_run = value.parse().map_err(|_| {
                    MealsError::Config(format!(
                        "seed-on-first-run must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MealsConfig::default();
        assert_eq!(config.data_file, "meals.json");
        assert_eq!(config.max_rating, 5);
        assert!(config.seed_on_first_run);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = MealsConfig::load(dir.path());
        assert_eq!(config, MealsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("fresh");

        let mut config = MealsConfig::default();
        config.set(ConfigKey::MaxRating, "10").unwrap();
        config.save(&target).unwrap();

        let loaded = MealsConfig::load(&target);
        assert_eq!(loaded.max_rating, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(path, r#"{"max_rating": 3}"#).unwrap();

        let config = MealsConfig::load(dir.path());
        assert_eq!(config.max_rating, 3);
        assert_eq!(config.data_file, "meals.json");
        assert!(config.seed_on_first_run);
    }

    #[test]
    fn test_key_names_parse() {
        for key in ConfigKey::ALL {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), key);
        }
        assert!("colour".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = MealsConfig::default();
        assert!(config.set(ConfigKey::MaxRating, "lots").is_err());
        assert!(config.set(ConfigKey::MaxRating, "0").is_err());
        assert!(config.set(ConfigKey::MaxRating, "11").is_err());
        assert!(config.set(ConfigKey::MaxRating, "2000000000").is_err());
        assert!(config.set(ConfigKey::SeedOnFirstRun, "maybe").is_err());
        assert!(config.set(ConfigKey::DataFile, "../elsewhere.json").is_err());
        assert_eq!(config, MealsConfig::default());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = MealsConfig::default();
        config.set(ConfigKey::SeedOnFirstRun, "false").unwrap();
        config.set(ConfigKey::DataFile, "journal.json").unwrap();
        assert_eq!(config.get(ConfigKey::SeedOnFirstRun), "false");
        assert_eq!(config.get(ConfigKey::DataFile), "journal.json");
    }

    #[test]
    fn test_max_rating_accepts_up_to_limit() {
        let mut config = MealsConfig::default();
        config.set(ConfigKey::MaxRating, "10").unwrap();
        assert_eq!(config.max_rating, MAX_RATING_LIMIT);
        config.set(ConfigKey::MaxRating, "1").unwrap();
        assert_eq!(config.max_rating, 1);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ broken").unwrap();

        assert_eq!(MealsConfig::load(dir.path()), MealsConfig::default());
    }

    #[test]
    fn test_out_of_range_max_rating_on_disk_is_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let json = r#"{"data_file": "j.json", "max_rating": 2000000000}"#;
        fs::write(path, json).unwrap();

        let config = MealsConfig::load(dir.path());
        assert_eq!(config.max_rating, DEFAULT_MAX_RATING);
        assert_eq!(config.data_file, "j.json");
    }
}
