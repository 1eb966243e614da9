use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;

/// Match settings, loadable from TOML.
///
/// ```toml
/// name = "Evening series"
/// rounds = 20
/// max_plies = 300
/// seed = 7
/// standings_path = "standings.json"
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    /// Rounds to play in a match
    pub rounds: u32,
    /// Plies after which a round is drawn
    pub max_plies: u32,
    /// Seed for the opening toss and engines; random when absent
    pub seed: Option<u64>,
    pub standings_path: PathBuf,
    /// Print one line per finished round
    pub verbose: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            name: "Lines of Action".to_string(),
            rounds: 10,
            max_plies: 400,
            seed: None,
            standings_path: PathBuf::from("standings.json"),
            verbose: true,
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: TournamentConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }
        if self.rounds == 0 {
            return Err(ConfigError::Validation("rounds must be > 0".into()));
        }
        if self.max_plies == 0 {
            return Err(ConfigError::Validation("max_plies must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
