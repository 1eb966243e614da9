use std::path::PathBuf;

use loa_core::RoundError;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Errors reading or writing saved standings.
#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors driving a tournament from round to round.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("round {0} is still in progress")]
    RoundInProgress(u32),

    #[error("round {0} was handed back before it finished")]
    RoundNotFinished(u32),

    #[error("player {0:?} is not automated and cannot play an unattended match")]
    HumanPlayer(String),

    #[error("round setup failed: {0}")]
    Round(#[from] RoundError),
}
