use std::path::PathBuf;

use thiserror::Error;

/// Everything that makes a hook run end with exit status 1.
///
/// Skips (wrong tool, no failure signal) are not errors; see
/// [`crate::engine::HookOutcome`].
#[derive(Debug, Error)]
pub enum HookError {
    #[error("Error: Invalid JSON input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Error: Invalid JSON in {key}: {source}")]
    InvalidBridgeVar {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: failed to read hook input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Error writing to log: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: LogWriteError,
    },

    #[error("Error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum LogWriteError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("entry serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("home directory could not be determined")]
    HomeDirUnavailable,

    #[error("config file unreadable: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("env var invalid: {key}: {source}")]
    EnvInvalid {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
