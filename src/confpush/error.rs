use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfpushError {
    #[error("Cannot read {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to launch '{bin}': {source}")]
    ToolSpawn {
        bin: String,
        source: std::io::Error,
    },

    #[error("Command failed: {command}")]
    ToolFailed {
        command: String,
        /// Exit code of the external tool, if it exited normally.
        code: Option<i32>,
    },
}

pub type Result<T> = std::result::Result<T, ConfpushError>;
