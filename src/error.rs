//! Error types for jobpath

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format for {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid script path: {0:?}")]
    InvalidScriptPath(PathBuf),

    #[error("Invalid pipeline config at {path:?}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
