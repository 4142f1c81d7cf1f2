//! Reading and writing config files in the format their extension names

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// On-disk serialization format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format of a config file from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    pub fn parse(self, content: &str) -> Result<Value> {
        let value: Value = match self {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }

    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            ConfigFormat::Json => {
                let mut content = serde_json::to_string_pretty(value)?;
                content.push('\n');
                Ok(content)
            }
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Key-value persistence of config documents, keyed by path
pub trait ConfigStore {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<Value>;

    fn write(&self, path: &Path, value: &Value) -> Result<()>;
}

/// Store backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl ConfigStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<Value> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        format.parse(&content)
    }

    fn write(&self, path: &Path, value: &Value) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        fs::write(path, format.render(value)?)?;
        Ok(())
    }
}
