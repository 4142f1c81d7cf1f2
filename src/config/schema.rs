//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-script sidecar record stored next to a pipeline script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfigRecord {
    /// Job name, defaults to the script's base name
    pub name: String,

    /// Build parameters, passed through untouched. Written as `null` when unset.
    #[serde(default)]
    pub params: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_input_override: Option<Value>,

    /// Folder placement override. When unset or empty the folder is derived
    /// from where the global config was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl PipelineConfigRecord {
    /// Create a default record for a job name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            interactive_input_override: None,
            folder: None,
        }
    }

    /// Folder override, treating an empty string as unset
    pub fn folder_override(&self) -> Option<&str> {
        self.folder.as_deref().filter(|folder| !folder.is_empty())
    }
}

/// Directory-level config shared by every script below it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfigRecord {
    #[serde(default)]
    pub job: Option<JobConfig>,

    /// Older file shape carried the prefix here. Only read when `job` is absent.
    #[serde(default, rename = "baseFolder", skip_serializing_if = "Option::is_none")]
    pub base_folder: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub prefix: String,
}

impl GlobalConfigRecord {
    /// Build from an already parsed document.
    ///
    /// Fails when `job` is present but `job.prefix` is missing or not a string.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The job prefix this config contributes, if it is usable
    pub fn prefix(&self) -> Option<&str> {
        match &self.job {
            Some(job) => Some(job.prefix.as_str()),
            None => self.base_folder.as_ref().and_then(Value::as_str),
        }
    }
}
