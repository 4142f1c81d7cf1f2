//! Per-script pipeline configuration and job path resolution

pub mod discovery;
pub mod job_path;

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFormat, ConfigStore, FsStore, PipelineConfigRecord};
use crate::error::{Error, Result};
use crate::workspace::WorkspaceRoots;

pub use discovery::{DiscoveredConfig, GLOBAL_CONFIG_FILENAME, LEGACY_GLOBAL_CONFIG_FILENAME};

/// Sidecar configuration of a single pipeline script
#[derive(Debug, Clone)]
pub struct PipelineConfig<S: ConfigStore = FsStore> {
    store: S,
    path: PathBuf,
    script_dir: PathBuf,
    record: PipelineConfigRecord,
}

impl PipelineConfig<FsStore> {
    /// Open the sidecar of `script_path` on the local filesystem.
    ///
    /// A default sidecar is written when none exists or `overwrite` is set.
    pub fn open(script_path: &Path, overwrite: bool) -> Result<Self> {
        Self::with_store(FsStore, script_path, overwrite)
    }
}

impl<S: ConfigStore> PipelineConfig<S> {
    /// Open the sidecar of `script_path` through `store`.
    ///
    /// A relative `script_path` is resolved against the current directory.
    pub fn with_store(store: S, script_path: &Path, overwrite: bool) -> Result<Self> {
        let name = script_name(script_path)?;
        let script_path = &job_path::absolutize(script_path)?;
        let script_dir = script_dir(script_path);
        let path = Self::path_from_script(&store, script_path)?;

        if store.exists(&path) && !overwrite {
            let record = load_record(&store, &path)?;
            return Ok(Self {
                store,
                path,
                script_dir,
                record,
            });
        }

        // New sidecars are json unless an existing one is being overwritten
        let path = if store.exists(&path) {
            path
        } else {
            sidecar_path(script_path, ConfigFormat::Json)?
        };

        let config = Self {
            store,
            path,
            script_dir,
            record: PipelineConfigRecord::new(name),
        };
        config.save()?;
        tracing::info!("Created pipeline config: {}", config.path.display());
        Ok(config)
    }

    /// Wrap an in-memory record without touching its sidecar
    pub fn from_record(store: S, script_path: &Path, record: PipelineConfigRecord) -> Result<Self> {
        script_name(script_path)?;
        let script_path = &job_path::absolutize(script_path)?;
        let path = Self::path_from_script(&store, script_path)?;
        Ok(Self {
            store,
            path,
            script_dir: script_dir(script_path),
            record,
        })
    }

    /// Sidecar path for a script: the json file if it exists, otherwise yaml
    pub fn path_from_script(store: &S, script_path: &Path) -> Result<PathBuf> {
        let json = sidecar_path(script_path, ConfigFormat::Json)?;
        if store.exists(&json) {
            return Ok(json);
        }
        sidecar_path(script_path, ConfigFormat::Yaml)
    }

    /// Whether a sidecar exists for a script
    pub fn exists(store: &S, script_path: &Path) -> Result<bool> {
        let path = Self::path_from_script(store, script_path)?;
        Ok(store.exists(&path))
    }

    /// Write the record to its sidecar
    pub fn save(&self) -> Result<()> {
        let value = serde_json::to_value(&self.record)?;
        self.store.write(&self.path, &value)
    }

    /// Reload the record from its sidecar
    pub fn update(&mut self) -> Result<()> {
        self.record = load_record(&self.store, &self.path)?;
        Ok(())
    }

    /// Fully-qualified job path for this script.
    ///
    /// With exactly one workspace root, the nearest valid global config
    /// between the script and the root contributes its prefix, and an unset
    /// folder is derived from where that config was found. Every call checks
    /// the filesystem again.
    pub fn buildable_name<W: WorkspaceRoots + ?Sized>(&self, workspace: &W) -> String {
        tracing::debug!("Resolving job path from {}", self.script_dir.display());

        let discovered = workspace
            .single_root()
            .and_then(|root| discovery::discover(&self.store, &self.script_dir, root));

        let folder = match self.record.folder_override() {
            Some(folder) => folder.to_string(),
            None => discovered
                .as_ref()
                .map(|found| job_path::relative_folder(&found.dir, &self.script_dir))
                .unwrap_or_default(),
        };

        job_path::join_under(
            discovered.as_ref().map(|found| found.prefix.as_str()),
            [folder.as_str(), self.record.name.as_str()],
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    pub fn to_record(&self) -> PipelineConfigRecord {
        self.record.clone()
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn folder(&self) -> Option<&str> {
        self.record.folder.as_deref()
    }

    pub fn params(&self) -> Option<&Value> {
        self.record.params.as_ref()
    }

    pub fn interactive_input_override(&self) -> Option<&Value> {
        self.record.interactive_input_override.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.record.name = name.into();
    }

    pub fn set_folder(&mut self, folder: Option<String>) {
        self.record.folder = folder;
    }

    pub fn set_params(&mut self, params: Option<Value>) {
        self.record.params = params;
    }

    pub fn set_interactive_input_override(&mut self, value: Option<Value>) {
        self.record.interactive_input_override = value;
    }
}

fn script_name(script_path: &Path) -> Result<String> {
    script_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidScriptPath(script_path.to_path_buf()))
}

fn script_dir(script_path: &Path) -> PathBuf {
    script_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// `.<name>.config.<ext>` next to the script
fn sidecar_path(script_path: &Path, format: ConfigFormat) -> Result<PathBuf> {
    let name = script_name(script_path)?;
    let file_name = format!(".{}.config.{}", name, format.extension());
    Ok(script_dir(script_path).join(file_name))
}

fn load_record<S: ConfigStore + ?Sized>(store: &S, path: &Path) -> Result<PipelineConfigRecord> {
    let value = store.read(path)?;
    serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
