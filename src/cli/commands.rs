//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::cli::{error, info, print_config_table, success, warn, OutputFormat};
use crate::config::{ConfigStore, FsStore, PipelineConfigRecord};
use crate::error::Error;
use crate::pipeline::{job_path, PipelineConfig};
use crate::workspace::Workspace;

/// Everything `show` reports about a script
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReport {
    pub script: PathBuf,
    pub config_path: PathBuf,
    pub buildable_name: String,
    #[serde(flatten)]
    pub record: PipelineConfigRecord,
}

/// Resolve `--workspace` arguments against the current directory
pub fn workspace_from_args(roots: &[PathBuf]) -> Result<Workspace> {
    let roots = roots
        .iter()
        .map(|root| absolute(root))
        .collect::<Result<Vec<_>>>()?;
    Ok(Workspace::new(roots))
}

/// Create the sidecar config for a script
pub fn init(script: &Path, force: bool) -> Result<()> {
    let script = absolute(script)?;

    if PipelineConfig::exists(&FsStore, &script)? && !force {
        let path = PipelineConfig::path_from_script(&FsStore, &script)?;
        warn(&format!("{} already exists", path.display()));
        info("Use --force to reset it to defaults");
        return Ok(());
    }

    let config = open(&script, force)?;
    success(&format!("Created {}", config.path().display()));
    Ok(())
}

/// Show a script's config and resolved job path
pub fn show(script: &Path, workspace: &Workspace, format: OutputFormat) -> Result<()> {
    let script = absolute(script)?;
    let config = open(&script, false)?;

    let report = ConfigReport {
        buildable_name: config.buildable_name(workspace),
        config_path: config.path().to_path_buf(),
        record: config.to_record(),
        script,
    };

    match format {
        OutputFormat::Table => {
            print_config_table(&report);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)?;
            println!("{}", yaml);
        }
    }

    Ok(())
}

/// Print only the resolved job path
pub fn name(script: &Path, workspace: &Workspace) -> Result<()> {
    let script = absolute(script)?;
    let config = open(&script, false)?;
    println!("{}", config.buildable_name(workspace));
    Ok(())
}

/// Print the sidecar path for a script
pub fn path(script: &Path) -> Result<()> {
    let script = absolute(script)?;
    let path = PipelineConfig::path_from_script(&FsStore, &script)?;
    println!("{}", path.display());

    if !FsStore.exists(&path) {
        info("Sidecar does not exist yet; run 'jobpath init <script>' to create it");
    }
    Ok(())
}

/// Change fields of a script's config and save it
pub fn set(
    script: &Path,
    name: Option<String>,
    folder: Option<String>,
    params: Option<String>,
    interactive_input_override: Option<String>,
) -> Result<()> {
    let script = absolute(script)?;
    let mut config = open(&script, false)?;

    if let Some(name) = name {
        config.set_name(name);
    }
    if let Some(folder) = folder {
        config.set_folder((!folder.is_empty()).then_some(folder));
    }
    if let Some(params) = params {
        config.set_params(parse_json_arg("params", &params)?);
    }
    if let Some(value) = interactive_input_override {
        config.set_interactive_input_override(parse_json_arg(
            "interactive-input-override",
            &value,
        )?);
    }

    config.save()?;
    success(&format!("Saved {}", config.path().display()));
    Ok(())
}

fn open(script: &Path, overwrite: bool) -> Result<PipelineConfig> {
    match PipelineConfig::open(script, overwrite) {
        Ok(config) => Ok(config),
        Err(e) => {
            error(&format!("Failed to load config for {}: {}", script.display(), e));
            Err(e.into())
        }
    }
}

/// `null` clears the field
fn parse_json_arg(field: &str, raw: &str) -> Result<Option<Value>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::Config(format!("--{} is not valid JSON: {}", field, e)))?;
    Ok((!value.is_null()).then_some(value))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    job_path::absolutize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_arg() {
        assert_eq!(
            parse_json_arg("params", r#"{"ENV": "prod"}"#).unwrap(),
            Some(json!({ "ENV": "prod" }))
        );
        assert_eq!(parse_json_arg("params", "null").unwrap(), None);
        assert!(parse_json_arg("params", "{oops").is_err());
    }

    #[test]
    fn test_report_flattens_record() {
        let report = ConfigReport {
            script: PathBuf::from("/ws/Jenkinsfile"),
            config_path: PathBuf::from("/ws/.Jenkinsfile.config.json"),
            buildable_name: "org/Jenkinsfile".to_string(),
            record: PipelineConfigRecord::new("Jenkinsfile"),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["buildableName"], "org/Jenkinsfile");
        assert_eq!(value["name"], "Jenkinsfile");
        assert_eq!(value["params"], Value::Null);
    }

    #[test]
    fn test_workspace_roots_are_absolute() {
        let workspace = workspace_from_args(&[PathBuf::from("repo")]).unwrap();
        let roots = crate::workspace::WorkspaceRoots::roots(&workspace);
        assert!(roots[0].is_absolute());
        assert!(roots[0].ends_with("repo"));
    }
}
