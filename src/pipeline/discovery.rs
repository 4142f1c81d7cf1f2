//! Global config discovery between a script and its workspace root

use std::path::{Component, Path, PathBuf};

use super::job_path::{absolutize, normalize};
use crate::config::{ConfigStore, GlobalConfigRecord};

/// File name of the directory-level config
pub const GLOBAL_CONFIG_FILENAME: &str = ".jenkins-jack.config.yaml";

/// Older json-only file name, still read when the yaml file is absent or invalid
pub const LEGACY_GLOBAL_CONFIG_FILENAME: &str = ".jenkins-jack.config.json";

/// A global config that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredConfig {
    /// Directory holding the config file
    pub dir: PathBuf,

    /// Position of `dir` in the candidate list, 0 being the script's own folder
    pub index: usize,

    pub prefix: String,
}

/// Ordered directories to check, starting at `script_dir` and stepping one
/// segment at a time along the relative path to `root`.
pub fn candidate_dirs(script_dir: &Path, root: &Path) -> Vec<PathBuf> {
    let from = normalize(script_dir);
    let to = normalize(root);
    let from_components: Vec<Component> = from.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    let common = from_components
        .iter()
        .zip(&to_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut current = from.clone();
    let mut candidates = vec![current.clone()];

    for _ in common..from_components.len() {
        current.pop();
        candidates.push(current.clone());
    }
    for component in &to_components[common..] {
        current.push(component.as_os_str());
        candidates.push(current.clone());
    }

    candidates
}

/// Find the first candidate directory holding a valid global config.
///
/// Relative paths are resolved against the current directory first.
pub fn discover<S: ConfigStore + ?Sized>(
    store: &S,
    script_dir: &Path,
    root: &Path,
) -> Option<DiscoveredConfig> {
    let (script_dir, root) = match (absolutize(script_dir), absolutize(root)) {
        (Ok(script_dir), Ok(root)) => (script_dir, root),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Skipping global config discovery: {}", e);
            return None;
        }
    };

    candidate_dirs(&script_dir, &root)
        .into_iter()
        .enumerate()
        .find_map(|(index, dir)| {
            let prefix = [GLOBAL_CONFIG_FILENAME, LEGACY_GLOBAL_CONFIG_FILENAME]
                .iter()
                .find_map(|file_name| load_prefix(store, &dir.join(file_name)))?;
            tracing::debug!("Found global config in {}", dir.display());
            Some(DiscoveredConfig { dir, index, prefix })
        })
}

/// Load the global config at `path` and return its prefix if it validates.
///
/// Unreadable or invalid files count as absent.
fn load_prefix<S: ConfigStore + ?Sized>(store: &S, path: &Path) -> Option<String> {
    tracing::debug!("Looking for global config at {}", path.display());

    if !store.exists(path) {
        return None;
    }

    let value = match store.read(path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring unreadable global config {}: {}", path.display(), e);
            return None;
        }
    };

    let config = match GlobalConfigRecord::from_value(value) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring invalid global config {}: {}", path.display(), e);
            return None;
        }
    };

    match config.prefix() {
        Some(prefix) => Some(prefix.to_string()),
        None => {
            tracing::warn!(
                "Ignoring global config {}: job.prefix is missing",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_walk_up_to_root() {
        let candidates = candidate_dirs(Path::new("/ws/a/b"), Path::new("/ws"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/ws/a/b"),
                PathBuf::from("/ws/a"),
                PathBuf::from("/ws"),
            ]
        );
    }

    #[test]
    fn test_candidates_at_root() {
        assert_eq!(
            candidate_dirs(Path::new("/ws"), Path::new("/ws")),
            vec![PathBuf::from("/ws")]
        );
    }

    #[test]
    fn test_candidates_outside_root_go_up_then_down() {
        let candidates = candidate_dirs(Path::new("/other/x"), Path::new("/ws"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/other/x"),
                PathBuf::from("/other"),
                PathBuf::from("/"),
                PathBuf::from("/ws"),
            ]
        );
    }

    #[test]
    fn test_discover_skips_invalid_closer_config() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let script_dir = root.join("a/b");
        fs::create_dir_all(&script_dir).unwrap();

        fs::write(root.join("a").join(GLOBAL_CONFIG_FILENAME), "job:\n  prefix: 12\n").unwrap();
        fs::write(root.join(GLOBAL_CONFIG_FILENAME), "job:\n  prefix: org\n").unwrap();

        let found = discover(&FsStore, &script_dir, root).unwrap();
        assert_eq!(found.index, 2);
        assert_eq!(found.dir, root.to_path_buf());
        assert_eq!(found.prefix, "org");
    }

    #[test]
    fn test_discover_reads_legacy_json_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let script_dir = root.join("a");
        fs::create_dir_all(&script_dir).unwrap();
        fs::write(
            root.join(LEGACY_GLOBAL_CONFIG_FILENAME),
            r#"{"baseFolder": "legacy"}"#,
        )
        .unwrap();

        let found = discover(&FsStore, &script_dir, root).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.prefix, "legacy");
    }

    #[test]
    fn test_discover_prefers_yaml_over_legacy_json() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join(GLOBAL_CONFIG_FILENAME), "job:\n  prefix: current\n").unwrap();
        fs::write(
            root.join(LEGACY_GLOBAL_CONFIG_FILENAME),
            r#"{"baseFolder": "legacy"}"#,
        )
        .unwrap();

        assert_eq!(discover(&FsStore, root, root).unwrap().prefix, "current");
    }

    #[test]
    fn test_discover_ignores_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join(GLOBAL_CONFIG_FILENAME), "job: [unclosed").unwrap();

        assert_eq!(discover(&FsStore, root, root), None);
    }
}
