//! Workspace roots that bound global config discovery

use std::path::{Path, PathBuf};

/// Provides the root folders of the current workspace
pub trait WorkspaceRoots {
    fn roots(&self) -> &[PathBuf];

    /// The root when exactly one is registered. Discovery only runs then.
    fn single_root(&self) -> Option<&Path> {
        match self.roots() {
            [root] => Some(root.as_path()),
            _ => None,
        }
    }
}

/// An explicit list of workspace roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn single(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }
}

impl WorkspaceRoots for Workspace {
    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}
