//! jobpath - map pipeline scripts to remote job paths
//!
//! This is the library interface for jobpath. It reads and writes the
//! per-script sidecar config and resolves a script's buildable name from
//! its folder override and the nearest directory-level global config.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod workspace;

pub use config::{ConfigStore, FsStore, GlobalConfigRecord, PipelineConfigRecord};
pub use error::Error;
pub use pipeline::PipelineConfig;
pub use workspace::{Workspace, WorkspaceRoots};
