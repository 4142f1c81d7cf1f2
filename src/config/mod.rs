//! Sidecar and global config records and how they are persisted

pub mod loader;
mod schema;

pub use loader::{ConfigFormat, ConfigStore, FsStore};
pub use schema::*;
