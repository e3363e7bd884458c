//! Content loaders for reading gameplay configs from files.
//!
//! Every file is parsed over the default preset (`#[serde(default)]` on all
//! config structs), so a data file only lists the values it changes.

pub mod config;
pub mod presets;

pub use config::{ConfigFormat, ConfigLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
