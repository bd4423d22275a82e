//! Content loaders for reading level and AI data from files.
//!
//! Levels are RON, AI tuning is TOML. Three levels ship embedded in the
//! crate and parse through the same path as files on disk.

pub mod builtin;
pub mod config;
pub mod level;

pub use builtin::{BUILTIN_LEVEL_COUNT, builtin_level};
pub use config::ConfigLoader;
pub use level::LevelLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
