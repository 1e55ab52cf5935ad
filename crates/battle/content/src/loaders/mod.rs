//! Content loaders for reading battle data from files.
//!
//! Rosters come from RON, tuning tables from TOML. Loaders deserialize
//! straight into battle-core types where possible.

pub mod roster;
pub mod tables;

pub use roster::RosterLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read file {}: {}", path.display(), e))
}
