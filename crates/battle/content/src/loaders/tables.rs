//! Battle tuning table loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle tuning parameters from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load a [`BattleConfig`] from a TOML file. Missing keys fall back to
    /// the built-in defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> LoadResult<BattleConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse tables TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_tables_fall_back_to_defaults() {
        let config = TablesLoader::from_str("default_crit_damage = 2.5").expect("should parse");
        assert_eq!(config.default_crit_damage, 2.5);
        assert_eq!(
            config.max_follow_up_delay,
            BattleConfig::DEFAULT_MAX_FOLLOW_UP_DELAY
        );
    }

    #[test]
    fn empty_tables_are_the_defaults() {
        let config = TablesLoader::from_str("").expect("should parse");
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"default_crit_damage = 1.75\nmax_follow_up_delay = 2\n")
            .expect("write tables");

        let config = TablesLoader::load(file.path()).expect("tables should load");
        assert_eq!(config.default_crit_damage, 1.75);
        assert_eq!(config.max_follow_up_delay, 2);
    }
}
