//! Battle roster loader.
//!
//! Loads characters from RON files, resolving each entry's kit by name.

use std::path::Path;

use battle_core::{Character, CharacterId, StatTable, Team};
use serde::Deserialize;

use crate::kits;
use crate::loaders::{LoadResult, read_file};

/// One roster entry as it appears in the RON file.
#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub team: Team,
    pub stats: StatTable,
    /// Kit name resolved through [`kits::kit`].
    pub kit: String,
}

/// Loader for battle rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<RosterEntry>`. Every entry's kit name must resolve;
    /// an unknown kit fails the whole load rather than producing a
    /// half-armed character.
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> LoadResult<Vec<Character>> {
        let entries: Vec<RosterEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("failed to parse roster RON: {}", e))?;

        entries
            .into_iter()
            .map(|entry| {
                let abilities = kits::kit(&entry.kit).ok_or_else(|| {
                    anyhow::anyhow!("unknown kit '{}' for character '{}'", entry.kit, entry.name)
                })?;
                Ok(Character::new(
                    CharacterId(entry.id),
                    entry.name,
                    entry.team,
                    entry.stats,
                    abilities,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ROSTER: &str = r#"[
    (
        id: 1,
        name: "Renee",
        team: allies,
        stats: (
            max_hp: 600.0,
            current_hp: 600.0,
            max_mana: 150.0,
            current_mana: 150.0,
            physical_damage: 40.0,
            magical_damage: 60.0,
            crit_chance: 0.15,
        ),
        kit: "renee",
    ),
    (
        id: 2,
        name: "Varkas",
        team: enemies,
        stats: (
            max_hp: 900.0,
            current_hp: 900.0,
            max_mana: 120.0,
            current_mana: 120.0,
            physical_damage: 55.0,
            armor: 20.0,
        ),
        kit: "varkas",
    ),
]"#;

    #[test]
    fn roster_parses_and_resolves_kits() {
        let roster = RosterLoader::from_str(ROSTER).expect("roster should parse");
        assert_eq!(roster.len(), 2);

        let renee = &roster[0];
        assert_eq!(renee.id, CharacterId(1));
        assert_eq!(renee.team, Team::Allies);
        assert_eq!(renee.stats().max_hp, 600.0);
        assert!(renee.ability(&"moonfall".into()).is_some());

        let varkas = &roster[1];
        assert_eq!(varkas.team, Team::Enemies);
        assert_eq!(varkas.stats().armor, 20.0);
        assert!(varkas.ability(&"skull_crack".into()).is_some());
    }

    #[test]
    fn unknown_kit_fails_the_load() {
        let bad = r#"[(id: 1, name: "X", team: allies, stats: (), kit: "nobody")]"#;
        let err = RosterLoader::from_str(bad).unwrap_err();
        assert!(err.to_string().contains("unknown kit"));
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(ROSTER.as_bytes()).expect("write roster");

        let roster = RosterLoader::load(file.path()).expect("roster should load");
        assert_eq!(roster.len(), 2);
    }
}
