//! Per-character ability kits.
//!
//! Each kit module builds its abilities and signature effects from
//! `battle-core` values. Kits are looked up by name when assembling a roster.

pub mod renee;
pub mod solenne;
pub mod varkas;

use battle_core::Ability;

/// Resolve a kit by its roster name.
pub fn kit(name: &str) -> Option<Vec<Ability>> {
    match name {
        "renee" => Some(renee::abilities()),
        "solenne" => Some(solenne::abilities()),
        "varkas" => Some(varkas::abilities()),
        _ => None,
    }
}
