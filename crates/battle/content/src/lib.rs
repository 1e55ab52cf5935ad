//! Data-driven battle content and loaders.
//!
//! This crate houses the character kits and provides loaders for RON/TOML
//! data files:
//! - Shared effect constructors (stuns, bleeds, regens)
//! - Per-character ability kits expressed against `battle-core`
//! - Battle rosters (data-driven via RON)
//! - Battle tuning tables (data-driven via TOML)
//!
//! Content assembles `battle-core` values; it never mutates battle state
//! directly. All loaders use battle-core types with serde for RON/TOML
//! deserialization.

pub mod effects;
pub mod kits;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{RosterLoader, TablesLoader};
