//! Stat tables, modifiers, and the recalculation engine.
//!
//! # Data flow
//!
//! ```text
//! [ base StatTable ]  +  [ active effects' Modifiers ]
//!          ↓ recalculate (Add → Multiply → Set → clamp)
//! [ derived StatTable ]
//! ```
//!
//! The derived table is rebuilt from scratch after every registry mutation;
//! nothing here accumulates hidden state between calls.

mod kind;
mod modifier;
mod recalc;
mod table;

pub use kind::StatKind;
pub use modifier::{Modifier, ModifierOp};
pub use recalc::recalculate;
pub use table::StatTable;
