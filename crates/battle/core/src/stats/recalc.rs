//! Stat recalculation engine.
//!
//! Rebuilds a character's derived stat table from base stats plus every
//! modifier contributed by active effects. Pure and idempotent: two calls
//! with the same inputs produce bit-identical tables.

use tracing::warn;

use crate::effect::Effect;

use super::modifier::ModifierOp;
use super::table::StatTable;

/// Recompute derived stats from base stats and active effects.
///
/// Application order is fixed regardless of effect insertion order elsewhere:
/// all `Add` modifiers are summed first, then `Multiply` modifiers compound in
/// insertion order (buffs before debuffs, each applied once per stack), then
/// `Set` modifiers overwrite with last-one-wins. The result is clamped to the
/// table invariants.
///
/// Malformed modifiers (non-finite values, or targets the pipeline owns such
/// as current HP) are logged and skipped; one bad modifier never corrupts the
/// rest of the table.
pub fn recalculate<'a>(
    base: &StatTable,
    effects: impl IntoIterator<Item = &'a Effect> + Clone,
) -> StatTable {
    let mut table = base.clone();

    for pass in [ModifierOp::Add, ModifierOp::Multiply, ModifierOp::Set] {
        for effect in effects.clone() {
            for modifier in &effect.modifiers {
                if modifier.op != pass {
                    continue;
                }
                if !modifier.value.is_finite() {
                    warn!(
                        effect = %effect.id,
                        stat = %modifier.stat,
                        value = modifier.value,
                        "skipping non-finite modifier"
                    );
                    continue;
                }
                if modifier.stat.is_current_resource() {
                    warn!(
                        effect = %effect.id,
                        stat = %modifier.stat,
                        "skipping modifier targeting a current resource"
                    );
                    continue;
                }

                let current = table.get(modifier.stat);
                let next = match modifier.op {
                    // Additive bonuses scale with the stack count.
                    ModifierOp::Add => current + modifier.value * effect.stacks as f64,
                    // Multipliers compound once per stack.
                    ModifierOp::Multiply => current * modifier.value.powi(effect.stacks as i32),
                    // Overrides ignore stacks; the last one wins.
                    ModifierOp::Set => modifier.value,
                };
                table.set(modifier.stat, next);
            }
        }
    }

    table.clamp();
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;
    use crate::stats::{Modifier, StatKind};

    fn base() -> StatTable {
        StatTable {
            max_hp: 1000.0,
            current_hp: 1000.0,
            physical_damage: 100.0,
            armor: 20.0,
            crit_chance: 0.1,
            ..StatTable::default()
        }
    }

    #[test]
    fn adds_apply_before_multiplies_and_sets_win_last() {
        let buff = Effect::buff("war_banner", "War Banner", 3)
            .with_modifier(Modifier::add(StatKind::PhysicalDamage, 50.0))
            .with_modifier(Modifier::multiply(StatKind::PhysicalDamage, 2.0));
        let curse = Effect::debuff("null_field", "Null Field", 2)
            .with_modifier(Modifier::set(StatKind::PhysicalDamage, 1.0));

        let table = recalculate(&base(), [&buff, &curse]);
        // (100 + 50) * 2 would be 300, but the set modifier wins.
        assert_eq!(table.physical_damage, 1.0);

        let table = recalculate(&base(), [&buff]);
        assert_eq!(table.physical_damage, 300.0);
    }

    #[test]
    fn stacked_adds_scale_and_stacked_multiplies_compound() {
        let mut venom = Effect::debuff("venom", "Venom", 3)
            .with_modifier(Modifier::add(StatKind::Armor, -5.0))
            .with_modifier(Modifier::multiply(StatKind::PhysicalDamage, 0.9));
        venom.stacks = 3;

        let table = recalculate(&base(), [&venom]);
        assert_eq!(table.armor, 5.0);
        assert!((table.physical_damage - 100.0 * 0.9_f64.powi(3)).abs() < 1e-9);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let buff = Effect::buff("focus", "Focus", 2)
            .with_modifier(Modifier::add(StatKind::CritChance, 0.25))
            .with_modifier(Modifier::multiply(StatKind::MaxHp, 1.1));

        let first = recalculate(&base(), [&buff]);
        let second = recalculate(&base(), [&buff]);
        assert_eq!(first, second);
    }

    #[test]
    fn chance_stats_clamp_to_unit_interval() {
        let lucky = Effect::buff("all_in", "All In", 1)
            .with_modifier(Modifier::add(StatKind::CritChance, 5.0));

        let table = recalculate(&base(), [&lucky]);
        assert_eq!(table.crit_chance, 1.0);
    }

    #[test]
    fn malformed_modifiers_are_skipped_without_corrupting_the_table() {
        let broken = Effect::buff("glitch", "Glitch", 1)
            .with_modifier(Modifier::add(StatKind::Armor, f64::NAN))
            .with_modifier(Modifier::add(StatKind::CurrentHp, -500.0))
            .with_modifier(Modifier::add(StatKind::Armor, 10.0));

        let table = recalculate(&base(), [&broken]);
        assert_eq!(table.armor, 30.0);
        assert_eq!(table.current_hp, 1000.0);
    }
}
