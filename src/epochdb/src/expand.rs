//! Attack catalog expansion.
//!
//! Derives the full attack catalog: every base attack unchanged, then one
//! variant per (base attack × prefix) pair with the damage dice recomputed.

use std::collections::HashSet;

use crate::model::{parse_dice, AttackDef, BaseAttack, PrefixModifier, Warning};

/// Expand base attacks against the prefix table.
///
/// Base attacks are emitted first in table order, then derived variants in
/// (base, prefix) table order. The derived damage is
/// `max(1, count + dice_mod)` on the original die size; a base attack whose
/// damage is not `<count>d<size>` derives `"0"` for every variant and raises
/// one warning.
///
/// Names are de-duplicated with first-writer-wins semantics, mirroring the
/// INSERT OR IGNORE the catalog is loaded with: the in-memory catalog equals
/// what the database ends up holding, and prefix authoring order decides
/// which prefix claims a colliding name.
pub fn expand_attacks(
    base_attacks: &[(String, BaseAttack)],
    prefixes: &[(String, PrefixModifier)],
) -> (Vec<AttackDef>, Vec<Warning>) {
    let mut catalog = Vec::with_capacity(base_attacks.len() * (1 + prefixes.len()));
    let mut seen: HashSet<String> = HashSet::new();
    let mut warnings = Vec::new();

    for (name, attack) in base_attacks {
        if seen.insert(name.clone()) {
            catalog.push(attack_def(name.clone(), attack, attack.base_damage.clone()));
        }
    }

    for (name, attack) in base_attacks {
        let dice = parse_dice(&attack.base_damage);
        if dice.is_none() && !prefixes.is_empty() {
            warnings.push(Warning::BadDiceNotation {
                attack: name.clone(),
                damage: attack.base_damage.clone(),
            });
        }

        for (prefix, modifier) in prefixes {
            let damage = match dice {
                Some((count, size)) => {
                    format!("{}d{}", (count + modifier.dice_mod).max(1), size)
                }
                None => "0".to_string(),
            };
            let derived_name = format!("{prefix}{name}");
            if seen.insert(derived_name.clone()) {
                catalog.push(attack_def(derived_name, attack, damage));
            }
        }
    }

    (catalog, warnings)
}

fn attack_def(name: String, base: &BaseAttack, damage: String) -> AttackDef {
    AttackDef {
        name,
        category: base.category.clone(),
        effect: base.effect.clone(),
        base_damage: damage,
        anatomy_tag: base.anatomy_tag.clone(),
    }
}
