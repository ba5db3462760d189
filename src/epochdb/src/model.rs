//! Domain model for the bestiary content pipeline.
//!
//! Authoring-time records (creatures and their attack lists) and the typed
//! rows of the static reference tables. Everything here is immutable for the
//! duration of one export call; field names map onto the camelCase keys used
//! by the browser authoring tool.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Warnings
// ============================================================================

/// A non-fatal degradation collected during loading or export.
///
/// The pipeline never aborts on data-quality problems; it substitutes an
/// empty table or a placeholder value and reports what happened here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A reference table file was missing or unreadable; an empty table
    /// was substituted.
    MissingReference { file: String },

    /// One entry of a reference table failed typed conversion and was
    /// skipped; the rest of the table loaded normally.
    BadTableEntry { file: String, key: String },

    /// A base attack's damage is not `<count>d<size>`; its derived variants
    /// fall back to zero damage.
    BadDiceNotation { attack: String, damage: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingReference { file } => {
                write!(f, "missing reference data file: {file}")
            }
            Warning::BadTableEntry { file, key } => {
                write!(f, "skipped malformed entry \"{key}\" in {file}")
            }
            Warning::BadDiceNotation { attack, damage } => {
                write!(
                    f,
                    "attack \"{attack}\" has unparseable damage \"{damage}\"; derived variants use 0"
                )
            }
        }
    }
}

// ============================================================================
// Reference table rows
// ============================================================================

/// One harvesting method (skinning, butchering, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestType {
    #[serde(default)]
    pub tool_needed: Option<String>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    pub base_time_seconds: i64,
}

/// One creature body part and what harvesting it yields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnatomyPart {
    #[serde(default)]
    pub default_harvest: Option<String>,
    #[serde(default)]
    pub base_drops: Vec<String>,
}

/// Which loot-modifier source set a row came from.
///
/// Both sets land in the same Loot_Modifiers table; the kind column tags
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootKind {
    Hard,
    Organic,
}

impl LootKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LootKind::Hard => "HARD",
            LootKind::Organic => "ORGANIC",
        }
    }
}

/// One loot-quality modifier row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootModifier {
    pub value_mult: f64,
    #[serde(default)]
    pub craft_quality: Option<String>,
    pub drop_weight: i64,
}

/// One name-prefix modifier, applied to every base attack
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixModifier {
    pub dice_mod: i64,
}

/// One authored base attack; the table key is the attack name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAttack {
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub base_damage: String,
    #[serde(default)]
    pub anatomy_tag: Option<String>,
}

/// One row of the fully expanded attack catalog (base or derived)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackDef {
    pub name: String,
    pub category: Option<String>,
    pub effect: Option<String>,
    pub base_damage: String,
    pub anatomy_tag: Option<String>,
}

// ============================================================================
// Authored creatures
// ============================================================================

/// One creature as authored in the browser tool.
///
/// Every field except the attack list is optional; the export substitutes
/// defaults at emission time rather than rejecting sparse records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Index into the size ladder (Tiny..Gargantuan); both historical key
    /// spellings are accepted.
    #[serde(default, rename = "sizeIdx", alias = "size_index")]
    pub size_idx: Option<i64>,
    #[serde(default)]
    pub cr: Option<f64>,
    #[serde(default)]
    pub hp: Option<i64>,
    #[serde(default)]
    pub ac: Option<i64>,
    #[serde(default)]
    pub biomes: Vec<String>,
    #[serde(default)]
    pub attacks: Vec<String>,
}

/// The authoring-time document: the creature library edited in the browser
/// and persisted verbatim by the content store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureDocument {
    #[serde(default)]
    pub creatures: Vec<CreatureRecord>,
}

// ============================================================================
// Dice notation
// ============================================================================

/// Split dice notation `<count>d<size>` into its parts.
///
/// `"2d6"` → `Some((2, "6"))`. Anything that does not split into exactly two
/// parts on `d` with a parseable leading count is non-conforming and yields
/// `None`; callers degrade to a placeholder instead of failing.
pub fn parse_dice(notation: &str) -> Option<(i64, &str)> {
    let parts: Vec<&str> = notation.split('d').collect();
    if parts.len() != 2 {
        return None;
    }
    let count = parts[0].parse::<i64>().ok()?;
    Some((count, parts[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dice_well_formed() {
        assert_eq!(parse_dice("2d6"), Some((2, "6")));
        assert_eq!(parse_dice("1d8"), Some((1, "8")));
        assert_eq!(parse_dice("10d12"), Some((10, "12")));
    }

    #[test]
    fn test_parse_dice_rejects_non_conforming() {
        assert_eq!(parse_dice("heavy"), None);
        assert_eq!(parse_dice(""), None);
        assert_eq!(parse_dice("d6"), None);
        assert_eq!(parse_dice("2d6d4"), None);
        assert_eq!(parse_dice("xd6"), None);
    }

    #[test]
    fn test_creature_accepts_both_size_spellings() {
        let a: CreatureRecord = serde_json::from_str(r#"{"sizeIdx": 3}"#).unwrap();
        let b: CreatureRecord = serde_json::from_str(r#"{"size_index": 3}"#).unwrap();
        assert_eq!(a.size_idx, Some(3));
        assert_eq!(b.size_idx, Some(3));
    }

    #[test]
    fn test_sparse_creature_deserializes() {
        let c: CreatureRecord = serde_json::from_str(r#"{"name": "Dire Wolf"}"#).unwrap();
        assert_eq!(c.name.as_deref(), Some("Dire Wolf"));
        assert!(c.id.is_none());
        assert!(c.attacks.is_empty());
        assert!(c.biomes.is_empty());
    }

    #[test]
    fn test_base_attack_type_key_maps_to_category() {
        let atk: BaseAttack = serde_json::from_str(
            r#"{"type": "physical", "effect": "pierce", "baseDamage": "1d8", "anatomyTag": "jaw"}"#,
        )
        .unwrap();
        assert_eq!(atk.category.as_deref(), Some("physical"));
        assert_eq!(atk.base_damage, "1d8");
        assert_eq!(atk.anatomy_tag.as_deref(), Some("jaw"));
    }
}
