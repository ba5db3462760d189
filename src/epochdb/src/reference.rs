//! Reference-data loading.
//!
//! Six named lookup tables read from a static data directory. Every export
//! call loads a fresh snapshot; a missing or unparseable file degrades to an
//! empty table with a warning and never aborts the export.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::model::{
    AnatomyPart, BaseAttack, HarvestType, LootModifier, PrefixModifier, Warning,
};

/// An ordered lookup table keyed by id.
///
/// Order is the authoring order of the JSON object and is load-bearing: base
/// attacks are expanded in table order, and prefix order decides which prefix
/// claims a colliding derived-attack name.
pub type Table<T> = Vec<(String, T)>;

pub const HARVEST_TYPES_FILE: &str = "harvest_types.json";
pub const ANATOMY_PARTS_FILE: &str = "anatomy_parts.json";
pub const HARD_LOOT_FILE: &str = "hard_loot_modifiers.json";
pub const ORGANIC_LOOT_FILE: &str = "organic_loot_modifiers.json";
pub const BASE_ATTACKS_FILE: &str = "base_attacks.json";
pub const PREFIXES_FILE: &str = "prefixes.json";

/// One immutable snapshot of all reference tables
#[derive(Debug, Default)]
pub struct ReferenceData {
    pub harvest_types: Table<HarvestType>,
    pub anatomy_parts: Table<AnatomyPart>,
    pub hard_loot: Table<LootModifier>,
    pub organic_loot: Table<LootModifier>,
    pub base_attacks: Table<BaseAttack>,
    pub prefixes: Table<PrefixModifier>,
}

impl ReferenceData {
    /// Load every table from `dir`.
    ///
    /// Never fails: each missing or malformed file is replaced by an empty
    /// table and reported in the returned warnings.
    pub fn load(dir: &Path) -> (Self, Vec<Warning>) {
        let mut warnings = Vec::new();
        let refs = ReferenceData {
            harvest_types: load_table(dir, HARVEST_TYPES_FILE, &mut warnings),
            anatomy_parts: load_table(dir, ANATOMY_PARTS_FILE, &mut warnings),
            hard_loot: load_table(dir, HARD_LOOT_FILE, &mut warnings),
            organic_loot: load_table(dir, ORGANIC_LOOT_FILE, &mut warnings),
            base_attacks: load_table(dir, BASE_ATTACKS_FILE, &mut warnings),
            prefixes: load_table(dir, PREFIXES_FILE, &mut warnings),
        };
        (refs, warnings)
    }
}

/// Read one JSON object file into an ordered table.
///
/// serde_json is built with `preserve_order`, so iteration follows the order
/// the keys appear in the file. Entries that fail typed conversion are
/// skipped individually so one bad record does not drop the whole table.
fn load_table<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    warnings: &mut Vec<Warning>,
) -> Table<T> {
    let raw = match std::fs::read_to_string(dir.join(file)) {
        Ok(raw) => raw,
        Err(_) => {
            warnings.push(Warning::MissingReference {
                file: file.to_string(),
            });
            return Vec::new();
        }
    };

    let entries: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(_) => {
            warnings.push(Warning::MissingReference {
                file: file.to_string(),
            });
            return Vec::new();
        }
    };

    let mut table = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match serde_json::from_value::<T>(value) {
            Ok(record) => table.push((key, record)),
            Err(_) => warnings.push(Warning::BadTableEntry {
                file: file.to_string(),
                key,
            }),
        }
    }
    table
}
