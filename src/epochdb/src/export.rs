//! The export pipeline: authored creature document + reference snapshot →
//! normalized SQL snapshot for the game engine.
//!
//! `export_sql` is pure given its inputs and the clock: repeated calls with
//! the same document and reference data produce byte-identical SQL except
//! for the header timestamp and any ids synthesized for unsaved creatures.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::expand::expand_attacks;
use crate::model::{CreatureDocument, LootKind, Warning};
use crate::reference::ReferenceData;
use crate::sql::{
    insert_or_ignore_stmt, insert_stmt, SqlValue, ANATOMY_PARTS_DDL, ATTACK_DEFS_DDL,
    CREATURE_ATTACKS_DDL, CREATURE_DEFS_DDL, HARVEST_TYPES_DDL, LOOT_MODIFIERS_DDL,
};
use crate::store::ToolConfig;

/// Reference directory used when a tool does not configure one
pub const DEFAULT_REFERENCE_DIR: &str = "public/bestiary/data";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export artifact to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One written build artifact
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: PathBuf,
    pub size: usize,
}

/// The generated SQL text plus everything that degraded along the way
#[derive(Debug)]
pub struct SqlExport {
    pub sql: String,
    pub warnings: Vec<Warning>,
}

/// Generate the full SQL snapshot for one creature document.
#[allow(clippy::too_many_lines)] // SQL document assembly
pub fn export_sql(doc: &CreatureDocument, refs: &ReferenceData) -> SqlExport {
    let (catalog, warnings) = expand_attacks(&refs.base_attacks, &refs.prefixes);
    let mut sql = String::new();

    // Header
    sql.push_str("-- Project Epoch Database Export\n");
    sql.push_str(&format!(
        "-- Generated on: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    sql.push_str(&format!(
        "-- Creatures: {} | Base Attacks: {}\n\n",
        doc.creatures.len(),
        refs.base_attacks.len()
    ));
    sql.push_str("PRAGMA foreign_keys = ON;\n\n");

    // [1] Harvest Types
    sql.push_str("-- [1] HARVEST TYPES\n");
    sql.push_str(HARVEST_TYPES_DDL);
    for (id, row) in &refs.harvest_types {
        sql.push_str(&insert_or_ignore_stmt(
            "Harvest_Types",
            &["id", "tool", "attribute", "speed", "time_sec"],
            &[
                SqlValue::Text(id.clone()),
                SqlValue::text_or_null(row.tool_needed.as_deref()),
                SqlValue::text_or_null(row.attribute.as_deref()),
                SqlValue::text_or_null(row.speed.as_deref()),
                SqlValue::Int(row.base_time_seconds),
            ],
        ));
    }
    sql.push('\n');

    // [2] Anatomy Parts
    sql.push_str("-- [2] ANATOMY PARTS\n");
    sql.push_str(ANATOMY_PARTS_DDL);
    for (id, row) in &refs.anatomy_parts {
        sql.push_str(&insert_or_ignore_stmt(
            "Anatomy_Parts",
            &["id", "default_harvest", "drops"],
            &[
                SqlValue::Text(id.clone()),
                SqlValue::text_or_null(row.default_harvest.as_deref()),
                SqlValue::Text(row.base_drops.join(",")),
            ],
        ));
    }
    sql.push('\n');

    // [3] Loot Modifiers: hard set first, then organic, kind tags the origin
    sql.push_str("-- [3] LOOT MODIFIERS\n");
    sql.push_str(LOOT_MODIFIERS_DDL);
    for (kind, table) in [
        (LootKind::Hard, &refs.hard_loot),
        (LootKind::Organic, &refs.organic_loot),
    ] {
        for (id, row) in table {
            sql.push_str(&insert_or_ignore_stmt(
                "Loot_Modifiers",
                &["id", "type", "multiplier", "quality", "weight"],
                &[
                    SqlValue::Text(id.clone()),
                    SqlValue::Text(kind.as_str().to_string()),
                    SqlValue::Real(row.value_mult),
                    SqlValue::text_or_null(row.craft_quality.as_deref()),
                    SqlValue::Int(row.drop_weight),
                ],
            ));
        }
    }
    sql.push('\n');

    // [4] Attack Definitions: the expanded catalog in one transaction
    sql.push_str("-- [4] ATTACK DEFINITIONS\n");
    sql.push_str(ATTACK_DEFS_DDL);
    sql.push('\n');
    sql.push_str("BEGIN TRANSACTION;\n");
    for def in &catalog {
        sql.push_str(&insert_or_ignore_stmt(
            "Attack_Defs",
            &["name", "category", "effect", "base_damage", "anatomy_tag"],
            &[
                SqlValue::Text(def.name.clone()),
                SqlValue::text_or_null(def.category.as_deref()),
                SqlValue::text_or_null(def.effect.as_deref()),
                SqlValue::Text(def.base_damage.clone()),
                SqlValue::text_or_null(def.anatomy_tag.as_deref()),
            ],
        ));
    }
    sql.push_str("COMMIT;\n\n");

    // [5] Creature Definitions
    sql.push_str("-- [5] CREATURE GENETICS\n");
    sql.push_str(CREATURE_DEFS_DDL);
    sql.push('\n');

    // [6] Creature <-> Attack Link
    sql.push_str("-- [6] CREATURE <-> ATTACK LINK\n");
    sql.push_str(CREATURE_ATTACKS_DDL);
    sql.push('\n');

    // Creatures are expected to be novel per export: plain INSERT, not
    // OR IGNORE. Attack names are emitted as authored, without validating
    // them against the expanded catalog.
    sql.push_str("BEGIN TRANSACTION;\n");
    for creature in &doc.creatures {
        let id = creature
            .id
            .clone()
            .unwrap_or_else(synthesize_creature_id);
        let biomes_json =
            serde_json::to_string(&creature.biomes).unwrap_or_else(|_| "[]".to_string());
        sql.push_str(&insert_stmt(
            "Creature_Defs",
            &[
                "id",
                "name",
                "type",
                "size_index",
                "cr",
                "hp",
                "ac",
                "biomes_json",
            ],
            &[
                SqlValue::Text(id.clone()),
                SqlValue::Text(creature.name.clone().unwrap_or_else(|| "Unknown".to_string())),
                SqlValue::Text(creature.kind.clone().unwrap_or_else(|| "Beast".to_string())),
                SqlValue::Int(creature.size_idx.unwrap_or(4)),
                SqlValue::Real(creature.cr.unwrap_or(0.0)),
                SqlValue::Int(creature.hp.unwrap_or(1)),
                SqlValue::Int(creature.ac.unwrap_or(10)),
                SqlValue::Text(biomes_json),
            ],
        ));
        for attack in &creature.attacks {
            sql.push_str(&insert_stmt(
                "Creature_Attacks",
                &["creature_id", "attack_name"],
                &[SqlValue::Text(id.clone()), SqlValue::Text(attack.clone())],
            ));
        }
    }
    sql.push_str("COMMIT;\n\n");

    SqlExport { sql, warnings }
}

/// Synthesize an id for a creature saved without one.
///
/// Timestamp plus a short random suffix: two exports of the same unsaved
/// record produce different ids, so authors must assign ids to get stable
/// identity across exports.
fn synthesize_creature_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    format!("creature_{millis}_{suffix}")
}

/// Run the export for one tool after a successful save.
///
/// Loads a fresh reference snapshot, generates the SQL document, and writes
/// it to the tool's configured artifact path. Tools without an SQL export
/// path produce no artifact.
pub fn run_export(
    root: &Path,
    cfg: &ToolConfig,
    doc: &CreatureDocument,
) -> Result<(Vec<ExportReport>, Vec<Warning>), ExportError> {
    let mut reports = Vec::new();
    let mut warnings = Vec::new();

    if let Some(rel) = &cfg.export_sql_path {
        let reference_dir = cfg
            .reference_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_DIR));
        let (refs, mut load_warnings) = ReferenceData::load(&root.join(reference_dir));
        warnings.append(&mut load_warnings);

        let export = export_sql(doc, &refs);
        warnings.extend(export.warnings);

        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        }
        std::fs::write(&path, &export.sql).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        reports.push(ExportReport {
            kind: "sql",
            path,
            size: export.sql.len(),
        });
    }

    Ok((reports, warnings))
}
