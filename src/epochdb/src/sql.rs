//! SQL statement rendering for the bestiary snapshot.
//!
//! The target is a single embedded-database dialect (SQLite). All DML flows
//! through one typed statement renderer rather than ad-hoc per-table string
//! concatenation.

use std::fmt;

/// Escape a string literal: single-quote delimited, embedded quotes doubled.
pub fn escape_str(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One typed value in an INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int(i64),
    Real(f64),
}

impl SqlValue {
    /// Text when present, NULL when absent
    pub fn text_or_null(value: Option<&str>) -> Self {
        match value {
            Some(s) => SqlValue::Text(s.to_string()),
            None => SqlValue::Null,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Text(s) => f.write_str(&escape_str(s)),
            SqlValue::Int(n) => write!(f, "{n}"),
            SqlValue::Real(x) => write!(f, "{x}"),
        }
    }
}

/// Render `INSERT INTO table (cols) VALUES (vals);\n`
pub fn insert_stmt(table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    render_insert("INSERT", table, columns, values)
}

/// Render `INSERT OR IGNORE INTO table (cols) VALUES (vals);\n`
pub fn insert_or_ignore_stmt(table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    render_insert("INSERT OR IGNORE", table, columns, values)
}

fn render_insert(verb: &str, table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    debug_assert_eq!(columns.len(), values.len());
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!(
        "{} INTO {} ({}) VALUES ({});\n",
        verb,
        table,
        columns.join(", "),
        rendered.join(", ")
    )
}

// ============================================================================
// Schema DDL
// ============================================================================
//
// Emission order is load-bearing: Creature_Attacks declares foreign keys
// into Creature_Defs and Attack_Defs, and the DML that follows populates
// tables in the same order so the artifact loads cleanly with
// PRAGMA foreign_keys = ON. Every table is guarded with IF NOT EXISTS so
// re-running an export against an existing database is a no-op on schema.

pub const HARVEST_TYPES_DDL: &str = "CREATE TABLE IF NOT EXISTS Harvest_Types (id TEXT PRIMARY KEY, tool TEXT, attribute TEXT, speed TEXT, time_sec INTEGER);\n";

pub const ANATOMY_PARTS_DDL: &str = "CREATE TABLE IF NOT EXISTS Anatomy_Parts (id TEXT PRIMARY KEY, default_harvest TEXT, drops TEXT);\n";

pub const LOOT_MODIFIERS_DDL: &str = "CREATE TABLE IF NOT EXISTS Loot_Modifiers (id TEXT PRIMARY KEY, type TEXT, multiplier REAL, quality TEXT, weight INTEGER);\n";

pub const ATTACK_DEFS_DDL: &str = "\
CREATE TABLE IF NOT EXISTS Attack_Defs (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT UNIQUE,
  category TEXT,
  effect TEXT,
  base_damage TEXT,
  anatomy_tag TEXT
);\n";

pub const CREATURE_DEFS_DDL: &str = "\
CREATE TABLE IF NOT EXISTS Creature_Defs (
  id TEXT PRIMARY KEY,
  name TEXT,
  type TEXT,
  size_index INTEGER,
  cr REAL,
  hp INTEGER,
  ac INTEGER,
  biomes_json TEXT
);\n";

pub const CREATURE_ATTACKS_DDL: &str = "\
CREATE TABLE IF NOT EXISTS Creature_Attacks (
  creature_id TEXT,
  attack_name TEXT,
  FOREIGN KEY(creature_id) REFERENCES Creature_Defs(id),
  FOREIGN KEY(attack_name) REFERENCES Attack_Defs(name)
);\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_embedded_quotes() {
        assert_eq!(escape_str("O'Brien's Wolf"), "'O''Brien''s Wolf'");
        assert_eq!(escape_str("plain"), "'plain'");
        assert_eq!(escape_str(""), "''");
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Text("wolf".to_string()).to_string(), "'wolf'");
        assert_eq!(SqlValue::Int(42).to_string(), "42");
        assert_eq!(SqlValue::Real(0.5).to_string(), "0.5");
        assert_eq!(SqlValue::Real(2.0).to_string(), "2");
    }

    #[test]
    fn test_text_or_null() {
        assert_eq!(
            SqlValue::text_or_null(Some("knife")),
            SqlValue::Text("knife".to_string())
        );
        assert_eq!(SqlValue::text_or_null(None), SqlValue::Null);
    }

    #[test]
    fn test_insert_stmt_rendering() {
        let stmt = insert_stmt(
            "Creature_Attacks",
            &["creature_id", "attack_name"],
            &[
                SqlValue::Text("wolf_1".to_string()),
                SqlValue::Text("Bite".to_string()),
            ],
        );
        assert_eq!(
            stmt,
            "INSERT INTO Creature_Attacks (creature_id, attack_name) VALUES ('wolf_1', 'Bite');\n"
        );
    }

    #[test]
    fn test_insert_or_ignore_stmt_rendering() {
        let stmt = insert_or_ignore_stmt(
            "Harvest_Types",
            &["id", "tool", "time_sec"],
            &[
                SqlValue::Text("skin".to_string()),
                SqlValue::Null,
                SqlValue::Int(10),
            ],
        );
        assert_eq!(
            stmt,
            "INSERT OR IGNORE INTO Harvest_Types (id, tool, time_sec) VALUES ('skin', NULL, 10);\n"
        );
    }
}
