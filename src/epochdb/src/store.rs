//! Content store: tool configuration and the authoring-time JSON document.
//!
//! The browser tool edits one JSON document per tool; this module owns its
//! read-or-create-default lifecycle. Paths in the configuration resolve
//! against a caller-supplied root directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CreatureDocument;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown tool: \"{0}\"")]
    UnknownTool(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Per-tool configuration, camelCase to match the authoring config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Directory the saved source document lives in
    pub source_dir: PathBuf,
    /// File name of the source document within `source_dir`
    pub entry_file: String,
    /// Where to write the SQL artifact; tools without one export nothing
    #[serde(default)]
    pub export_sql_path: Option<PathBuf>,
    /// Static reference-data directory for the SQL export
    #[serde(default)]
    pub reference_dir: Option<PathBuf>,
    /// Document written on first load when no source file exists yet
    #[serde(default = "default_schema")]
    pub default_schema: serde_json::Value,
}

fn default_schema() -> serde_json::Value {
    serde_json::json!({ "creatures": [] })
}

/// The master tool configuration: tool name → config
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolsConfig(pub BTreeMap<String, ToolConfig>);

impl ToolsConfig {
    /// Load the configuration file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up one tool; unknown names surface as a client-facing error
    pub fn tool(&self, name: &str) -> Result<&ToolConfig, StoreError> {
        self.0
            .get(name)
            .ok_or_else(|| StoreError::UnknownTool(name.to_string()))
    }

    /// Configured tool names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Absolute path of a tool's source document under `root`
pub fn document_path(root: &Path, cfg: &ToolConfig) -> PathBuf {
    root.join(&cfg.source_dir).join(&cfg.entry_file)
}

/// Load a tool's saved document, creating it from the default schema first
/// if it does not exist yet.
pub fn load_document(root: &Path, cfg: &ToolConfig) -> Result<CreatureDocument, StoreError> {
    let path = document_path(root, cfg);

    if !path.exists() {
        write_json(&path, &cfg.default_schema)?;
    }

    let raw = fs::read_to_string(&path).map_err(|source| StoreError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse { path, source })
}

/// Persist a tool's document, creating parent directories as needed.
/// Returns the path written.
pub fn save_document(
    root: &Path,
    cfg: &ToolConfig,
    doc: &CreatureDocument,
) -> Result<PathBuf, StoreError> {
    let path = document_path(root, cfg);
    write_json(&path, doc)?;
    Ok(path)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let contents = serde_json::to_string_pretty(value).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreatureRecord;

    fn bestiary_config() -> ToolConfig {
        ToolConfig {
            source_dir: PathBuf::from("source_data/bestiary"),
            entry_file: "creatures.json".to_string(),
            export_sql_path: Some(PathBuf::from("assets/database/bestiary.sql")),
            reference_dir: None,
            default_schema: default_schema(),
        }
    }

    #[test]
    fn test_load_auto_creates_default_document() {
        let root = tempfile::tempdir().unwrap();
        let cfg = bestiary_config();

        let doc = load_document(root.path(), &cfg).unwrap();
        assert!(doc.creatures.is_empty());
        assert!(document_path(root.path(), &cfg).exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let root = tempfile::tempdir().unwrap();
        let cfg = bestiary_config();

        let doc = CreatureDocument {
            creatures: vec![CreatureRecord {
                id: Some("wolf_1".to_string()),
                name: Some("Dire Wolf".to_string()),
                kind: Some("Beast".to_string()),
                size_idx: Some(5),
                cr: Some(1.0),
                hp: Some(37),
                ac: Some(14),
                biomes: vec!["forest".to_string()],
                attacks: vec!["Bite".to_string()],
            }],
        };
        save_document(root.path(), &cfg, &doc).unwrap();

        let loaded = load_document(root.path(), &cfg).unwrap();
        assert_eq!(loaded.creatures.len(), 1);
        assert_eq!(loaded.creatures[0].name.as_deref(), Some("Dire Wolf"));
        assert_eq!(loaded.creatures[0].size_idx, Some(5));
    }

    #[test]
    fn test_unknown_tool_is_not_found() {
        let config: ToolsConfig = serde_json::from_str(
            r#"{"bestiary": {"sourceDir": "source_data/bestiary", "entryFile": "creatures.json"}}"#,
        )
        .unwrap();

        assert!(config.tool("bestiary").is_ok());
        let err = config.tool("layouts").unwrap_err();
        assert!(matches!(err, StoreError::UnknownTool(name) if name == "layouts"));
    }

    #[test]
    fn test_config_defaults() {
        let config: ToolsConfig = serde_json::from_str(
            r#"{"bestiary": {"sourceDir": "s", "entryFile": "e.json"}}"#,
        )
        .unwrap();
        let cfg = config.tool("bestiary").unwrap();
        assert!(cfg.export_sql_path.is_none());
        assert_eq!(cfg.default_schema, serde_json::json!({ "creatures": [] }));
    }
}
