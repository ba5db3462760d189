//! Authoring document command handlers

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use epochdb::{CreatureDocument, ToolsConfig};

use crate::commands::export;

/// Handle `show` - load (auto-initializing) and pretty-print the document
pub fn show(root: &Path, config: &ToolsConfig, tool: &str) -> Result<()> {
    let cfg = config.tool(tool)?;
    let doc = epochdb::load_document(root, cfg)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Handle `save` - persist the payload, then run the tool's export
pub fn save(root: &Path, config: &ToolsConfig, tool: &str, input: &Path) -> Result<()> {
    let cfg = config.tool(tool)?;

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read payload from {}", input.display()))?;
    let doc: CreatureDocument =
        serde_json::from_str(&raw).context("Failed to parse payload as a creature document")?;

    let path = epochdb::save_document(root, cfg, &doc)?;
    println!("Saved \"{}\" data -> {}", tool, path.display());

    export::run_for(root, cfg, &doc)
}
