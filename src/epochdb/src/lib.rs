//! # epochdb
//!
//! Project Epoch content pipeline library - creature authoring documents and
//! their export to a normalized SQL snapshot.
//!
//! This library provides functionality to:
//! - Persist browser-authored creature documents with read-or-create-default
//!   semantics
//! - Load the static reference tables (harvest types, anatomy, loot
//!   modifiers, attacks, prefixes), degrading gracefully when files are
//!   missing
//! - Expand the attack catalog (every base attack plus one variant per
//!   base × prefix pair)
//! - Emit the whole snapshot as SQL text the game engine loads into SQLite
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new(".");
//! let config = epochdb::ToolsConfig::load(Path::new("pipeline.config.json"))?;
//! let cfg = config.tool("bestiary")?;
//!
//! // Load (auto-initializing) the authored document, then export it.
//! let doc = epochdb::load_document(root, cfg)?;
//! let (reports, warnings) = epochdb::run_export(root, cfg, &doc)?;
//!
//! for warning in &warnings {
//!     eprintln!("warning: {warning}");
//! }
//! for report in &reports {
//!     println!("{} bytes -> {}", report.size, report.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod expand;
pub mod export;
pub mod model;
pub mod reference;
pub mod sql;
pub mod store;

// Re-export commonly used items
#[doc(inline)]
pub use expand::expand_attacks;
#[doc(inline)]
pub use export::{export_sql, run_export, ExportError, ExportReport, SqlExport};
#[doc(inline)]
pub use model::{
    parse_dice, AnatomyPart, AttackDef, BaseAttack, CreatureDocument, CreatureRecord, HarvestType,
    LootKind, LootModifier, PrefixModifier, Warning,
};
#[doc(inline)]
pub use reference::{ReferenceData, Table};
#[doc(inline)]
pub use sql::{escape_str, insert_or_ignore_stmt, insert_stmt, SqlValue};
#[doc(inline)]
pub use store::{
    document_path, load_document, save_document, StoreError, ToolConfig, ToolsConfig,
};
