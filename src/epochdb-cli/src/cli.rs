//! CLI argument definitions for epochdb

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "epochdb")]
#[command(about = "Project Epoch Content Pipeline", long_about = None)]
pub struct Cli {
    /// Path to the master tool configuration
    #[arg(short, long, default_value = "pipeline.config.json")]
    pub config: PathBuf,

    /// Root directory that source and export paths resolve against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a tool's saved document (creates the default schema if missing)
    #[command(visible_alias = "sh")]
    Show {
        /// Tool name (e.g. "bestiary")
        tool: String,
    },

    /// Save an authoring payload for a tool, then run its export
    #[command(visible_alias = "s")]
    Save {
        /// Tool name (e.g. "bestiary")
        tool: String,

        /// Path to the JSON payload to persist
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Re-run the export for a tool's saved document
    #[command(visible_alias = "e")]
    Export {
        /// Tool name (e.g. "bestiary")
        tool: String,
    },

    /// List configured tools
    #[command(visible_alias = "t")]
    Tools,
}
