//! Export command handlers

use std::path::Path;

use anyhow::Result;

use epochdb::{CreatureDocument, ToolConfig, ToolsConfig};

/// Handle `export` - re-run the export for the saved document
pub fn run(root: &Path, config: &ToolsConfig, tool: &str) -> Result<()> {
    let cfg = config.tool(tool)?;
    let doc = epochdb::load_document(root, cfg)?;
    run_for(root, cfg, &doc)
}

/// Run one tool's export and print the report and any warnings
pub fn run_for(root: &Path, cfg: &ToolConfig, doc: &CreatureDocument) -> Result<()> {
    let (reports, warnings) = epochdb::run_export(root, cfg, doc)?;

    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    if reports.is_empty() {
        println!("No export configured for this tool.");
    }
    for report in reports {
        println!(
            "Wrote {} ({} bytes) -> {}",
            report.kind,
            report.size,
            report.path.display()
        );
    }

    Ok(())
}
