//! Tool listing

use anyhow::Result;

use epochdb::ToolsConfig;

/// Handle `tools` - list configured tools and their export targets
pub fn list(config: &ToolsConfig) -> Result<()> {
    for name in config.names() {
        let cfg = config.tool(name)?;
        let export = match &cfg.export_sql_path {
            Some(path) => format!("sql -> {}", path.display()),
            None => "none".to_string(),
        };
        println!(
            "{}  source: {}/{}  export: {}",
            name,
            cfg.source_dir.display(),
            cfg.entry_file,
            export
        );
    }
    Ok(())
}
