mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = epochdb::ToolsConfig::load(&cli.config).with_context(|| {
        format!(
            "Failed to load tool configuration from {}",
            cli.config.display()
        )
    })?;

    match cli.command {
        Commands::Show { tool } => commands::document::show(&cli.root, &config, &tool),

        Commands::Save { tool, input } => {
            commands::document::save(&cli.root, &config, &tool, &input)
        }

        Commands::Export { tool } => commands::export::run(&cli.root, &config, &tool),

        Commands::Tools => commands::tools::list(&config),
    }
}
