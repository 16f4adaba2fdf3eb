use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use thesis_quote::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Configuration drives logging, so it is loaded before tracing starts
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Session => commands::session::execute(&cfg)?,
        cli::Commands::Quote(quote_args) => commands::quote::execute(&quote_args, &cfg)?,
        cli::Commands::Catalog { level } => commands::catalog::execute(level)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config, &cfg),
        },
        cli::Commands::Version => {
            println!("Thesis Quote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
