use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use thesis_quote::config::Config;
use tracing::info;

/// Execute the config show command
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary.
pub fn validate(path: &Path, cfg: &Config) {
    info!(path = %path.display(), "Configuration validation successful");

    println!("{}", "✓ Configuration is valid".green());
    if !path.exists() {
        println!(
            "  {}",
            format!("({} not found, using defaults)", path.display()).yellow()
        );
    }
    println!();
    println!("{}", "Summary:".bold());
    println!("  Log Level: {}", cfg.logging.level);
    println!("  Log Format: {}", cfg.logging.format);
    println!("  Currency: {}", cfg.display.currency);
    println!("  Display Rounding: {}", describe_rounding(cfg.display.round_to));
    println!(
        "  Selection Mode: {}",
        if cfg.selection.strict { "strict" } else { "permissive" }
    );
}

fn describe_rounding(unit: u64) -> String {
    if unit == 0 {
        "none".to_string()
    } else {
        format!("nearest {}", unit)
    }
}
