use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::commands::catalog;
use crate::commands::quote::render_quote;
use thesis_quote::config::Config;
use thesis_quote::pricing::PricingEngine;
use thesis_quote::session::{SessionCommand, HELP};

/// Execute the interactive session command
///
/// Reads one command per line from stdin until `quit` or end of input.
/// The quote is re-rendered whenever a command changes it.
pub fn execute(cfg: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout, cfg)
}

fn run<R: BufRead, W: Write>(input: R, out: &mut W, cfg: &Config) -> Result<()> {
    let mut engine = PricingEngine::new();
    let mut updates = engine.subscribe();
    let strict = cfg.selection.strict;
    info!(strict, "Starting pricing session");

    writeln!(out, "{}", "Thesis price calculator. Type 'help' for commands.".bold())?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(SessionCommand::Show)) => {
                writeln!(out, "{}", render_quote(&engine.quote(), &cfg.display))?
            }
            Ok(Some(SessionCommand::Fields)) => {
                for field in engine.current_fields() {
                    writeln!(out, "  {:<12} {}", field.key, field.label)?;
                }
            }
            Ok(Some(SessionCommand::Catalog)) => catalog::print_multipliers(out)?,
            Ok(Some(command)) => {
                if let Err(e) = command.apply(&mut engine, strict) {
                    warn!(error = %e, "Selection rejected");
                    writeln!(out, "{} {}", "✗".red(), e)?;
                }
            }
            Err(e) => writeln!(out, "{} {}", "✗".red(), e)?,
        }

        if updates.has_changed()? {
            let quote = updates.borrow_and_update().clone();
            writeln!(out, "{}", render_quote(&quote, &cfg.display))?;
        }
        prompt(out)?;
    }

    info!("Pricing session ended");
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
