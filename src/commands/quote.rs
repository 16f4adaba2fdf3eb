use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::cli::QuoteArgs;
use thesis_quote::config::{Config, DisplayConfig};
use thesis_quote::format::{format_amount, format_multiplier, format_price};
use thesis_quote::pricing::{CatalogKind, PricingEngine, Quote};

/// Execute the quote command
pub fn execute(args: &QuoteArgs, cfg: &Config) -> Result<()> {
    let engine = build_engine(args, cfg.selection.strict)?;
    let quote = engine.quote();
    info!(final_price = quote.final_price, "Quote computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", render_quote(&quote, &cfg.display));
    }
    Ok(())
}

/// Feed the command-line selections into a fresh engine
///
/// Omitted multipliers stay at the unset sentinel.
pub fn build_engine(args: &QuoteArgs, strict: bool) -> Result<PricingEngine> {
    let mut engine = PricingEngine::new();
    engine.set_project_type(args.project);
    engine.set_academic_level(args.level);

    if let Some(field) = &args.field {
        if strict {
            engine.select_field(field)?;
        } else {
            engine.set_selected_field(field.as_str());
        }
    }

    let multipliers = [
        (CatalogKind::WorkType, args.work),
        (CatalogKind::University, args.university),
        (CatalogKind::DeliveryTime, args.time),
    ];
    for (kind, value) in multipliers {
        let Some(value) = value else { continue };
        if strict {
            match kind {
                CatalogKind::WorkType => engine.select_work_type(value)?,
                CatalogKind::University => engine.select_university(value)?,
                CatalogKind::DeliveryTime => engine.select_delivery_time(value)?,
            }
        } else {
            engine.set_multiplier(kind, value);
        }
    }

    Ok(engine)
}

/// Human readable summary of a quote
pub fn render_quote(quote: &Quote, display: &DisplayConfig) -> String {
    let selection = &quote.selection;
    let field = if selection.field_key.is_empty() {
        "-"
    } else {
        selection.field_key.as_str()
    };

    let mut lines = vec![
        format!(
            "  Project: {} ({})",
            selection.project_type,
            format_multiplier(quote.project_type_multiplier)
        ),
        format!("  Level: {}", selection.academic_level),
        format!("  Field: {} ({})", field, format_amount(quote.base_price as f64)),
        format!(
            "  Work type: {}",
            format_multiplier(selection.work_type_multiplier)
        ),
        format!(
            "  University: {}",
            format_multiplier(selection.university_multiplier)
        ),
        format!(
            "  Delivery: {}",
            format_multiplier(selection.time_multiplier)
        ),
    ];

    if quote.is_complete {
        lines.push(format!(
            "  Thesis price: {}",
            format_price(quote.thesis_price, display)
        ));
        lines.push(format!(
            "{} {}",
            "Final price:".green().bold(),
            format_price(quote.final_price, display).as_str().bold()
        ));
    } else {
        lines.push(format!(
            "{} {}",
            "Final price:".yellow().bold(),
            format_price(0.0, display)
        ));
    }

    lines.join("\n")
}
