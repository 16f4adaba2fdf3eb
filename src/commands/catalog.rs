use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::{self, Write};

use thesis_quote::format::format_amount;
use thesis_quote::pricing::catalog;
use thesis_quote::pricing::{AcademicLevel, CatalogKind, FieldOption};

/// Execute the catalog command
pub fn execute(level: Option<AcademicLevel>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match level {
        Some(level) => print_fields(&mut out, level),
        None => {
            print_fields(&mut out, AcademicLevel::Master)?;
            print_fields(&mut out, AcademicLevel::Phd)?;
            print_multipliers(&mut out)
        }
    }
}

pub fn print_fields(out: &mut impl Write, level: AcademicLevel) -> io::Result<()> {
    writeln!(out, "Fields ({}):", level)?;
    writeln!(out, "{}", fields_table(catalog::fields_for(level)))
}

pub fn print_multipliers(out: &mut impl Write) -> io::Result<()> {
    for kind in [
        CatalogKind::WorkType,
        CatalogKind::University,
        CatalogKind::DeliveryTime,
    ] {
        writeln!(out, "Multipliers ({}):", kind.name())?;
        writeln!(out, "{}", multipliers_table(kind))?;
    }
    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        header
            .into_iter()
            .map(|title| Cell::new(title).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn fields_table(fields: &[FieldOption]) -> Table {
    let mut table = new_table(vec!["KEY", "FIELD", "BASE PRICE"]);
    for field in fields {
        table.add_row(vec![
            Cell::new(field.key),
            Cell::new(field.label),
            Cell::new(format_amount(field.value as f64)),
        ]);
    }
    table
}

fn multipliers_table(kind: CatalogKind) -> Table {
    let mut table = new_table(vec!["VALUE", "OPTION"]);
    for option in kind.options() {
        table.add_row(vec![
            Cell::new(option.value.to_string()),
            Cell::new(option.label),
        ]);
    }
    table
}
