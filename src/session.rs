//! Line-oriented command protocol for the interactive calculator.
//!
//! Each input line maps to one [`SessionCommand`]. Mutating commands are
//! forwarded to a [`PricingEngine`]; the rest are handled by the caller.

use std::str::FromStr;

use tracing::debug;

use crate::error::QuoteError;
use crate::pricing::{AcademicLevel, CatalogKind, PricingEngine, ProjectType};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    ProjectType(ProjectType),
    AcademicLevel(AcademicLevel),
    Field(String),
    Multiplier(CatalogKind, f64),
    Reset,
    Show,
    Fields,
    Catalog,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  project <thesis|proposal>   choose the project type
  level <master|phd>          choose the academic level (clears the field)
  field <key>                 choose a field of study (empty key clears it)
  work <multiplier>           choose the work complexity multiplier
  university <multiplier>     choose the university tier multiplier
  time <multiplier>           choose the delivery time multiplier
  reset                       clear every selection
  show                        print the current quote
  fields                      list fields for the current level
  catalog                     list all multiplier catalogs
  help                        show this help
  quit                        leave the session";

impl SessionCommand {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, QuoteError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(QuoteError::UnexpectedArgument(extra.to_string()));
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "project" => Self::ProjectType(required(arg, "project")?.parse()?),
            "level" => Self::AcademicLevel(required(arg, "level")?.parse()?),
            "field" => Self::Field(arg.unwrap_or_default().to_string()),
            "work" => Self::Multiplier(CatalogKind::WorkType, parse_number(arg, "work")?),
            "university" => {
                Self::Multiplier(CatalogKind::University, parse_number(arg, "university")?)
            }
            "time" => Self::Multiplier(CatalogKind::DeliveryTime, parse_number(arg, "time")?),
            "reset" => Self::Reset,
            "show" => Self::Show,
            "fields" => Self::Fields,
            "catalog" => Self::Catalog,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(QuoteError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Apply a mutating command to the engine
    ///
    /// With `strict` set, fields and multipliers are checked against the
    /// active catalog. Returns `Ok(false)` for commands that do not mutate.
    pub fn apply(&self, engine: &mut PricingEngine, strict: bool) -> Result<bool, QuoteError> {
        debug!(command = ?self, strict, "Applying session command");
        match self {
            Self::ProjectType(project_type) => engine.set_project_type(*project_type),
            Self::AcademicLevel(level) => engine.set_academic_level(*level),
            Self::Field(key) if strict => engine.select_field(key)?,
            Self::Field(key) => engine.set_selected_field(key.as_str()),
            Self::Multiplier(kind, value) if strict => engine.select_multiplier(*kind, *value)?,
            Self::Multiplier(kind, value) => engine.set_multiplier(*kind, *value),
            Self::Reset => engine.reset(),
            Self::Show | Self::Fields | Self::Catalog | Self::Help | Self::Quit => {
                return Ok(false)
            }
        }
        Ok(true)
    }
}

impl FromStr for SessionCommand {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or(QuoteError::MissingArgument("command"))
    }
}

fn required<'a>(arg: Option<&'a str>, name: &'static str) -> Result<&'a str, QuoteError> {
    arg.ok_or(QuoteError::MissingArgument(name))
}

fn parse_number(arg: Option<&str>, name: &'static str) -> Result<f64, QuoteError> {
    parse_multiplier(required(arg, name)?)
}

/// Parse a multiplier, rejecting NaN and infinities
pub fn parse_multiplier(raw: &str) -> Result<f64, QuoteError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| QuoteError::InvalidNumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(QuoteError::InvalidNumber(raw.to_string()));
    }
    Ok(value)
}
