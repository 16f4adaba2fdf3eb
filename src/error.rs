use thiserror::Error;

/// Errors surfaced at the edges of the quotation engine.
///
/// The engine itself never fails: permissive setters accept anything and
/// degrade to a zero price. These errors come from parsing user input,
/// the optional strict selection path and configuration loading.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid project type: {0} (expected 'thesis' or 'proposal')")]
    InvalidProjectType(String),

    #[error("Invalid academic level: {0} (expected 'master' or 'phd')")]
    InvalidAcademicLevel(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown field '{key}' for {level} level")]
    UnknownField { level: String, key: String },

    #[error("Value {value} is not offered in the {catalog} catalog")]
    NotInCatalog { catalog: &'static str, value: f64 },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for QuoteError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
