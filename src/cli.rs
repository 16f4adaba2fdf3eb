use clap::{Parser, Subcommand};
use std::path::PathBuf;

use thesis_quote::config::DEFAULT_CONFIG_FILE;
use thesis_quote::pricing::{AcademicLevel, ProjectType};
use thesis_quote::session::parse_multiplier;

#[derive(Parser, Debug)]
#[command(name = "thesis-quote", version, about = "Thesis and proposal price calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive pricing session (default)
    Session,

    /// Compute a single quote from command-line selections
    Quote(QuoteArgs),

    /// List the fields and multipliers on offer
    Catalog {
        /// Only show fields for this academic level
        #[arg(short, long)]
        level: Option<AcademicLevel>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Project type: thesis or proposal
    #[arg(short, long, default_value = "thesis")]
    pub project: ProjectType,

    /// Academic level: master or phd
    #[arg(short, long, default_value = "master")]
    pub level: AcademicLevel,

    /// Field of study key (see `catalog`)
    #[arg(short, long)]
    pub field: Option<String>,

    /// Work complexity multiplier
    #[arg(short, long, value_parser = parse_multiplier)]
    pub work: Option<f64>,

    /// University tier multiplier
    #[arg(short, long, value_parser = parse_multiplier)]
    pub university: Option<f64>,

    /// Delivery time multiplier
    #[arg(short, long, value_parser = parse_multiplier)]
    pub time: Option<f64>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Session if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_session() {
        let cli = Cli {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::Session));
    }

    #[test]
    fn test_cli_parsing_quote() {
        let args = vec![
            "thesis-quote",
            "quote",
            "--project",
            "proposal",
            "--level",
            "phd",
            "--field",
            "engineering",
            "--work",
            "1.5",
            "-u",
            "1.2",
            "-t",
            "1.3",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Quote(args) => {
                assert_eq!(args.project, ProjectType::Proposal);
                assert_eq!(args.level, AcademicLevel::Phd);
                assert_eq!(args.field.as_deref(), Some("engineering"));
                assert_eq!(args.work, Some(1.5));
                assert_eq!(args.university, Some(1.2));
                assert_eq!(args.time, Some(1.3));
                assert!(args.json);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_project_type() {
        let args = vec!["thesis-quote", "quote", "--project", "article"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_rejects_non_finite_multipliers() {
        for (flag, value) in [("--work", "NaN"), ("--university", "inf"), ("--time", "-inf")] {
            let args = vec!["thesis-quote", "quote", flag, value];
            assert!(Cli::try_parse_from(args).is_err(), "{} {}", flag, value);
        }

        let args = vec!["thesis-quote", "quote", "--work", "1e13"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.get_command() {
            Commands::Quote(args) => assert_eq!(args.work, Some(1e13)),
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_catalog_level() {
        let args = vec!["thesis-quote", "catalog", "--level", "phd"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Catalog { level } => assert_eq!(level, Some(AcademicLevel::Phd)),
            _ => panic!("Expected Catalog command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["thesis-quote", "--config", "other.toml", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Show
            }
        ));
    }
}
