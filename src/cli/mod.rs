//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Finite Automaton → Right-Linear Grammar converter CLI
#[derive(Parser, Debug)]
#[command(name = "fa2rlg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an automaton definition into right-linear grammar rules
    Convert {
        /// Path to the automaton definition (JSON)
        input: PathBuf,

        /// Output format (defaults to `default.format` from the config)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Write rules to a file instead of stdout
        #[arg(short = 'f', long)]
        out_file: Option<PathBuf>,

        /// Fail on dangling state references before converting
        #[arg(long)]
        strict: bool,

        /// Also write a DOT rendering of the automaton to this path
        #[arg(long)]
        render: Option<PathBuf>,
    },

    /// Render an automaton definition as a Graphviz DOT graph
    Render {
        /// Path to the automaton definition (JSON)
        input: PathBuf,

        /// Write DOT output to a file instead of stdout
        #[arg(short = 'f', long)]
        out_file: Option<PathBuf>,
    },

    /// Validate an automaton definition
    Validate {
        /// Path to the automaton definition (JSON)
        input: PathBuf,
    },
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one rule per line
    Text,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::Error::Config(format!(
                "Unknown output format `{}` (expected text or json)",
                other
            ))),
        }
    }
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Convert { .. } => commands::convert::execute(args, config),
        Commands::Render { .. } => commands::render::execute(args, config),
        Commands::Validate { input } => commands::validate::execute(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["fa2rlg", "convert", "fa.json", "--output", "json"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["fa2rlg", "validate", "fa.json"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["fa2rlg", "convert", "fa.json"]).unwrap();
        match cli.command {
            Commands::Convert {
                output,
                strict,
                out_file,
                ..
            } => {
                assert!(output.is_none());
                assert!(!strict);
                assert!(out_file.is_none());
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
