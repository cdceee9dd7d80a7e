//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::automaton::{load_automaton, Automaton};
use crate::{cli::Cli, Config, Result};
use std::path::{Path, PathBuf};

/// Load the definition file and build the automaton it describes
fn load(input: &Path) -> Result<Automaton> {
    tracing::info!("Loading automaton definition from {:?}", input);
    let fa = load_automaton(input)?;

    let stats = fa.stats();
    tracing::info!(
        "Built automaton: {} states, {} transitions, {} accept states",
        stats.total_states,
        stats.total_transitions,
        stats.accept_states
    );

    Ok(fa)
}

/// Convert command implementation
pub mod convert {
    use super::*;
    use crate::cli::{output, Commands, OutputFormat};

    /// Execute the convert command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (input, output_format, out_file, strict, render_path) = match args.command {
            Commands::Convert {
                input,
                output,
                out_file,
                strict,
                render,
            } => (input, output, out_file, strict, render),
            _ => unreachable!("convert::execute called with wrong command"),
        };

        // Flag wins; otherwise fall back to the configured default
        let output_format = match output_format {
            Some(format) => format,
            None => config.default.format.parse::<OutputFormat>()?,
        };

        let fa = load(&input)?;

        if strict || config.default.strict {
            tracing::info!("Validating state references (strict mode)");
            fa.validate()?;
        }

        // Side artifact; a failed rendering never fails the conversion
        if let Some(path) = render_path {
            match crate::automaton::render::render_to_file(&fa, &config.render, &path) {
                Ok(()) => tracing::info!("Rendered automaton to {:?}", path),
                Err(e) => tracing::warn!("Failed to render automaton to {:?}: {}", path, e),
            }
        }

        tracing::info!("Converting automaton to right-linear grammar");
        let rules = crate::grammar::convert(&fa);
        tracing::info!("Derived {} rules", rules.len());

        let stats = fa.stats();
        match out_file {
            Some(path) => {
                let mut file = std::fs::File::create(&path)?;
                match output_format {
                    OutputFormat::Text => output::output_text(&mut file, &rules)?,
                    OutputFormat::Json => output::output_json(&mut file, &stats, &rules)?,
                }
                tracing::info!("Wrote rules to {:?}", path);
            }
            None => {
                let mut stdout = std::io::stdout();
                match output_format {
                    OutputFormat::Text => output::output_text(&mut stdout, &rules)?,
                    OutputFormat::Json => output::output_json(&mut stdout, &stats, &rules)?,
                }
            }
        }

        Ok(())
    }
}

/// Render command implementation
pub mod render {
    use super::*;
    use crate::automaton::render::{render_to_file, to_dot};
    use crate::cli::Commands;

    /// Execute the render command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (input, out_file) = match args.command {
            Commands::Render { input, out_file } => (input, out_file),
            _ => unreachable!("render::execute called with wrong command"),
        };

        let fa = load(&input)?;

        match out_file {
            Some(path) => {
                render_to_file(&fa, &config.render, &path)?;
                tracing::info!("Wrote DOT graph to {:?}", path);
            }
            None => print!("{}", to_dot(&fa, &config.render)),
        }

        Ok(())
    }
}

/// Validate command implementation
pub mod validate {
    use super::*;

    /// Execute the validate command
    pub fn execute(input: PathBuf) -> Result<()> {
        tracing::info!("Validating definition: {:?}", input);

        let fa = match load(&input) {
            Ok(fa) => fa,
            Err(e) => {
                eprintln!("❌ Failed to load definition: {}", e);
                return Err(e);
            }
        };

        let stats = fa.stats();
        let dangling = fa.dangling_references();

        println!("📋 Definition Validation Report");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("File: {:?}", input);
        println!();
        println!("Automaton:");
        println!("  States:        {}", stats.total_states);
        println!("  Transitions:   {}", stats.total_transitions);
        println!("  Accept states: {}", stats.accept_states);
        println!("  Alphabet size: {}", stats.alphabet_size);
        match fa.start_state() {
            Some(start) => println!("  Start state:   {}", start),
            None => println!("  Start state:   (none)"),
        }
        println!();

        if !dangling.is_empty() {
            println!("❌ Dangling references:");
            for reference in &dangling {
                println!("   {}", reference);
            }
            println!();
        }

        if dangling.is_empty() {
            println!("✅ Definition is valid!");
            Ok(())
        } else {
            println!(
                "❌ Validation failed with {} dangling reference(s)",
                dangling.len()
            );
            crate::bail!("Definition validation failed");
        }
    }
}
