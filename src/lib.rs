//! Finite Automaton → Right-Linear Grammar converter
//!
//! A CLI tool for turning finite automaton definitions into equivalent
//! right-linear grammars.
//!
//! This library provides functionality for:
//! - Loading automaton definitions from JSON files
//! - Building an in-memory automaton model with ordered states and transitions
//! - Converting the automaton into an ordered sequence of grammar rules
//! - Validating definitions for dangling state references
//! - Exporting the automaton as a Graphviz DOT graph

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
