//! Finite Automaton → Right-Linear Grammar converter

use clap::Parser;
use fa2rlg::{cli, init_logging, Config, Result, VERSION};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Config decides the log level, so it loads before the subscriber
    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    init_logging(&config.logging.level);

    tracing::info!("fa2rlg v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)?;

    Ok(())
}
