use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod render;

use cli::Cli;
use config::CliConfig;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| CliConfig::load(&dir).map_err(anyhow::Error::from))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    configure_logging(&cli, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::run(&cli, &config, &mut out) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn configure_logging(cli: &Cli, config: &CliConfig) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if cli.quiet {
        "error"
    } else if cli.debug {
        "debug"
    } else if cli.verbose {
        "trace"
    } else {
        config.log_level.as_str()
    };

    // RUST_LOG wins over flags and config
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
