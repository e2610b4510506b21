mod cli;

use barcode_checkdigit::{
    config::{Config, DEFAULT_LOG_FILTER},
    error,
    evaluator::{self, BodyParsing, Evaluator},
};
use clap::Parser;
use cli::{commands::USAGE, Cli};
use colored::*;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());

    let filter = match &config {
        Ok(cfg) => cfg.logging.filter.as_str(),
        Err(_) => DEFAULT_LOG_FILTER,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => cfg,
        // only a file named on the command line is allowed to fail the run
        Err(e) if cli.config.is_none() => {
            warn!("Ignoring configuration, using defaults: {}", e);
            Config::default()
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> error::Result<()> {
    let Some(barcode) = cli.barcode.as_deref() else {
        println!("{}", USAGE);
        return Ok(());
    };

    if !cli.extra.is_empty() {
        warn!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    let parsing = if cli.strict {
        BodyParsing::Strict
    } else {
        config.body_parsing()
    };
    let format = cli.format.unwrap_or(config.output.format);
    debug!("Evaluating {:?} ({:?}, {:?})", barcode, parsing, format);

    let evaluation = Evaluator::new(parsing).evaluate(barcode)?;
    print!("{}", evaluator::render(&evaluation, format, cli.verbose)?);

    Ok(())
}
