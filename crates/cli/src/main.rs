mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	let (config, source) = Config::discover(cli.config.as_deref())?;

	logging::init(cli.verbose, &config.log_level);
	match &source {
		Some(path) => debug!(path = %path.display(), "loaded config"),
		None => debug!("no config file, using defaults"),
	}

	let outcome = commands::run(cli.command, &config, &mut std::io::stdout().lock())?;
	Ok(outcome.into())
}
