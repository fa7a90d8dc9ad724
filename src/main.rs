use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod generate;
mod manifest;
mod select;
mod sources;
mod util;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let settings = config::settings_from_cli(&cli)?;
    tracing::debug!(?settings, "resolved settings");

    let outcome = generate::run_generate(&settings)?;
    println!("{}", manifest::summary_json(&outcome.manifest.summary)?);
    tracing::info!(
        manifest = %outcome.artifacts.manifest.display(),
        positives = %outcome.artifacts.positives.display(),
        negatives = %outcome.artifacts.negatives.display(),
        "dataset manifest ready"
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
