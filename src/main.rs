use anyhow::Context;
use clap::Parser;

use moviesearch::args::Cli;
use moviesearch::config::{ApiKeySource, Config, CredentialStatus};
use moviesearch::logging::init_tracing;
use moviesearch::omdb::MovieClient;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_path.display(),
        base_url = %config.api.base_url,
        "Starting movie search"
    );

    let credentials = ApiKeySource::from_config(&config.api).with_override(cli.api_key.clone());
    if let CredentialStatus::Missing { reason } = credentials.resolve() {
        // Lookups still go out; the provider answers with its own error.
        tracing::warn!(env_var = credentials.env_var(), "No API key configured: {}", reason);
    }

    let client = MovieClient::new(&config.api, credentials).context("Failed to create HTTP client")?;
    moviesearch::ui::run(&config, client, cli.query).context("Terminal UI failed")?;
    Ok(())
}
