//! aspace-export - Export an ArchivesSpace collection to a digitization-tracking CSV.

use anyhow::Context;
use aspace_export_cli::{export, Cli, Config};
use aspace_export_client::AspaceClient;
use clap::Parser;
use tracing::Level;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr; the terminal stays usable for redirection
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut client = AspaceClient::new(&config.base_url);
    client
        .connect(&config.username, &config.password)
        .with_context(|| format!("Failed to connect to {}", config.base_url))?;

    let summary = export::run_export(&client, cli.repo, cli.resource, &cli.output)
        .context("Export failed")?;

    println!(
        "Exported {} rows from {} components to {}",
        summary.rows,
        summary.components,
        cli.output.display()
    );

    Ok(())
}
