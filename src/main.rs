use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::{io::Write, path::Path};

mod commands;
mod finder;
mod generator;
mod loader;
mod models;
mod reporter;

use commands::{Args, Commands};

const ENV_FILE: &str = ".env";

/// Loads logging settings from a `.env` in the given directory only. A missing
/// file is fine, a malformed one is not.
fn load_env(dir: &Path) -> Result<()> {
    match dotenvy::from_path(dir.join(ENV_FILE)) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

async fn find_grandfathers<W: Write>(path: &Path, writer: &mut W) -> Result<()> {
    let start = std::time::Instant::now();

    let persons = loader::load_persons(path).await?;

    let result = finder::find_matching_grandfathers(&persons);
    tracing::debug!(
        "{} of {} root records matched",
        result.len(),
        persons.len()
    );

    reporter::report(writer, &result).context("Could not write report")?;

    tracing::info!("Search completed in {:?}", start.elapsed());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    load_env(Path::new("."))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Args::parse();
    match cli.command {
        Some(Commands::CreateFile { number_people }) => {
            generator::create_file(&cli.file, number_people).await?
        }
        Some(Commands::Find) | None => {
            let stdout = std::io::stdout();
            find_grandfathers(&cli.file, &mut stdout.lock()).await?
        }
    }

    Ok(())
}
