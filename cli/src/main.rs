//! Mixtape CLI - applies a batch of changes to a collection document.
//!
//! Takes exactly three file paths: the input document, the changes file,
//! and the output path. Both inputs are JSON; the updated document is
//! written as JSON to the output path. Any failure is fatal to the batch
//! and nothing is written.

mod error;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mixtape_engine::{Change, Document};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// Mixtape change applier
#[derive(Parser, Debug)]
#[command(name = "mixtape")]
#[command(about = "Apply a batch of changes to a mixtape collection", long_about = None)]
struct Cli {
    /// Input document, changes file, and output document paths
    #[arg(value_name = "PATH", num_args = 0..)]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // Quiet by default; RUST_LOG=mixtape=debug shows progress.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli.paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(paths: &[PathBuf]) -> Result<()> {
    let [input, changes, output] = paths else {
        return Err(CliError::ArgumentCount { got: paths.len() }.into());
    };

    let document = fs::read_to_string(input)
        .with_context(|| format!("failed to read document {}", input.display()))?;
    let mut document: Document = serde_json::from_str(&document)
        .with_context(|| format!("failed to parse document {}", input.display()))?;

    let batch = fs::read_to_string(changes)
        .with_context(|| format!("failed to read changes {}", changes.display()))?;
    let batch: Vec<Change> = serde_json::from_str(&batch)
        .with_context(|| format!("failed to parse changes {}", changes.display()))?;

    tracing::debug!(changes = batch.len(), "applying batch");
    document.apply_all(batch)?;

    let serialized = serde_json::to_string_pretty(&document)?;
    fs::write(output, serialized)
        .with_context(|| format!("failed to write document {}", output.display()))?;
    tracing::debug!(output = %output.display(), "wrote document");

    Ok(())
}
