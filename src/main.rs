//! Main entry point for the epubpack CLI application.
//!
//! This binary packages an EPUB source directory into a single `.epub`
//! container file, or lists the files a packaging run would include.

use anyhow::{Context, Result};
use clap::Parser;

use epubpack::{Cli, PackOptions, collect_files, pack_with_options};

/// Application entry point.
///
/// Parses command-line arguments and either lists the would-be package
/// contents or packages the source directory and writes the result.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = PackOptions::default();

    // List mode: show what would be packaged and exit
    if cli.list {
        return list_files(&cli, &options).await;
    }

    let buffer = pack_with_options(&cli.source, &options).await?;

    let output = cli.output_path();
    tokio::fs::write(&output, &buffer)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    if !cli.quiet {
        println!("wrote {} ({})", output.display(), format_size(buffer.len() as u64));
    }

    Ok(())
}

/// List the files that would be packaged, one per line.
///
/// Applies the same traversal and exclusion rules as packaging, but skips
/// container validation and writes nothing.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments
/// * `options` - Packaging configuration
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the source tree cannot be
/// walked.
async fn list_files(cli: &Cli, options: &PackOptions) -> Result<()> {
    let files = collect_files(&cli.source, options).await?;
    for file in &files {
        println!("{file}");
    }
    Ok(())
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
