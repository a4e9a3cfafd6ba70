//! tileup - slice a large image into map tiles.
//!
//! This binary parses the command line, sets up logging and runs the pyramid.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tileup::{Config, OutputFormat, PyramidSummary};

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Tile size {}x{}, output to {}",
        config.tile_width,
        config.tile_height,
        config.output_dir.display()
    );

    let summary = match tileup::run(&config.input, &config.tiler_options()) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match config.format {
        OutputFormat::Text => print_summary(&summary),
        OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize summary: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
///
/// `--verbose` raises the level to debug, which includes per-tile progress.
fn init_logging(verbose: bool) {
    let env_filter = if verbose { "tileup=debug" } else { "tileup=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print one line per zoom level.
fn print_summary(summary: &PyramidSummary) {
    println!(
        "{} ({} x {}) -> {} tiles of {}x{}",
        summary.source,
        summary.source_width,
        summary.source_height,
        summary.total_tiles(),
        summary.tile_width,
        summary.tile_height
    );

    for level in &summary.levels {
        let label = level
            .zoom_label
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        println!(
            "  level {:>2}  scale {:<12} {:>6} x {:<6} {:>4} cols {:>4} rows  {} extended  {}",
            label,
            level.scale_factor,
            level.width,
            level.height,
            level.columns,
            level.rows,
            level.tiles_extended,
            level.output_dir
        );
    }
}
