//! mazesolve: solve a maze image and save the rendered solution.
//!
//! Reads a black/white maze image, prints the solved maze as text, and
//! writes a PNG with the path drawn in a red gradient to
//! `<output-dir>/<timestamp>.png`.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin mazesolve -- [OPTIONS] [IMAGE_PATH]
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use chrono::{Local, SecondsFormat};
use clap::Parser;
use mazesolve_core::diagnostics::Clock;
use mazesolve_core::{SolveConfig, process_with_diagnostics};

/// Solve a maze image with depth-first search.
///
/// The entry is the first open pixel in the top row and the exit is the
/// first open pixel in the bottom row. Dark pixels are walls.
#[derive(Parser)]
#[command(name = "mazesolve", version)]
struct Cli {
    /// Path to the input maze image (PNG, JPEG, BMP, WebP).
    #[arg(default_value = "input/normal.png")]
    image_path: PathBuf,

    /// Directory the solved PNG is written to (created if missing).
    #[arg(long, default_value = "output-solved")]
    output_dir: PathBuf,

    /// Output pixels per maze cell edge.
    #[arg(long, default_value_t = SolveConfig::DEFAULT_RESOLUTION.get(), value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..))]
    resolution: u32,

    /// Print the per-stage diagnostics report.
    #[arg(long)]
    diagnostics: bool,

    /// Output diagnostics as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Full solve config as a JSON string.
    ///
    /// When provided, `--resolution` is ignored. The JSON must be a
    /// valid `SolveConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,
}

/// Build a [`SolveConfig`] from CLI arguments.
fn config_from_cli(cli: &Cli) -> Result<SolveConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    let resolution = std::num::NonZeroU32::new(cli.resolution)
        .ok_or_else(|| "--resolution must be at least 1".to_string())?;
    Ok(SolveConfig {
        resolution,
        ..SolveConfig::default()
    })
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}

/// Output file name derived from the current local time (RFC 3339).
fn output_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    dir.join(format!("{stamp}.png"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Read {} ({} bytes)",
        cli.image_path.display(),
        image_bytes.len(),
    );
    log::debug!("Config: {config:?}");

    let (result, diagnostics) = match process_with_diagnostics(&image_bytes, &config, &StdClock)
    {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Solve error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", result.solved);
    if !result.solved.is_solved() {
        log::warn!("No path joins the start and finish; writing the unsolved maze");
    }

    if cli.json {
        match serde_json::to_string_pretty(&diagnostics) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing diagnostics: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if cli.diagnostics {
        println!("{}", diagnostics.report());
    }

    let png = match mazesolve_export::to_png(&result.image) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&cli.output_dir) {
        eprintln!("Error creating {}: {e}", cli.output_dir.display());
        return ExitCode::FAILURE;
    }
    let path = output_path(&cli.output_dir);
    if let Err(e) = std::fs::write(&path, &png) {
        eprintln!("Error writing {}: {e}", path.display());
        return ExitCode::FAILURE;
    }
    log::info!(
        "Wrote {} ({}x{}, {} bytes)",
        path.display(),
        result.image.width(),
        result.image.height(),
        png.len(),
    );

    ExitCode::SUCCESS
}
