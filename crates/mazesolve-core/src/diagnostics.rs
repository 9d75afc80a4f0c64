//! Solve diagnostics: timing and counts for each pipeline stage.
//!
//! Timestamps come from a caller-supplied [`Clock`] so this crate stays
//! free of platform time sources. Durations are serialized as
//! fractional seconds (`f64`) for JSON compatibility, since
//! `std::time::Duration` does not implement serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::build_grid;
use crate::search::solve_with_outcome;
use crate::types::{ProcessResult, SolveConfig, SolveError};

/// Source of monotonic timestamps.
pub trait Clock {
    /// Opaque timestamp type.
    type Instant;

    /// Capture the current time.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveDiagnostics {
    /// Stage 1: image decoding.
    pub decode: StageDiagnostics,
    /// Stage 2: pixel classification and grid building.
    pub build: StageDiagnostics,
    /// Stage 3: path search.
    pub search: StageDiagnostics,
    /// Stage 4: rendering.
    pub render: StageDiagnostics,
    /// Total wall-clock duration (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary counts across all stages.
    pub summary: SolveSummary,
}

/// Diagnostics for a single stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Image decoding metrics.
    Decode {
        /// Size of the input image bytes.
        input_bytes: usize,
        /// Decoded image width in pixels.
        width: u32,
        /// Decoded image height in pixels.
        height: u32,
    },
    /// Grid building metrics.
    Build {
        /// Number of open cells.
        passable_cells: usize,
        /// Number of walls.
        blocked_cells: usize,
    },
    /// Path search metrics.
    Search {
        /// Which strategy was used.
        strategy: String,
        /// Cells entered before the search ended.
        cells_visited: usize,
        /// Length of the returned path (0 when not found).
        path_length: usize,
    },
    /// Rendering metrics.
    Render {
        /// Pixels per cell edge.
        resolution: u32,
        /// Output width in pixels.
        width: u32,
        /// Output height in pixels.
        height: u32,
    },
}

/// High-level summary of a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveSummary {
    /// Grid width in cells.
    pub grid_width: u32,
    /// Grid height in cells.
    pub grid_height: u32,
    /// Whether a path was found.
    pub solved: bool,
    /// Cells on the returned path.
    pub path_length: usize,
}

impl SolveDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Solve Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Grid: {}x{}  |  {}",
            self.summary.grid_width,
            self.summary.grid_height,
            if self.summary.solved {
                format!("solved, {} path cells", self.summary.path_length)
            } else {
                "no path".to_string()
            },
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<16} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(72));

        let total_ms = duration_ms(self.total_duration);
        let stages = [
            ("Decode", &self.decode),
            ("Build", &self.build),
            ("Search", &self.search),
            ("Render", &self.render),
        ];
        for (name, diag) in stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<16} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Decode {
            input_bytes,
            width,
            height,
        } => format!("{input_bytes} bytes -> {width}x{height}"),
        StageMetrics::Build {
            passable_cells,
            blocked_cells,
        } => format!("{passable_cells} open, {blocked_cells} walls"),
        StageMetrics::Search {
            strategy,
            cells_visited,
            path_length,
        } => format!("{strategy} visited={cells_visited} path={path_length}"),
        StageMetrics::Render {
            resolution,
            width,
            height,
        } => format!("{resolution}px/cell -> {width}x{height}"),
    }
}

/// Run the full pipeline, timing each stage with `clock`.
///
/// # Errors
///
/// Same as [`crate::process`].
pub fn process_with_diagnostics<C: Clock>(
    image_bytes: &[u8],
    config: &SolveConfig,
    clock: &C,
) -> Result<(ProcessResult, SolveDiagnostics), SolveError> {
    let total_start = clock.now();

    let t = clock.now();
    let decoded = crate::decode::decode_image(image_bytes)?;
    let decode = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Decode {
            input_bytes: image_bytes.len(),
            width: decoded.width(),
            height: decoded.height(),
        },
    };

    let t = clock.now();
    let grid = build_grid(&decoded.to_rgba16())?;
    let dims = grid.dimensions();
    let passable_cells = grid.passable_count();
    let build = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Build {
            passable_cells,
            blocked_cells: grid.rows().iter().map(Vec::len).sum::<usize>() - passable_cells,
        },
    };

    let t = clock.now();
    let (solved, cells_visited) = solve_with_outcome(grid, &config.path_finder);
    let path_length = solved.path().len();
    let search = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Search {
            strategy: config.path_finder.to_string(),
            cells_visited,
            path_length,
        },
    };

    let t = clock.now();
    let image = crate::render::render(&solved, config.resolution)?;
    let render = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Render {
            resolution: config.resolution.get(),
            width: image.width(),
            height: image.height(),
        },
    };

    let diagnostics = SolveDiagnostics {
        decode,
        build,
        search,
        render,
        total_duration: clock.elapsed(&total_start),
        summary: SolveSummary {
            grid_width: dims.width,
            grid_height: dims.height,
            solved: solved.is_solved(),
            path_length,
        },
    };

    Ok((ProcessResult { solved, image }, diagnostics))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::decode::tests::encode_png;
    use crate::grid::tests::maze_image;

    /// Clock that reports one millisecond for every measured interval.
    struct TickClock;

    impl Clock for TickClock {
        type Instant = ();

        fn now(&self) {}

        fn elapsed(&self, _since: &()) -> Duration {
            Duration::from_millis(1)
        }
    }

    #[test]
    fn duration_ms_converts_correctly() {
        let d = Duration::from_millis(1234);
        assert!((duration_ms(d) - 1234.0).abs() < 0.01);
    }

    #[test]
    fn collects_every_stage() {
        let png = encode_png(&maze_image(&["#.###", "#...#", "###.#"]));
        let (result, diag) =
            process_with_diagnostics(&png, &SolveConfig::default(), &TickClock).unwrap();

        assert!(result.solved.is_solved());
        assert!(diag.summary.solved);
        assert_eq!(diag.summary.path_length, 5);
        assert_eq!((diag.summary.grid_width, diag.summary.grid_height), (5, 3));
        assert!(matches!(
            diag.decode.metrics,
            StageMetrics::Decode {
                width: 5,
                height: 3,
                ..
            }
        ));
        assert!(matches!(
            diag.build.metrics,
            StageMetrics::Build {
                passable_cells: 5,
                blocked_cells: 10
            }
        ));
        assert!(matches!(
            diag.search.metrics,
            StageMetrics::Search { path_length: 5, .. }
        ));
        assert!(matches!(
            diag.render.metrics,
            StageMetrics::Render {
                resolution: 12,
                width: 60,
                height: 36
            }
        ));
        assert_eq!(diag.total_duration, Duration::from_millis(1));
    }

    #[test]
    fn report_mentions_stages_and_outcome() {
        let png = encode_png(&maze_image(&[".#", "#."]));
        let (_, diag) =
            process_with_diagnostics(&png, &SolveConfig::default(), &TickClock).unwrap();
        let report = diag.report();
        assert!(report.contains("Solve Diagnostics Report"));
        assert!(report.contains("Search"));
        assert!(report.contains("DepthFirst"));
        assert!(report.contains("no path"));
    }

    #[test]
    fn diagnostics_serialize_to_json() {
        let png = encode_png(&maze_image(&["#.#", "#.#"]));
        let (_, diag) =
            process_with_diagnostics(&png, &SolveConfig::default(), &TickClock).unwrap();
        let json = serde_json::to_string(&diag).unwrap();
        let back: SolveDiagnostics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.summary.path_length, 2);
        assert!((back.search.duration.as_secs_f64() - 0.001).abs() < 1e-9);
    }
}
