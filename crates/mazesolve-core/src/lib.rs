//! mazesolve-core: Pure maze solving pipeline (sans-IO).
//!
//! Converts a black/white raster image into a maze grid, finds a path
//! from the entry in the top row to the exit in the bottom row, and
//! renders the result back into an image and a text summary:
//! decode -> classify + build grid -> depth-first search -> render.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. Reading the input file,
//! encoding the output, and naming output files live elsewhere.

pub mod classify;
pub mod decode;
pub mod diagnostics;
pub mod grid;
pub mod render;
pub mod search;
pub mod text;
pub mod types;

pub use classify::{Passability, classify};
pub use diagnostics::{Clock, SolveDiagnostics, process_with_diagnostics};
pub use grid::{Grid, build_grid};
pub use render::render;
pub use search::{PathFinder, PathFinderKind, SearchOutcome, SolvedGrid, solve};
pub use text::format_grid;
pub use types::{
    Boundary, Cell, Coordinate, Dimensions, Direction, Path, ProcessResult, SolveConfig,
    SolveError,
};

/// Run the full maze solving pipeline.
///
/// Takes raw image bytes (PNG, JPEG, BMP, WebP) and a configuration,
/// then produces a [`ProcessResult`] holding the solved grid and the
/// rendered image.
///
/// # Pipeline steps
///
/// 1. Decode the image
/// 2. Classify every pixel and build the grid, locating start and finish
/// 3. Search for a path (an unsolvable maze yields an empty path)
/// 4. Render the grid with the path overlaid
///
/// # Errors
///
/// Returns [`SolveError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`SolveError::ImageDecode`] if the image format is unrecognized.
/// Returns [`SolveError::NoEntryPoint`] if the top or bottom row has no
/// open pixel.
/// Returns [`SolveError::RenderTooLarge`] if the output image would be
/// too large.
pub fn process(image_bytes: &[u8], config: &SolveConfig) -> Result<ProcessResult, SolveError> {
    // 1. Decode, keeping full channel depth for classification.
    let decoded = decode::decode_image(image_bytes)?;

    // 2. Grid.
    let grid = build_grid(&decoded.to_rgba16())?;

    // 3. Search.
    let solved = solve(grid, &config.path_finder);

    // 4. Render.
    let image = render(&solved, config.resolution)?;

    Ok(ProcessResult { solved, image })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::decode::tests::encode_png;
    use crate::grid::tests::maze_image;

    #[test]
    fn process_empty_input() {
        let result = process(&[], &SolveConfig::default());
        assert!(matches!(result, Err(SolveError::EmptyInput)));
    }

    #[test]
    fn process_corrupt_input() {
        let result = process(&[0xFF, 0x00], &SolveConfig::default());
        assert!(matches!(result, Err(SolveError::ImageDecode(_))));
    }

    #[test]
    fn process_all_black_image_has_no_entry() {
        let png = encode_png(&image::RgbaImage::from_pixel(
            6,
            6,
            image::Rgba([0, 0, 0, 255]),
        ));
        let result = process(&png, &SolveConfig::default());
        assert!(matches!(
            result,
            Err(SolveError::NoEntryPoint {
                boundary: Boundary::Top
            })
        ));
    }

    #[test]
    fn process_solves_and_renders() {
        let png = encode_png(&maze_image(&[
            "#.#####",
            "#.....#",
            "#####.#",
            "#.....#",
            "#.#####",
        ]));
        let config = SolveConfig {
            resolution: NonZeroU32::new(4).unwrap(),
            ..SolveConfig::default()
        };
        let result = process(&png, &config).unwrap();

        assert!(result.solved.is_solved());
        let path = result.solved.path();
        assert_eq!(path.first(), Some(&Coordinate::new(1, 0)));
        assert_eq!(path.last(), Some(&Coordinate::new(1, 4)));
        assert!(path.is_legal_walk());
        assert_eq!(path.len(), 13);
        assert_eq!(result.image.dimensions(), (28, 20));
        assert_eq!(
            *result.image.get_pixel(4, 0),
            render::path_color(0, path.len())
        );
    }

    #[test]
    fn process_unsolvable_maze_is_not_an_error() {
        let png = encode_png(&maze_image(&["#.#", "###", "#.#"]));
        let result = process(&png, &SolveConfig::default()).unwrap();
        assert!(!result.solved.is_solved());
        assert!(result.solved.to_string().contains("Path: not found"));
        assert_eq!(result.image.dimensions(), (36, 36));
    }
}
