//! Rendering: project a solved grid back into a raster image.
//!
//! Each cell becomes a `resolution x resolution` block: white for open
//! floor, black for walls. Path cells are then painted over with a red
//! gradient that runs from pale at the start to saturated at the finish.

use std::num::NonZeroU32;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::search::SolvedGrid;
use crate::types::SolveError;

/// Colour of a passable cell.
pub const FLOOR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Colour of a blocked cell.
pub const WALL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Green and blue value of the first path cell.
const GRADIENT_BASE: u64 = 50;

/// Green and blue range spread across the path.
const GRADIENT_SPAN: u64 = 150;

/// Colour of the path cell at `index` in a path of `len` cells.
///
/// Red is fixed at 255; green and blue are
/// `50 + floor(150 * index / len)`, so the first cell is `(255, 50, 50)`
/// and values never decrease along the path.
#[must_use]
pub fn path_color(index: usize, len: usize) -> Rgba<u8> {
    let offset = if len == 0 {
        0
    } else {
        (GRADIENT_SPAN * index as u64 / len as u64).min(GRADIENT_SPAN)
    };
    let level = u8::try_from(GRADIENT_BASE + offset).unwrap_or(u8::MAX);
    Rgba([255, level, level, 255])
}

/// Render a solved grid at `resolution` pixels per cell edge.
///
/// The output measures `width * resolution` by `height * resolution`.
/// An empty path renders the bare maze.
///
/// # Errors
///
/// Returns [`SolveError::RenderTooLarge`] if the output extent does not
/// fit the addressable pixel range.
pub fn render(solved: &SolvedGrid, resolution: NonZeroU32) -> Result<RgbaImage, SolveError> {
    let grid = solved.grid();
    let dims = grid.dimensions();
    let scale = resolution.get();

    let too_large = || SolveError::RenderTooLarge {
        width: dims.width,
        height: dims.height,
        resolution: scale,
    };
    let width = dims.width.checked_mul(scale).ok_or_else(too_large)?;
    let height = dims.height.checked_mul(scale).ok_or_else(too_large)?;
    // Block origins are drawn in i32 space.
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large());
    }

    let mut image = RgbaImage::from_fn(width, height, |x, y| {
        let passable = grid
            .rows()
            .get((y / scale) as usize)
            .and_then(|row| row.get((x / scale) as usize))
            .is_some_and(|cell| cell.passable);
        if passable { FLOOR_COLOR } else { WALL_COLOR }
    });

    let path = solved.path().coordinates();
    for (index, at) in path.iter().enumerate() {
        let (Ok(left), Ok(top)) = (
            i32::try_from(at.x * scale),
            i32::try_from(at.y * scale),
        ) else {
            return Err(too_large());
        };
        draw_filled_rect_mut(
            &mut image,
            Rect::at(left, top).of_size(scale, scale),
            path_color(index, path.len()),
        );
    }

    Ok(image)
}
