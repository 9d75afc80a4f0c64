//! Grid building: turn a decoded image into a maze grid.
//!
//! Each source pixel becomes exactly one cell. The start is the first
//! passable cell in row 0 scanning left to right, and the finish is the
//! first passable cell in the last row.

use image::{GenericImageView, Pixel};

use crate::classify::{Intensity, classify};
use crate::types::{Boundary, Cell, Coordinate, Dimensions, SolveError};

/// The maze: a rectangular matrix of cells plus entry and exit.
///
/// Cells are stored `[row][column]`. The start always lies in row 0 and
/// the finish in the last row, and both are passable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: Dimensions,
    start: Coordinate,
    finish: Coordinate,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from an already-classified passability matrix
    /// indexed `[row][column]`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyGrid`] if there are no rows or no
    /// columns, or if the rows differ in length.
    /// Returns [`SolveError::NoEntryPoint`] if the first or last row has
    /// no passable cell.
    pub fn from_passability(rows: &[Vec<bool>]) -> Result<Self, SolveError> {
        let height = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let width = rows
            .first()
            .map_or(0, |row| u32::try_from(row.len()).unwrap_or(u32::MAX));

        let dimensions = Dimensions { width, height };
        if width == 0 || height == 0 || rows.iter().any(|row| row.len() != rows[0].len()) {
            return Err(SolveError::EmptyGrid { width, height });
        }

        let cells = rows
            .iter()
            .zip(0..)
            .map(|(row, y)| {
                row.iter()
                    .zip(0..)
                    .map(|(&passable, x)| Cell {
                        coordinate: Coordinate::new(x, y),
                        passable,
                    })
                    .collect()
            })
            .collect();

        Self::with_entry_points(dimensions, cells)
    }

    /// Locate start and finish on the boundary rows.
    fn with_entry_points(
        dimensions: Dimensions,
        cells: Vec<Vec<Cell>>,
    ) -> Result<Self, SolveError> {
        let first_passable = |row: Option<&Vec<Cell>>| {
            row.and_then(|cells| cells.iter().find(|c| c.passable))
                .map(|c| c.coordinate)
        };

        let start = first_passable(cells.first()).ok_or(SolveError::NoEntryPoint {
            boundary: Boundary::Top,
        })?;
        let finish = first_passable(cells.last()).ok_or(SolveError::NoEntryPoint {
            boundary: Boundary::Bottom,
        })?;

        log::debug!(
            "built {}x{} grid, start ({},{}), finish ({},{})",
            dimensions.width,
            dimensions.height,
            start.x,
            start.y,
            finish.x,
            finish.y,
        );

        Ok(Self {
            dimensions,
            start,
            finish,
            cells,
        })
    }

    /// Grid extent in cells.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Entry cell (row 0).
    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Exit cell (last row).
    #[must_use]
    pub const fn finish(&self) -> Coordinate {
        self.finish
    }

    /// The cell at `coordinate`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        let row = self.cells.get(usize::try_from(coordinate.y).ok()?)?;
        row.get(usize::try_from(coordinate.x).ok()?)
    }

    /// Returns `true` if `coordinate` is in bounds and passable.
    #[must_use]
    pub fn is_passable(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate).is_some_and(|c| c.passable)
    }

    /// All cells, row by row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Number of passable cells.
    #[must_use]
    pub fn passable_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.passable).count()
    }
}

/// Build a grid from a decoded image, one cell per pixel.
///
/// # Errors
///
/// Returns [`SolveError::EmptyGrid`] if the image has no pixels.
/// Returns [`SolveError::NoEntryPoint`] if the top or bottom row has no
/// passable pixel.
pub fn build_grid<I>(image: &I) -> Result<Grid, SolveError>
where
    I: GenericImageView,
    <I::Pixel as Pixel>::Subpixel: Intensity,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SolveError::EmptyGrid { width, height });
    }

    let cells = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| Cell {
                    coordinate: Coordinate::new(x, y),
                    passable: classify(&image.get_pixel(x, y)).is_passable(),
                })
                .collect()
        })
        .collect();

    Grid::with_entry_points(Dimensions { width, height }, cells)
}
