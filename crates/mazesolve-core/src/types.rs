//! Shared types for the maze solver.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::search::PathFinderKind;

/// Re-export `RgbaImage` so downstream crates can reference the
/// rendered output without depending on `image` directly.
pub use image::RgbaImage;

/// A cell position in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column (cells from the left edge).
    pub x: u32,
    /// Row (cells from the top edge).
    pub y: u32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighbour one unit away in `direction`, or `None` if it would
    /// fall outside `bounds`.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: Dimensions) -> Option<Self> {
        let next = match direction {
            Direction::West => Self::new(self.x.checked_sub(1)?, self.y),
            Direction::South => Self::new(self.x, self.y.checked_add(1)?),
            Direction::East => Self::new(self.x.checked_add(1)?, self.y),
            Direction::North => Self::new(self.x, self.y.checked_sub(1)?),
        };
        bounds.contains(next).then_some(next)
    }

    /// Returns `true` if `other` is exactly one unit away on exactly one axis.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }
}

/// One of the four axis-aligned moves between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Decreasing `x`.
    West,
    /// Increasing `y`.
    South,
    /// Increasing `x`.
    East,
    /// Decreasing `y`.
    North,
}

impl Direction {
    /// Neighbour priority used by the depth-first search.
    ///
    /// This order decides which of several valid paths is returned.
    pub const SEARCH_ORDER: [Self; 4] = [Self::West, Self::South, Self::East, Self::North];
}

/// Grid dimensions in cells (one cell per source pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Dimensions {
    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if `coordinate` lies within `[0, width) x [0, height)`.
    #[must_use]
    pub const fn contains(self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }
}

/// One grid position and its passability.
///
/// Passability is fixed when the grid is built. Visitation state is
/// owned by the search, not by the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Where this cell sits in the grid.
    pub coordinate: Coordinate,
    /// Whether the cell can be walked through.
    pub passable: bool,
}

/// An ordered walk of coordinates from start to finish inclusive.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Path(Vec<Coordinate>);

impl Path {
    /// Create a new path from a vector of coordinates.
    #[must_use]
    pub const fn new(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }

    /// The "no path found" value.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if the path has no coordinates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of coordinates in the path.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first coordinate, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Coordinate> {
        self.0.first()
    }

    /// Returns the last coordinate, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Coordinate> {
        self.0.last()
    }

    /// Returns a slice of all coordinates in traversal order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Consumes the path and returns the underlying vector.
    #[must_use]
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.0
    }

    /// Returns `true` if every consecutive pair is a unit axis-aligned
    /// step and no coordinate repeats.
    #[must_use]
    pub fn is_legal_walk(&self) -> bool {
        let steps_ok = self.0.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        steps_ok && self.0.iter().all(|c| seen.insert(*c))
    }
}

/// Which row of the maze boundary an entry point is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// Row 0, where the start is taken from.
    Top,
    /// The last row, where the finish is taken from.
    Bottom,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// Configuration for solving and rendering a maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Output pixels per cell edge.
    pub resolution: NonZeroU32,

    /// Which path search strategy to use.
    pub path_finder: PathFinderKind,
}

impl SolveConfig {
    /// Default pixels per cell edge for rendered output.
    pub const DEFAULT_RESOLUTION: NonZeroU32 = match NonZeroU32::new(12) {
        Some(n) => n,
        None => unreachable!(),
    };
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            path_finder: PathFinderKind::default(),
        }
    }
}

/// Result of running the full solve pipeline.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// The grid together with the discovered (possibly empty) path.
    pub solved: crate::SolvedGrid,

    /// The rendered maze with the path overlaid.
    pub image: RgbaImage,
}

/// Errors that can occur while solving a maze.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The image could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input byte slice was empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The grid has no cells, or its rows differ in length.
    #[error("grid is empty or not rectangular ({width}x{height})")]
    EmptyGrid {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },

    /// A boundary row has no passable cell to enter or leave the maze.
    #[error("no passable cell in the {boundary} row; the image is not a valid maze")]
    NoEntryPoint {
        /// The row that was scanned.
        boundary: Boundary,
    },

    /// The rendered image would not fit in the addressable pixel range.
    #[error("rendered image too large: {width}x{height} cells at {resolution}px per cell")]
    RenderTooLarge {
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
        /// Requested pixels per cell edge.
        resolution: u32,
    },
}
