//! Path search: find a route from the maze's start to its finish.
//!
//! This module defines the [`PathFinder`] trait for pluggable search
//! strategies and the [`PathFinderKind`] enum for selecting one at
//! runtime.
//!
//! The depth-first strategy does not return the shortest path. It
//! returns the first path reached when neighbours are tried in
//! [`Direction::SEARCH_ORDER`] (west, south, east, north). Every cell is
//! entered at most once and cells on abandoned branches stay excluded,
//! so the search ends after at most `width * height` cells.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{Coordinate, Dimensions, Direction, Path};

/// Selects which path search strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathFinderKind {
    /// Depth-first search with an explicit stack.
    #[default]
    DepthFirst,
}

impl std::fmt::Display for PathFinderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthFirst => f.write_str("DepthFirst"),
        }
    }
}

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path joining start and finish, both inclusive.
    Found {
        /// The path in traversal order.
        path: Path,
        /// Number of cells entered during the search.
        cells_visited: usize,
    },
    /// Start and finish are not connected through passable cells.
    Exhausted {
        /// Number of cells entered before giving up.
        cells_visited: usize,
    },
}

impl SearchOutcome {
    /// Returns `true` if a path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path, if one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::Exhausted { .. } => None,
        }
    }

    /// Number of cells entered during the search.
    #[must_use]
    pub const fn cells_visited(&self) -> usize {
        match self {
            Self::Found { cells_visited, .. } | Self::Exhausted { cells_visited } => *cells_visited,
        }
    }

    /// Consumes the outcome, returning the path or an empty path.
    #[must_use]
    pub fn into_path(self) -> Path {
        match self {
            Self::Found { path, .. } => path,
            Self::Exhausted { .. } => Path::empty(),
        }
    }
}

/// Trait for path search strategies.
pub trait PathFinder {
    /// Search `grid` for a path from `start` to `finish`.
    ///
    /// The grid is not modified; all visitation state belongs to the
    /// search.
    fn find_path(&self, grid: &Grid, start: Coordinate, finish: Coordinate) -> SearchOutcome;
}

impl PathFinder for PathFinderKind {
    fn find_path(&self, grid: &Grid, start: Coordinate, finish: Coordinate) -> SearchOutcome {
        let outcome = match *self {
            Self::DepthFirst => depth_first(grid, start, finish),
        };
        log::debug!(
            "{} search from ({},{}) to ({},{}): {} after {} cells",
            self,
            start.x,
            start.y,
            finish.x,
            finish.y,
            if outcome.is_found() { "found" } else { "exhausted" },
            outcome.cells_visited(),
        );
        outcome
    }
}

/// A grid paired with the path found through it.
///
/// Only produced by [`solve`]. The path is empty when the maze has no
/// solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    grid: Grid,
    path: Path,
}

impl SolvedGrid {
    /// The underlying maze.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The discovered path, empty if none exists.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a path from start to finish was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Search `grid` from its start to its finish.
///
/// An unreachable finish is not an error: the returned [`SolvedGrid`]
/// simply carries an empty path.
#[must_use = "returns the solved grid"]
pub fn solve(grid: Grid, finder: &impl PathFinder) -> SolvedGrid {
    let (solved, _) = solve_with_outcome(grid, finder);
    solved
}

/// Like [`solve`], also reporting how many cells were visited.
pub(crate) fn solve_with_outcome(grid: Grid, finder: &impl PathFinder) -> (SolvedGrid, usize) {
    let outcome = finder.find_path(&grid, grid.start(), grid.finish());
    let cells_visited = outcome.cells_visited();
    let solved = SolvedGrid {
        grid,
        path: outcome.into_path(),
    };
    (solved, cells_visited)
}

/// Visitation flags parallel to the grid, owned by one search.
struct Visited {
    width: usize,
    flags: Vec<bool>,
    count: usize,
}

impl Visited {
    fn new(dimensions: Dimensions) -> Self {
        let width = dimensions.width as usize;
        Self {
            width,
            flags: vec![false; width * dimensions.height as usize],
            count: 0,
        }
    }

    fn index(&self, at: Coordinate) -> usize {
        at.y as usize * self.width + at.x as usize
    }

    fn contains(&self, at: Coordinate) -> bool {
        self.flags.get(self.index(at)).copied().unwrap_or(true)
    }

    fn insert(&mut self, at: Coordinate) {
        let index = self.index(at);
        if let Some(flag) = self.flags.get_mut(index)
            && !*flag
        {
            *flag = true;
            self.count += 1;
        }
    }
}

/// One level of the depth-first stack: a cell on the current path and
/// the index of the next direction to try from it.
struct Frame {
    at: Coordinate,
    next_direction: usize,
}

/// Iterative depth-first search.
///
/// Equivalent to the recursive formulation "if at finish, succeed;
/// otherwise mark visited and recurse into each eligible neighbour in
/// order", with the stack held on the heap. The frames on the stack are
/// exactly the current path.
fn depth_first(grid: &Grid, start: Coordinate, finish: Coordinate) -> SearchOutcome {
    let dimensions = grid.dimensions();

    if start == finish {
        return SearchOutcome::Found {
            path: Path::new(vec![start]),
            cells_visited: 0,
        };
    }
    if !grid.is_passable(start) {
        return SearchOutcome::Exhausted { cells_visited: 0 };
    }

    let mut visited = Visited::new(dimensions);
    visited.insert(start);
    let mut stack = vec![Frame {
        at: start,
        next_direction: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::SEARCH_ORDER.get(frame.next_direction) else {
            // Dead end: abandon this cell but leave it marked.
            stack.pop();
            continue;
        };
        frame.next_direction += 1;

        let Some(candidate) = frame.at.step(direction, dimensions) else {
            continue;
        };
        if !grid.is_passable(candidate) || visited.contains(candidate) {
            continue;
        }

        if candidate == finish {
            let mut path: Vec<Coordinate> = stack.iter().map(|f| f.at).collect();
            path.push(finish);
            return SearchOutcome::Found {
                path: Path::new(path),
                cells_visited: visited.count,
            };
        }

        visited.insert(candidate);
        stack.push(Frame {
            at: candidate,
            next_direction: 0,
        });
    }

    SearchOutcome::Exhausted {
        cells_visited: visited.count,
    }
}
