//! Text formatting: grid statistics plus ASCII art of the maze.

use std::collections::HashSet;
use std::fmt;

use crate::grid::Grid;
use crate::search::SolvedGrid;
use crate::types::Coordinate;

/// Marks a cell on the path.
pub const PATH_CHAR: char = '+';

/// Marks an open cell.
pub const FLOOR_CHAR: char = ' ';

/// Marks a wall.
pub const WALL_CHAR: char = '█';

/// Format the header block: dimensions, start and finish.
fn write_header(out: &mut String, grid: &Grid) {
    let dims = grid.dimensions();
    let (start, finish) = (grid.start(), grid.finish());
    out.push_str(&format!(
        "Dimensions (w x h): {} x {}\n",
        dims.width, dims.height
    ));
    out.push_str(&format!("Start Position (x,y): ({},{})\n", start.x, start.y));
    out.push_str(&format!(
        "Finish Position (x,y): ({},{})\n",
        finish.x, finish.y
    ));
}

/// Append one line per row, one character per cell.
fn write_cells(out: &mut String, grid: &Grid, on_path: &HashSet<Coordinate>) {
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| {
            if on_path.contains(&cell.coordinate) {
                PATH_CHAR
            } else if cell.passable {
                FLOOR_CHAR
            } else {
                WALL_CHAR
            }
        }));
        out.push('\n');
    }
}

/// Format `grid` as a header followed by its cells, marking every
/// coordinate in `on_path`.
#[must_use]
pub fn format_grid(grid: &Grid, on_path: &HashSet<Coordinate>) -> String {
    let mut out = String::new();
    write_header(&mut out, grid);
    write_cells(&mut out, grid, on_path);
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grid(self, &HashSet::new()))
    }
}

impl fmt::Display for SolvedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        let on_path: HashSet<Coordinate> = self.path().coordinates().iter().copied().collect();

        let mut out = String::new();
        write_header(&mut out, grid);
        if self.is_solved() {
            out.push_str(&format!("Path: {} cells\n", self.path().len()));
        } else {
            out.push_str("Path: not found\n");
        }
        write_cells(&mut out, grid, &on_path);
        f.write_str(&out)
    }
}
