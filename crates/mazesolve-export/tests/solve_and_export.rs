//! Integration test: run a maze image through the full pipeline and
//! export the rendering to PNG.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::num::NonZeroU32;

use image::{Rgba, RgbaImage};
use mazesolve_core::render::{FLOOR_COLOR, WALL_COLOR, path_color};
use mazesolve_core::{Coordinate, SolveConfig};

/// Walls are `#`, floor is anything else.
const MAZE: &[&str] = &[
    "#.#########",
    "#.#.....#.#",
    "#.#.###.#.#",
    "#...#...#.#",
    "#####.###.#",
    "#.....#...#",
    "#.#####.#.#",
    "#.......#.#",
    "#########.#",
];

fn maze_png(rows: &[&str]) -> Vec<u8> {
    let width = u32::try_from(rows[0].len()).unwrap();
    let height = u32::try_from(rows.len()).unwrap();
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if rows[y as usize].as_bytes()[x as usize] == b'#' {
            Rgba([20, 20, 20, 255])
        } else {
            Rgba([240, 240, 240, 255])
        }
    });
    mazesolve_export::to_png(&img).expect("fixture should encode")
}

#[test]
fn maze_pipeline_to_png() {
    let png = maze_png(MAZE);
    let config = SolveConfig {
        resolution: NonZeroU32::new(3).unwrap(),
        ..SolveConfig::default()
    };

    let result = mazesolve_core::process(&png, &config).expect("pipeline should succeed");
    let solved = &result.solved;
    assert_eq!(solved.grid().start(), Coordinate::new(1, 0));
    assert_eq!(solved.grid().finish(), Coordinate::new(9, 8));
    assert!(solved.is_solved(), "expected a path:\n{solved}");

    let path = solved.path();
    assert!(path.is_legal_walk());
    assert_eq!(path.first(), Some(&solved.grid().start()));
    assert_eq!(path.last(), Some(&solved.grid().finish()));
    for at in path.coordinates() {
        assert!(solved.grid().is_passable(*at));
    }

    let text = solved.to_string();
    assert!(text.starts_with("Dimensions (w x h): 11 x 9\n"));
    assert_eq!(text.lines().count(), 4 + MAZE.len());

    let bytes = mazesolve_export::to_png(&result.image).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (33, 27));

    // Each path block carries its gradient colour; other cells are
    // plain floor or wall.
    let on_path: Vec<Coordinate> = path.coordinates().to_vec();
    for row in solved.grid().rows() {
        for cell in row {
            let at = cell.coordinate;
            let expected = on_path
                .iter()
                .position(|c| *c == at)
                .map_or(
                    if cell.passable { FLOOR_COLOR } else { WALL_COLOR },
                    |i| path_color(i, on_path.len()),
                );
            assert_eq!(*decoded.get_pixel(at.x * 3 + 1, at.y * 3 + 1), expected);
        }
    }
}

#[test]
fn unsolvable_maze_still_exports() {
    let png = maze_png(&["#.###", "#.#.#", "###.#"]);
    let result = mazesolve_core::process(&png, &SolveConfig::default()).unwrap();
    assert!(!result.solved.is_solved());

    let bytes = mazesolve_export::to_png(&result.image).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(
        decoded
            .pixels()
            .all(|p| *p == FLOOR_COLOR || *p == WALL_COLOR)
    );
}
