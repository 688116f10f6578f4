//! Wall materialization - turns the opening tables into rectangular obstacles
//!
//! Every table entry still closed after generation becomes one thin wall
//! centered on the boundary between the two cells it separates. Open entries
//! emit nothing.

use serde::Serialize;

use crate::grid::MazeGrid;

/// Thickness of an interior maze wall, in world units.
pub const WALL_THICKNESS: f32 = 10.0;

/// Thickness of the arena border walls.
pub const BORDER_THICKNESS: f32 = 2.0;

/// A rectangular obstacle, positioned by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Emit one wall per closed table entry.
///
/// Closed horizontal entries span one `unit_x` along X and sit on the
/// boundary below their cell; closed vertical entries span one `unit_y`
/// along Y and sit on the boundary to the right of their cell.
pub fn materialize(grid: &MazeGrid, unit_x: f32, unit_y: f32) -> Vec<Wall> {
    let mut walls = Vec::new();

    for row in 0..grid.rows() - 1 {
        for col in 0..grid.cols() {
            if grid.horizontal_open(row, col) {
                continue;
            }
            walls.push(Wall {
                x: col as f32 * unit_x + unit_x / 2.0,
                y: row as f32 * unit_y + unit_y,
                width: unit_x,
                height: WALL_THICKNESS,
            });
        }
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() - 1 {
            if grid.vertical_open(row, col) {
                continue;
            }
            walls.push(Wall {
                x: col as f32 * unit_x + unit_x,
                y: row as f32 * unit_y + unit_y / 2.0,
                width: WALL_THICKNESS,
                height: unit_y,
            });
        }
    }

    walls
}

/// The four border walls the demos put around the playfield.
pub fn arena_bounds(width: f32, height: f32) -> [Wall; 4] {
    [
        Wall {
            x: width / 2.0,
            y: 0.0,
            width,
            height: BORDER_THICKNESS,
        },
        Wall {
            x: width / 2.0,
            y: height,
            width,
            height: BORDER_THICKNESS,
        },
        Wall {
            x: 0.0,
            y: height / 2.0,
            width: BORDER_THICKNESS,
            height,
        },
        Wall {
            x: width,
            y: height / 2.0,
            width: BORDER_THICKNESS,
            height,
        },
    ]
}
