//! Maze generation - randomized recursive backtracker
//!
//! Carves a perfect maze (a spanning tree over the cell graph) by depth-first
//! traversal with a shuffled neighbor order per cell. The traversal keeps an
//! explicit frame stack instead of recursing, so grid size is bounded by
//! memory rather than call-stack depth; frames resume exactly where the
//! recursive form would, so a given seed carves the same maze either way.

use crate::grid::MazeGrid;
use crate::rng::shuffle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// One suspended activation of the recursive algorithm: a visited cell plus
/// the shuffled candidates it has not tried yet.
struct Frame {
    row: u32,
    col: u32,
    candidates: [(i32, i32, Direction); 4],
    next: usize,
}

/// Mark the cell visited and shuffle its neighbor order. This is the entry
/// point of each recursive activation, so the RNG call order matches the
/// recursive algorithm.
fn visit(grid: &mut MazeGrid, row: u32, col: u32, rng_state: &mut u32) -> Frame {
    grid.mark_visited(row, col);
    let (r, c) = (row as i32, col as i32);
    let mut candidates = [
        (r - 1, c, Direction::Up),
        (r, c + 1, Direction::Right),
        (r + 1, c, Direction::Down),
        (r, c - 1, Direction::Left),
    ];
    shuffle(&mut candidates, rng_state);
    Frame {
        row,
        col,
        candidates,
        next: 0,
    }
}

/// Carve passages into `grid`, starting from the given cell.
///
/// Afterwards every cell is visited and connected to the start by exactly
/// one path of openings.
pub fn carve(
    grid: &mut MazeGrid,
    start_row: u32,
    start_col: u32,
    rng_state: &mut u32,
) -> Result<(), String> {
    if !grid.in_bounds(start_row as i32, start_col as i32) {
        return Err(format!(
            "start cell ({start_row}, {start_col}) outside {}x{} grid",
            grid.rows(),
            grid.cols()
        ));
    }

    let mut stack = Vec::with_capacity((grid.rows() * grid.cols()) as usize);
    stack.push(visit(grid, start_row, start_col, rng_state));

    loop {
        let descend = match stack.last_mut() {
            None => break,
            Some(frame) => {
                let mut descend = None;
                while frame.next < frame.candidates.len() {
                    let (nr, nc, dir) = frame.candidates[frame.next];
                    frame.next += 1;
                    if !grid.in_bounds(nr, nc) {
                        continue;
                    }
                    let (nr, nc) = (nr as u32, nc as u32);
                    // A neighbor may have been claimed by a deeper subtree
                    // since this frame was suspended.
                    if grid.is_visited(nr, nc) {
                        continue;
                    }
                    match dir {
                        Direction::Left => grid.open_vertical(frame.row, frame.col - 1),
                        Direction::Right => grid.open_vertical(frame.row, frame.col),
                        Direction::Up => grid.open_horizontal(frame.row - 1, frame.col),
                        Direction::Down => grid.open_horizontal(frame.row, frame.col),
                    }
                    descend = Some((nr, nc));
                    break;
                }
                descend
            }
        };

        match descend {
            Some((row, col)) => {
                let frame = visit(grid, row, col, rng_state);
                stack.push(frame);
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}
