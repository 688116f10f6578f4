//! Maze grid - three flat boolean tables
//!
//! One table tracks visited cells, two track removed walls: `vertical` holds
//! the R x (C-1) openings between horizontally adjacent cells, `horizontal`
//! the (R-1) x C openings between vertically adjacent cells. The generator
//! fills the tables in a single pass; afterwards they are read-only input to
//! the wall materializer.

/// The three tables backing one maze.
#[derive(Debug)]
pub struct MazeGrid {
    rows: u32,
    cols: u32,
    visited: Vec<bool>,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

impl MazeGrid {
    /// Upper bound on total cells. Keeps the table sizes and all index
    /// arithmetic well inside u32 range.
    pub const MAX_CELLS: u64 = 1 << 24;

    pub fn new(rows: u32, cols: u32) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            ));
        }
        if rows as u64 * cols as u64 > Self::MAX_CELLS {
            return Err(format!(
                "grid of {rows}x{cols} cells exceeds the {} cell limit",
                Self::MAX_CELLS
            ));
        }
        Ok(Self {
            rows,
            cols,
            visited: vec![false; (rows * cols) as usize],
            vertical: vec![false; (rows * (cols - 1)) as usize],
            horizontal: vec![false; ((rows - 1) * cols) as usize],
        })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    #[inline]
    fn cell_index(&self, row: u32, col: u32) -> usize {
        (row * self.cols + col) as usize
    }

    #[inline]
    pub fn is_visited(&self, row: u32, col: u32) -> bool {
        self.visited[self.cell_index(row, col)]
    }

    /// Visited is one-way: there is no reset.
    #[inline]
    pub fn mark_visited(&mut self, row: u32, col: u32) {
        let idx = self.cell_index(row, col);
        self.visited[idx] = true;
    }

    /// Opening between cell (row, col) and (row, col + 1).
    #[inline]
    pub fn vertical_open(&self, row: u32, col: u32) -> bool {
        self.vertical[(row * (self.cols - 1) + col) as usize]
    }

    #[inline]
    pub fn open_vertical(&mut self, row: u32, col: u32) {
        let idx = (row * (self.cols - 1) + col) as usize;
        self.vertical[idx] = true;
    }

    /// Opening between cell (row, col) and (row + 1, col).
    #[inline]
    pub fn horizontal_open(&self, row: u32, col: u32) -> bool {
        self.horizontal[(row * self.cols + col) as usize]
    }

    #[inline]
    pub fn open_horizontal(&mut self, row: u32, col: u32) {
        let idx = (row * self.cols + col) as usize;
        self.horizontal[idx] = true;
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    /// Total removed walls across both opening tables.
    pub fn open_count(&self) -> usize {
        self.vertical.iter().filter(|v| **v).count()
            + self.horizontal.iter().filter(|v| **v).count()
    }

    /// Total internal cell boundaries: R(C-1) + C(R-1).
    pub fn internal_edge_count(&self) -> usize {
        (self.rows * (self.cols - 1) + (self.rows - 1) * self.cols) as usize
    }
}
