//! Board module - occupancy grid, wall kicks, line clears, and the AI
//! scoring heuristic
//!
//! The grid is 10 columns x 22 rows (20 visible + 2 hidden buffer rows) in a
//! flat array for cache locality. Coordinates: x in 0..=9 left to right,
//! y in 0..=21 with y = 0 at the floor. Every coordinate outside the grid
//! reads as occupied, which doubles as the wall and floor - there is no
//! separate bounds-check path anywhere in the collision logic.

use crate::core::tetromino::ActivePiece;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH, BUFFER_ROW, SHADOW_GRAY, VISIBLE_ROWS};

const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// One grid cell. A cell can hold a locked block, a shadow projection
/// (painted like a block but flagged), and a transient simulated-clear mark
/// that only exists inside `get_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgb,
    pub shadow: bool,
    simulated: bool,
}

/// The game board.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::default(); BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y * BOARD_WIDTH + x) as usize)
    }

    /// Read a cell for rendering. Out-of-range reads come back empty; the
    /// UI collaborator only asks about the visible rows.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or_default()
    }

    /// True if (x, y) holds a block or lies outside the grid. The implicit
    /// wall behavior is relied on by collision, kicks, and scoring alike.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].occupied,
            None => true,
        }
    }

    fn is_shadow(&self, x: i32, y: i32) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].shadow,
            None => false,
        }
    }

    fn is_simulated(&self, x: i32, y: i32) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].simulated,
            None => false,
        }
    }

    /// Rotate (x, y) a quarter turn about `center` (half-cell units).
    /// Both center components share parity, so the division is exact.
    #[inline]
    fn rotated(x: i32, y: i32, center: (i32, i32)) -> (i32, i32) {
        let (cx, cy) = center;
        ((cx - cy) / 2 + y, (cx + cy) / 2 - x)
    }

    /// Whether sliding the piece one column right before retrying the
    /// rotation would leave this candidate cell clear. A rotation kicks
    /// only when all four candidate cells agree.
    pub fn left_kick(&self, x: i32, y: i32, center: (i32, i32)) -> bool {
        let (rx, ry) = Self::rotated(x, y, center);
        !self.is_occupied(rx, ry) && !self.is_occupied(rx + 1, ry)
    }

    /// Mirror of `left_kick` for a shift one column left.
    pub fn right_kick(&self, x: i32, y: i32, center: (i32, i32)) -> bool {
        let (rx, ry) = Self::rotated(x, y, center);
        !self.is_occupied(rx, ry) && !self.is_occupied(rx - 1, ry)
    }

    /// Paint a single cell as a locked/falling block.
    pub fn paint_block(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = Self::index(x, y) {
            let cell = &mut self.cells[idx];
            cell.occupied = true;
            cell.color = color;
            cell.shadow = false;
        }
    }

    /// Paint a single cell as part of a landing shadow. Shadow cells count
    /// as occupied; movement stays correct because a piece always hides
    /// itself and its shadow before probing the board.
    pub fn paint_shadow(&mut self, x: i32, y: i32) {
        if let Some(idx) = Self::index(x, y) {
            let cell = &mut self.cells[idx];
            cell.occupied = true;
            cell.color = SHADOW_GRAY;
            cell.shadow = true;
        }
    }

    /// Clear a single cell back to empty.
    pub fn darken_block(&mut self, x: i32, y: i32) {
        if let Some(idx) = Self::index(x, y) {
            let cell = &mut self.cells[idx];
            cell.occupied = false;
            cell.color = Rgb::default();
            cell.shadow = false;
        }
    }

    fn row_full(&self, y: i32) -> bool {
        (0..BOARD_WIDTH).all(|x| self.is_occupied(x, y))
    }

    /// Drop every row above `y` down by one and refill the top row empty.
    fn remove_row(&mut self, y: i32) {
        let width = BOARD_WIDTH as usize;
        let start = (y as usize + 1) * width;
        self.cells.copy_within(start..BOARD_SIZE, y as usize * width);
        for cell in &mut self.cells[BOARD_SIZE - width..] {
            *cell = Cell::default();
        }
    }

    /// Remove every fully-occupied row in `[min, min+4)` (clamped to the
    /// visible rows - a single piece spans at most four rows), preserving
    /// the order of the remaining rows. Returns how many rows were removed.
    pub fn clear_row(&mut self, min: i32) -> u32 {
        let mut cleared = 0;
        let top = (min + 4).min(VISIBLE_ROWS);
        let mut y = min.max(0);
        while y < top {
            if self.row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// True once any cell in the first hidden buffer row holds a block.
    pub fn is_over(&self) -> bool {
        (0..BOARD_WIDTH).any(|x| self.is_occupied(x, BUFFER_ROW))
    }

    /// Reset every cell to empty (restart).
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Score a hypothetical placement - lower is better. The placement is
    /// read from the shadow cells currently painted on the board (the
    /// probe piece must be shown). Real occupancy and colors are untouched;
    /// the only mutation is the simulated-clear mark, which is undone
    /// before returning.
    ///
    /// The heuristic, per column:
    /// - rows completed by the placement are "simulated away" first and
    ///   worth -9 each, so they cannot contaminate the stack penalties;
    /// - each shadow cell pays an escalating per-block charge, with a +15
    ///   surcharge folded in above row 15 to punish tall stacks;
    /// - each empty cell beneath a shadow cell pays a flat 17 (holes are
    ///   the dominant penalty);
    /// - a 3-tall empty notch flanked by occupied columns pays 14, since
    ///   only an I piece fills it cleanly.
    pub fn get_score(&mut self, piece: &ActivePiece) -> i32 {
        let min = piece.shadow_min();
        let mut score = -9 * self.simulate_clear(min);
        for x in 0..BOARD_WIDTH {
            let mut num_blocks = 0;
            for y in 0..VISIBLE_ROWS {
                if self.is_shadow(x, y) && !self.is_simulated(x, y) {
                    num_blocks += 1;
                }
            }
            let mut y = 0;
            let mut block_score = 0;
            while num_blocks > 0 {
                if self.is_shadow(x, y) && !self.is_simulated(x, y) {
                    num_blocks -= 1;
                    if y > 15 {
                        block_score += 15;
                    }
                    score += block_score;
                    block_score += 1;
                } else if self.is_occupied(x, y) && !self.is_simulated(x, y) {
                    block_score += 1;
                } else if !self.is_simulated(x, y) {
                    score += 17;
                }
                y += 1;
            }
            // The guard reads the row where the walk above stopped, not a
            // fresh scan position. Tuned behavior; do not "fix" (see
            // DESIGN.md).
            if !self.is_simulated(x, y) {
                let mut towers = 0;
                for j in 0..16 {
                    if self.is_occupied(x, j) {
                        towers = 0;
                    } else if self.is_occupied(x - 1, j) && self.is_occupied(x + 1, j) {
                        towers += 1;
                        if towers == 3 {
                            score += 14;
                        }
                    }
                }
            }
        }
        self.un_simulate(min);
        score
    }

    /// Mark every row in `[min, min+4)` that the placement completes, so the
    /// scoring passes skip them. Returns the number of marked rows.
    fn simulate_clear(&mut self, min: i32) -> i32 {
        let mut lines = 0;
        for y in min.max(0)..(min + 4).min(VISIBLE_ROWS) {
            if self.row_full(y) {
                lines += 1;
                for x in 0..BOARD_WIDTH {
                    if let Some(idx) = Self::index(x, y) {
                        self.cells[idx].simulated = true;
                    }
                }
            }
        }
        lines
    }

    /// Undo `simulate_clear` over the same row range.
    fn un_simulate(&mut self, min: i32) {
        for y in min.max(0)..(min + 4).min(VISIBLE_ROWS) {
            for x in 0..BOARD_WIDTH {
                if let Some(idx) = Self::index(x, y) {
                    self.cells[idx].simulated = false;
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
