//! Shadow module - the landing projection of a falling piece
//!
//! A shadow is four coordinates: where the owning piece would rest if
//! dropped with no further input. It is recomputed from scratch on every
//! successful move of its owner, while the owner is hidden so the piece
//! never blocks its own projection.

use crate::core::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    xs: [i32; 4],
    ys: [i32; 4],
}

impl Shadow {
    /// Project the given piece coordinates straight down until blocked.
    /// The descent probes in place, so it overshoots by one row and is
    /// corrected afterwards.
    pub fn project(xs: &[i32; 4], ys: &[i32; 4], board: &Board) -> Self {
        let mut shadow = Self { xs: *xs, ys: *ys };
        while shadow.step_down(board) {}
        for y in &mut shadow.ys {
            *y += 1;
        }
        shadow
    }

    fn step_down(&mut self, board: &Board) -> bool {
        let mut clear = true;
        for i in 0..4 {
            self.ys[i] -= 1;
            clear = clear && !board.is_occupied(self.xs[i], self.ys[i]);
        }
        clear
    }

    /// Paint the shadow's cells with the distinguished shadow color.
    pub fn show(&self, board: &mut Board) {
        for i in 0..4 {
            board.paint_shadow(self.xs[i], self.ys[i]);
        }
    }

    /// Clear the shadow's cells.
    pub fn hide(&self, board: &mut Board) {
        for i in 0..4 {
            board.darken_block(self.xs[i], self.ys[i]);
        }
    }

    /// Lowest row the shadow occupies; the scoring pass simulates line
    /// clears upward from here.
    pub fn min(&self) -> i32 {
        self.ys.iter().copied().min().unwrap_or(0)
    }

    pub fn cells(&self) -> [(i32, i32); 4] {
        [
            (self.xs[0], self.ys[0]),
            (self.xs[1], self.ys[1]),
            (self.xs[2], self.ys[2]),
            (self.xs[3], self.ys[3]),
        ]
    }
}
