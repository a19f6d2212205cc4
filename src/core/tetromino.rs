//! Active piece - the falling tetromino's movement and rotation state
//! machine
//!
//! A piece is four absolute cell coordinates plus a rotation center held in
//! half-cell units. Translation moves the center with the cells; rotation
//! never moves the center. The piece paints itself (and its shadow) onto
//! the board and hides both before probing any candidate position, so it
//! never collides with itself.

use crate::core::board::Board;
use crate::core::pieces::{def, PieceDef};
use crate::core::shadow::Shadow;
use crate::types::{Motion, PieceKind, Rgb, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone)]
pub struct ActivePiece {
    kind: PieceKind,
    xs: [i32; 4],
    ys: [i32; 4],
    /// Rotation center in half-cell units.
    center: (i32, i32),
    shadow: Shadow,
}

impl ActivePiece {
    /// Construct a piece at the spawn position (corner cell in the hidden
    /// buffer) with its shadow projected. Nothing is painted yet; the
    /// caller shows the piece once it owns it.
    pub fn new(kind: PieceKind, board: &Board) -> Self {
        let d: &PieceDef = def(kind);
        let mut xs = [SPAWN_X; 4];
        let mut ys = [SPAWN_Y; 4];
        for i in 0..3 {
            xs[i] = SPAWN_X + d.cells[i].0;
            ys[i] = SPAWN_Y + d.cells[i].1;
        }
        let center = (2 * SPAWN_X + d.center_half.0, 2 * SPAWN_Y + d.center_half.1);
        let shadow = Shadow::project(&xs, &ys, board);
        Self {
            kind,
            xs,
            ys,
            center,
            shadow,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        def(self.kind).color
    }

    /// Lowest row among the piece's cells; bounds the line-clear scan after
    /// a lock.
    pub fn min(&self) -> i32 {
        self.ys.iter().copied().min().unwrap_or(0)
    }

    /// Lowest row of the landing projection.
    pub fn shadow_min(&self) -> i32 {
        self.shadow.min()
    }

    pub fn cells(&self) -> [(i32, i32); 4] {
        [
            (self.xs[0], self.ys[0]),
            (self.xs[1], self.ys[1]),
            (self.xs[2], self.ys[2]),
            (self.xs[3], self.ys[3]),
        ]
    }

    pub fn shadow_cells(&self) -> [(i32, i32); 4] {
        self.shadow.cells()
    }

    /// Attempt one motion. Returns whether the piece ended up moving -
    /// for a `Rotate` this includes success through a single wall kick.
    ///
    /// The piece hides itself before probing and re-shows afterwards no
    /// matter the outcome, so the board is never left with the piece
    /// unpainted.
    pub fn move_piece(&mut self, board: &mut Board, motion: Motion) -> bool {
        self.hide(board);

        let mut fx = [0i32; 4];
        let mut fy = [0i32; 4];
        let (dx, dy) = motion.delta();
        if motion.is_rotation() {
            // Quarter turn about the stored center:
            //   x' = cx - cy + y,  y' = cy + cx - x
            // (half-unit center components share parity, division exact).
            let (cx, cy) = self.center;
            for i in 0..4 {
                fx[i] = (cx - cy) / 2 + self.ys[i];
                fy[i] = (cx + cy) / 2 - self.xs[i];
            }
        } else {
            for i in 0..4 {
                fx[i] = self.xs[i] + dx;
                fy[i] = self.ys[i] + dy;
            }
        }

        let mut valid = true;
        let mut left_kick = true;
        let mut right_kick = true;
        for i in 0..4 {
            valid = valid && !board.is_occupied(fx[i], fy[i]);
            left_kick = left_kick && board.left_kick(fx[i], fy[i], self.center);
            right_kick = right_kick && board.right_kick(fx[i], fy[i], self.center);
        }

        let mut moved = valid;
        if valid {
            self.xs = fx;
            self.ys = fy;
            // Rotation deltas are zero: the center is fixed under rotation.
            self.center.0 += 2 * dx;
            self.center.1 += 2 * dy;
            self.shadow = Shadow::project(&self.xs, &self.ys, board);
        } else if motion == Motion::Rotate && left_kick {
            // Blocked at the left wall: shift right once, then retry with
            // the kick-free variant so recovery cannot cascade.
            self.move_piece(board, Motion::Right);
            moved = self.move_piece(board, Motion::RotateNoKick);
        } else if motion == Motion::Rotate && right_kick {
            self.move_piece(board, Motion::Left);
            moved = self.move_piece(board, Motion::RotateNoKick);
        }

        self.show(board);
        moved
    }

    /// Clear the piece and its shadow from the board.
    pub fn hide(&self, board: &mut Board) {
        self.shadow.hide(board);
        for i in 0..4 {
            board.darken_block(self.xs[i], self.ys[i]);
        }
    }

    /// Paint the shadow, then the piece on top (they coincide when the
    /// piece is grounded - the piece color wins).
    pub fn show(&self, board: &mut Board) {
        self.shadow.show(board);
        let color = self.color();
        for i in 0..4 {
            board.paint_block(self.xs[i], self.ys[i], color);
        }
    }
}
