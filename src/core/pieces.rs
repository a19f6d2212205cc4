//! Piece shape table - immutable tetromino definitions
//!
//! Each piece is four cells: an implicit corner cell plus three companion
//! offsets measured from it. The rotation center is stored in half-cell
//! units from the corner cell, so centers can sit on cell boundaries
//! (the I and O pieces rotate about a corner between four cells).

use crate::types::{PieceKind, Rgb};

/// Immutable definition of one tetromino kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    /// Companion cell offsets from the corner cell.
    pub cells: [(i32, i32); 3],
    /// Display color.
    pub color: Rgb,
    /// Rotation center offset from the corner cell, in half-cell units.
    /// Both components always share parity, so the rotation formula stays
    /// in exact integers.
    pub center_half: (i32, i32),
    /// Relative value of keeping this piece in the hold slot; the AI charges
    /// `weight[stored] - weight[active]` when considering a swap.
    pub weight: i32,
}

const I: PieceDef = PieceDef {
    cells: [(-1, 0), (1, 0), (2, 0)],
    color: Rgb(0, 255, 255),
    center_half: (1, 1),
    weight: 6,
};

const O: PieceDef = PieceDef {
    cells: [(1, 0), (1, 1), (0, 1)],
    color: Rgb(255, 255, 0),
    center_half: (1, 1),
    weight: 0,
};

const J: PieceDef = PieceDef {
    cells: [(1, 0), (-1, 0), (-1, 1)],
    color: Rgb(0, 0, 255),
    center_half: (0, 0),
    weight: 2,
};

const L: PieceDef = PieceDef {
    cells: [(-1, 0), (1, 0), (1, 1)],
    color: Rgb(255, 155, 0),
    center_half: (0, 0),
    weight: 2,
};

const Z: PieceDef = PieceDef {
    cells: [(1, 0), (0, 1), (-1, 1)],
    color: Rgb(255, 0, 0),
    center_half: (0, 0),
    weight: 4,
};

const S: PieceDef = PieceDef {
    cells: [(-1, 0), (0, 1), (1, 1)],
    color: Rgb(0, 255, 0),
    center_half: (0, 0),
    weight: 3,
};

const T: PieceDef = PieceDef {
    cells: [(-1, 0), (0, 1), (1, 0)],
    color: Rgb(175, 0, 255),
    center_half: (0, 0),
    weight: 8,
};

/// Look up the definition for a piece kind.
pub fn def(kind: PieceKind) -> &'static PieceDef {
    match kind {
        PieceKind::I => &I,
        PieceKind::O => &O,
        PieceKind::J => &J,
        PieceKind::L => &L,
        PieceKind::Z => &Z,
        PieceKind::S => &S,
        PieceKind::T => &T,
    }
}
