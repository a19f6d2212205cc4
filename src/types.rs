//! Core types shared across the crate
//! This module contains pure data types and constants with no dependencies

/// Board dimensions. The top two rows are a hidden buffer used only for
/// spawning and game-over detection.
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 22;
pub const VISIBLE_ROWS: i32 = 20;

/// First hidden row; any occupied cell here ends the game.
pub const BUFFER_ROW: i32 = 20;

/// Spawn location of the corner cell of a new piece (y = 0 is the floor).
pub const SPAWN_X: i32 = 4;
pub const SPAWN_Y: i32 = 20;

/// Gravity period is `12000 / (lines + 15)` milliseconds; the AI step period
/// is one twentieth of it.
pub const DROP_RATE_NUMERATOR: u32 = 12000;
pub const DROP_RATE_BASE: u32 = 15;
pub const AI_STEP_DIVISOR: u32 = 20;

/// Display color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color used for shadow (landing projection) cells; distinct from every
/// piece color.
pub const SHADOW_GRAY: Rgb = Rgb(128, 128, 128);

/// Tetromino piece kinds, in queue-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    Z,
    S,
    T,
}

/// All kinds in index order; one bag of the randomizer.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::J,
    PieceKind::L,
    PieceKind::Z,
    PieceKind::S,
    PieceKind::T,
];

impl PieceKind {
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::Z => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
        }
    }
}

/// Discrete motions of the active piece.
///
/// `Rotate` may recover from a blocked rotation with a single wall kick;
/// `RotateNoKick` is the same geometry but never kicks. The AI plans with
/// `RotateNoKick` so a replayed plan cannot drift sideways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Down,
    Rotate,
    RotateNoKick,
}

impl Motion {
    /// Translation delta; rotations keep the center fixed.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Motion::Left => (-1, 0),
            Motion::Right => (1, 0),
            Motion::Down => (0, -1),
            Motion::Rotate | Motion::RotateNoKick => (0, 0),
        }
    }

    pub fn is_rotation(self) -> bool {
        matches!(self, Motion::Rotate | Motion::RotateNoKick)
    }
}

/// Commands fed to the game by the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    SwapHeld,
    TogglePause,
    ToggleAutoPlay,
    Restart,
}
