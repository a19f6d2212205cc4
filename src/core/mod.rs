//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything the UI collaborator needs lives behind `Game`; the inner
//! components are public for direct embedding and for the benchmarks.

pub mod ai;
pub mod board;
pub mod game;
pub mod pieces;
pub mod queue;
pub mod rng;
pub mod shadow;
pub mod tetromino;

pub use ai::{Action, Searcher};
pub use board::{Board, Cell};
pub use game::Game;
pub use queue::PieceQueue;
pub use shadow::Shadow;
pub use tetromino::ActivePiece;
