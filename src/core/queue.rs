//! Piece queue - double seven-bag randomizer
//!
//! Upcoming pieces are drawn from a shuffled permutation of all seven kinds,
//! with the following bag pre-shuffled so lookahead can cross the bag
//! boundary. Every run of seven consecutive draws is a permutation of all
//! seven kinds, which bounds the gap between repeats of any kind to twelve.

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, ALL_KINDS};

#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Bag currently being drawn from.
    pieces: [PieceKind; 7],
    /// Bag promoted to `pieces` when the current one is exhausted.
    next: [PieceKind; 7],
    /// Index of the next draw within `pieces`.
    cursor: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            pieces: ALL_KINDS,
            next: ALL_KINDS,
            cursor: 0,
            rng: SimpleRng::new(seed),
        };
        queue.shuffle();
        queue
    }

    /// Draw the next piece kind, promoting the pre-shuffled bag when the
    /// current one runs out.
    pub fn push(&mut self) -> PieceKind {
        if self.cursor == self.pieces.len() {
            self.pieces = self.next;
            self.rng.shuffle(&mut self.next);
            self.cursor = 0;
        }
        let kind = self.pieces[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Read-only lookahead: `peek(1)` is the next draw. Valid for
    /// `1..=7`, which is enough to cross one bag boundary.
    pub fn peek(&self, lookahead: usize) -> PieceKind {
        debug_assert!((1..=7).contains(&lookahead));
        let idx = self.cursor + lookahead - 1;
        if idx < self.pieces.len() {
            self.pieces[idx]
        } else {
            self.next[idx - self.pieces.len()]
        }
    }

    /// Reshuffle both bags and reset the cursor (restart only).
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.pieces);
        self.rng.shuffle(&mut self.next);
        self.cursor = 0;
    }
}
