//! AI searcher - brute-force placement search for the auto-player
//!
//! For the active piece, and separately for the piece a hold-swap would
//! produce, the searcher walks a disposable probe through all 4 rotations x
//! 10 column offsets (flush left, then shift right, so only reachable
//! columns are tried) and asks the board to score each landing shadow.
//! The best-scoring candidate becomes an ordered action list the game
//! consumes one step at a time. At most 80 placements are simulated per
//! decision, each a handful of board scans.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::pieces::def;
use crate::core::tetromino::ActivePiece;
use crate::types::{Motion, PieceKind};

/// One step of a planned placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exchange the active piece with the hold slot.
    Swap,
    /// Drive the active piece one step; rotations are the kick-free
    /// variant so the replay cannot drift.
    Move(Motion),
}

/// Worst case plan: swap + 2 down + 3 rotations + 9 left + 9 right.
const PLAN_CAP: usize = 24;

#[derive(Debug, Clone, Default)]
pub struct Searcher {
    plan: ArrayVec<Action, PLAN_CAP>,
    cursor: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the plan for a freshly spawned piece. The active piece is
    /// hidden for the duration so probes never collide with it; the board
    /// is restored to its exact prior state before returning.
    ///
    /// `swap_candidate` is the kind a swap would put in play: the held
    /// piece, or the next queue piece when the hold slot is empty.
    pub fn new_move(
        &mut self,
        board: &mut Board,
        active: &mut ActivePiece,
        swap_candidate: PieceKind,
    ) {
        active.hide(board);
        self.plan.clear();
        self.cursor = 0;

        let mut best = i32::MAX;

        // Keeping the active piece.
        for rotations in 0..4 {
            for shifts in 0..10 {
                if let Some(score) =
                    Self::probe(board, active.kind(), rotations, shifts, &mut self.plan, best, false)
                {
                    best = score;
                }
            }
        }

        // Swapping with the hold slot. The adjustment prices the relative
        // value of the piece left in store: a raw-score win is not enough
        // if it banks a worse piece.
        let adjust = def(swap_candidate).weight - def(active.kind()).weight;
        for rotations in 0..4 {
            for shifts in 0..10 {
                if let Some(score) = Self::probe_adjusted(
                    board,
                    swap_candidate,
                    rotations,
                    shifts,
                    &mut self.plan,
                    best,
                    adjust,
                ) {
                    best = score;
                }
            }
        }

        active.show(board);
    }

    /// Walk one probe placement and, if it strictly beats `best`, rewrite
    /// `plan` for it and return its score. Ties keep the earlier candidate,
    /// so no-swap and lower rotation/column indices win ties by
    /// enumeration order.
    fn probe(
        board: &mut Board,
        kind: PieceKind,
        rotations: usize,
        shifts: usize,
        plan: &mut ArrayVec<Action, PLAN_CAP>,
        best: i32,
        swap: bool,
    ) -> Option<i32> {
        let mut ghost = ActivePiece::new(kind, board);
        // One row down first so the ceiling cannot block the rotations.
        ghost.move_piece(board, Motion::Down);
        for _ in 0..rotations {
            ghost.move_piece(board, Motion::RotateNoKick);
        }
        let mut flushed = 0;
        while ghost.move_piece(board, Motion::Left) {
            flushed += 1;
        }
        for _ in 0..shifts {
            ghost.move_piece(board, Motion::Right);
        }

        let score = board.get_score(&ghost);
        ghost.hide(board);

        if score >= best {
            return None;
        }

        plan.clear();
        if swap {
            plan.push(Action::Swap);
        }
        plan.push(Action::Move(Motion::Down));
        plan.push(Action::Move(Motion::Down));
        for _ in 0..rotations {
            plan.push(Action::Move(Motion::RotateNoKick));
        }
        for _ in 0..flushed {
            plan.push(Action::Move(Motion::Left));
        }
        for _ in 0..shifts {
            plan.push(Action::Move(Motion::Right));
        }
        Some(score)
    }

    fn probe_adjusted(
        board: &mut Board,
        kind: PieceKind,
        rotations: usize,
        shifts: usize,
        plan: &mut ArrayVec<Action, PLAN_CAP>,
        best: i32,
        adjust: i32,
    ) -> Option<i32> {
        Self::probe(board, kind, rotations, shifts, plan, best.saturating_sub(adjust), true)
            .map(|score| score + adjust)
    }

    /// Consume the next planned action. `None` means the plan is spent and
    /// the piece should be hard-dropped and locked immediately.
    pub fn poll(&mut self) -> Option<Action> {
        let action = self.plan.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(action)
    }

    /// Discard any partially-consumed plan (auto-play toggled off).
    pub fn clear(&mut self) {
        self.plan.clear();
        self.cursor = 0;
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.plan.len() - self.cursor
    }
}
