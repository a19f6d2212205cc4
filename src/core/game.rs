//! Game controller - routes commands and drives gravity and the auto-player
//!
//! One owning struct, no back-references: the UI collaborator feeds
//! `Command`s in and reads cell state, line count, queue previews, and
//! flags back out. Gravity and AI stepping are plain synchronous methods;
//! the collaborator schedules them on whatever cadence `drop_interval_ms`
//! suggests and never runs them concurrently.

use crate::core::ai::{Action, Searcher};
use crate::core::board::{Board, Cell};
use crate::core::queue::PieceQueue;
use crate::core::tetromino::ActivePiece;
use crate::types::{
    Command, Motion, PieceKind, AI_STEP_DIVISOR, DROP_RATE_BASE, DROP_RATE_NUMERATOR,
};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    queue: PieceQueue,
    piece: ActivePiece,
    searcher: Searcher,
    held: Option<PieceKind>,
    lines: u32,
    paused: bool,
    over: bool,
    auto_play: bool,
}

impl Game {
    /// Create a new game with the given RNG seed and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let board = Board::new();
        let mut queue = PieceQueue::new(seed);
        let piece = ActivePiece::new(queue.push(), &board);
        let mut game = Self {
            board,
            queue,
            piece,
            searcher: Searcher::new(),
            held: None,
            lines: 0,
            paused: false,
            over: false,
            auto_play: false,
        };
        game.piece.show(&mut game.board);
        game
    }

    // Reads for the UI collaborator.

    /// Cell state (occupied, color, shadow flag) for rendering. Only the
    /// 20 visible rows are meaningful; the buffer rows read back too but a
    /// renderer has no business drawing them.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.board.cell(x, y)
    }

    /// Cumulative cleared-line count.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Held piece kind, if any.
    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    /// Upcoming piece preview; `peek(1)` is the next spawn.
    pub fn peek(&self, lookahead: usize) -> PieceKind {
        self.queue.peek(lookahead)
    }

    pub fn active_kind(&self) -> PieceKind {
        self.piece.kind()
    }

    /// Suggested gravity period. The collaborator re-reads this after any
    /// lock and may swap its timers between events; the AI step period is
    /// `drop_interval_ms / 20`.
    pub fn drop_interval_ms(&self) -> u32 {
        DROP_RATE_NUMERATOR / (self.lines + DROP_RATE_BASE)
    }

    pub fn ai_interval_ms(&self) -> u32 {
        (self.drop_interval_ms() / AI_STEP_DIVISOR).max(1)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply one discrete command. Movement commands report whether the
    /// motion succeeded; toggles report whether they took effect.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_motion(Motion::Left),
            Command::MoveRight => self.try_motion(Motion::Right),
            Command::Rotate => self.try_motion(Motion::Rotate),
            Command::SoftDrop => {
                if self.paused {
                    return false;
                }
                let moved = self.piece.move_piece(&mut self.board, Motion::Down);
                if !moved {
                    // The caller's failed soft drop is the lock trigger.
                    self.lock();
                }
                moved
            }
            Command::HardDrop => {
                if self.paused {
                    return false;
                }
                while self.piece.move_piece(&mut self.board, Motion::Down) {}
                self.lock();
                true
            }
            Command::SwapHeld => {
                if self.paused {
                    return false;
                }
                self.swap_held();
                true
            }
            Command::TogglePause => {
                if self.over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            Command::ToggleAutoPlay => {
                self.auto_play = !self.auto_play;
                if self.auto_play {
                    self.replan();
                } else {
                    // Discard any partially-consumed plan; each action is
                    // atomic so there is nothing to roll back.
                    self.searcher.clear();
                }
                true
            }
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    /// One gravity tick: move the piece down, locking it when it cannot.
    pub fn step_gravity(&mut self) {
        if self.paused {
            return;
        }
        if !self.piece.move_piece(&mut self.board, Motion::Down) {
            self.lock();
        }
    }

    /// One auto-player tick: consume the next planned action. When the
    /// plan is spent, hard-drop and lock; the lock replans for the next
    /// piece.
    pub fn step_ai(&mut self) {
        if !self.auto_play || self.paused {
            return;
        }
        match self.searcher.poll() {
            Some(Action::Swap) => self.swap_held(),
            Some(Action::Move(motion)) => {
                self.piece.move_piece(&mut self.board, motion);
            }
            None => {
                while self.piece.move_piece(&mut self.board, Motion::Down) {}
                self.lock();
            }
        }
    }

    fn try_motion(&mut self, motion: Motion) -> bool {
        if self.paused {
            return false;
        }
        self.piece.move_piece(&mut self.board, motion)
    }

    /// The piece can no longer fall: clear completed rows, check for game
    /// over, and otherwise spawn the next piece (replanning when the
    /// auto-player is on).
    fn lock(&mut self) {
        let min = self.piece.min();
        self.lines += self.board.clear_row(min);
        if self.board.is_over() {
            self.paused = true;
            self.over = true;
            return;
        }
        self.spawn_next();
        if self.auto_play {
            self.replan();
        }
    }

    /// Recompute the searcher's plan for the current piece. A swap with an
    /// empty hold slot spawns from the queue, so that is the kind the swap
    /// branch evaluates.
    fn replan(&mut self) {
        let candidate = self.held.unwrap_or_else(|| self.queue.peek(1));
        self.searcher
            .new_move(&mut self.board, &mut self.piece, candidate);
    }

    fn spawn_next(&mut self) {
        self.piece = ActivePiece::new(self.queue.push(), &self.board);
        self.piece.show(&mut self.board);
    }

    /// Bank the active piece. An empty hold slot stores the active kind
    /// and spawns from the queue; otherwise the active and held kinds
    /// exchange. There is no once-per-piece cooldown.
    fn swap_held(&mut self) {
        self.piece.hide(&mut self.board);
        let current = self.piece.kind();
        match self.held.replace(current) {
            Some(stored) => {
                self.piece = ActivePiece::new(stored, &self.board);
                self.piece.show(&mut self.board);
            }
            None => self.spawn_next(),
        }
    }

    /// Reset for a fresh game: reshuffled queue, cleared board and hold
    /// slot, zero lines. The plan is recomputed so a running auto-player
    /// resumes seamlessly.
    fn restart(&mut self) {
        self.queue.shuffle();
        self.board.clear();
        self.lines = 0;
        self.held = None;
        self.paused = false;
        self.over = false;
        self.spawn_next();
        self.replan();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_playable() {
        let game = Game::new(1);
        assert!(!game.game_over());
        assert!(!game.paused());
        assert!(!game.auto_play());
        assert_eq!(game.lines(), 0);
        assert!(game.held().is_none());
        assert_eq!(game.drop_interval_ms(), 800);
    }

    #[test]
    fn hard_drop_locks_and_spawns_the_next_piece() {
        let mut game = Game::new(1);
        let next = game.peek(1);
        assert!(game.apply(Command::HardDrop));
        assert_eq!(game.active_kind(), next);
        assert!(!game.game_over());
    }

    #[test]
    fn empty_hold_banks_and_spawns_from_queue() {
        let mut game = Game::new(1);
        let current = game.active_kind();
        let next = game.peek(1);
        assert!(game.apply(Command::SwapHeld));
        assert_eq!(game.held(), Some(current));
        assert_eq!(game.active_kind(), next);

        // A second swap exchanges rather than drawing from the queue.
        let upcoming = game.peek(1);
        assert!(game.apply(Command::SwapHeld));
        assert_eq!(game.held(), Some(next));
        assert_eq!(game.active_kind(), current);
        assert_eq!(game.peek(1), upcoming);
    }

    #[test]
    fn pause_blocks_movement_and_gravity() {
        let mut game = Game::new(1);
        assert!(game.apply(Command::TogglePause));
        assert!(game.paused());
        assert!(!game.apply(Command::MoveLeft));
        assert!(!game.apply(Command::SoftDrop));

        let snapshot = |game: &Game| -> Vec<Cell> {
            (0..22)
                .flat_map(|y| (0..10).map(move |x| (x, y)))
                .map(|(x, y)| game.cell(x, y))
                .collect()
        };
        let before = snapshot(&game);
        game.step_gravity();
        assert_eq!(snapshot(&game), before);

        assert!(game.apply(Command::TogglePause));
        assert!(!game.paused());
    }

    #[test]
    fn restart_resets_everything() {
        let mut game = Game::new(1);
        game.apply(Command::SwapHeld);
        for _ in 0..5 {
            game.apply(Command::HardDrop);
        }
        assert!(game.apply(Command::Restart));
        assert_eq!(game.lines(), 0);
        assert!(game.held().is_none());
        assert!(!game.game_over());
        assert!(!game.paused());
        // Board holds only the fresh spawn and its shadow.
        let occupied: usize = (0..20)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| game.cell(x, y).occupied)
            .count();
        assert!(occupied <= 4, "visible rows should only hold the shadow");
    }

    #[test]
    fn game_over_pauses_and_sticks() {
        let mut game = Game::new(1);
        // Choke the spawn area: one column filled to the buffer row means
        // the next lock in that column tops out quickly. Simpler: drive
        // hard drops until the game reports over.
        let mut drops = 0;
        while !game.game_over() && drops < 500 {
            game.apply(Command::HardDrop);
            drops += 1;
        }
        assert!(game.game_over(), "stacking without clears must top out");
        assert!(game.paused());
        assert!(!game.apply(Command::TogglePause));
    }

    #[test]
    fn auto_play_consumes_a_plan_then_locks() {
        let mut game = Game::new(7);
        assert!(game.apply(Command::ToggleAutoPlay));
        // A plan is at most ~24 actions plus the terminal hard drop, so
        // 200 steps lock several pieces. The active piece never leaves the
        // top rows under AI stepping alone, so anything occupied low down
        // is locked material (unless it already cleared).
        for _ in 0..200 {
            game.step_ai();
        }
        let locked = (0..18)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let cell = game.cell(x, y);
                cell.occupied && !cell.shadow
            })
            .count();
        assert!(
            locked >= 4 || game.lines() > 0,
            "auto-play locked nothing in 200 steps"
        );
    }

    #[test]
    fn toggling_auto_play_off_discards_the_plan() {
        let mut game = Game::new(3);
        game.apply(Command::ToggleAutoPlay);
        game.step_ai();
        game.apply(Command::ToggleAutoPlay);
        assert!(!game.auto_play());
        // Next enable replans from scratch for the current piece.
        game.apply(Command::ToggleAutoPlay);
        assert!(game.auto_play());
    }

    #[test]
    fn drop_interval_speeds_up_with_lines() {
        let mut game = Game::new(1);
        assert_eq!(game.drop_interval_ms(), 800);
        game.lines = 5;
        assert_eq!(game.drop_interval_ms(), 600);
        assert_eq!(game.ai_interval_ms(), 30);
    }
}
