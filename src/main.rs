//! Headless auto-play runner (default binary).
//!
//! Seeds a game, switches on the auto-player, and pumps the gravity and AI
//! steps in their documented 20:1 cadence until the game tops out or a
//! piece budget runs dry. Useful as a smoke test of the whole core and for
//! eyeballing how the heuristic performs on a given seed.

use anyhow::{Context, Result};

use tetris_sim::core::Game;
use tetris_sim::types::{Command, AI_STEP_DIVISOR};

/// Stop eventually even if the heuristic keeps the board alive forever.
const MAX_TICKS: u64 = 2_000_000;

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?,
        None => 1,
    };

    let mut game = Game::new(seed);
    game.apply(Command::ToggleAutoPlay);

    let mut ticks: u64 = 0;
    while !game.game_over() && ticks < MAX_TICKS {
        for _ in 0..AI_STEP_DIVISOR {
            game.step_ai();
        }
        game.step_gravity();
        ticks += 1;
    }

    println!(
        "seed {}: {} lines cleared in {} gravity ticks ({})",
        seed,
        game.lines(),
        ticks,
        if game.game_over() {
            "topped out"
        } else {
            "tick budget reached"
        }
    );
    Ok(())
}
