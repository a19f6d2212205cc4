//! Falling-block puzzle simulation core.
//!
//! The crate owns the occupancy grid, the active piece's movement and
//! rotation rules (including wall kicks), line clearing, a double
//! seven-bag piece randomizer, and a brute-force heuristic searcher that
//! an automated player uses to pick placements. Rendering, windowing, and
//! input devices are deliberately absent: a UI collaborator feeds
//! [`types::Command`]s into [`core::Game`] and reads cell/score/preview
//! state back out.

pub mod core;
pub mod types;
