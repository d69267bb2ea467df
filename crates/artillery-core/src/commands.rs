//! Commands a driver sends to the game engine.
//!
//! Commands are validated against the current game phase before they are applied.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Fire the current player's shot with already-chosen parameters.
    Fire { velocity: f64, angle: f64 },
    /// Leave the post-shot board and start the next player's turn.
    ProceedToNextTurn,
}
