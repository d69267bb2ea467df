//! Events emitted by the engine for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Player, ShotResolution};
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A player's turn began.
    TurnStarted { player: Player, turn: u32 },
    /// A shot was fired and classified.
    ShotResolved {
        player: Player,
        turn: u32,
        origin: Point,
        velocity: f64,
        angle: f64,
        resolution: ShotResolution,
        /// Last drawn point of the shot, if any was drawn.
        impact: Option<Point>,
    },
    /// The shot missed; waiting for the go-ahead for `next`.
    AwaitingProceed { next: Player },
    /// A shot hit. No further events follow.
    GameOver { winner: Player, turns: u32 },
}
