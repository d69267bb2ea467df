//! Enumeration types used throughout the game.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER1_ANGLE_RANGE, PLAYER2_ANGLE_RANGE};

/// One of the two tanks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown to the players.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Launch angles (degrees) this player may choose. Each player can only
    /// fire toward the opponent.
    pub fn angle_range(self) -> RangeInclusive<f64> {
        let (min, max) = match self {
            Player::One => PLAYER1_ANGLE_RANGE,
            Player::Two => PLAYER2_ANGLE_RANGE,
        };
        min..=max
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Result of a shot from the game's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Miss,
    Hit,
}

/// How a shot was resolved. Distinguishes an obstacle block from a clean
/// miss; both collapse to [`ShotOutcome::Miss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotResolution {
    /// Entered the obstacle at sample `index`.
    ObstacleBlocked { index: usize },
    /// Entered the target at sample `index` without touching the obstacle.
    TargetHit { index: usize },
    /// Touched neither box.
    Clear,
}

impl ShotResolution {
    pub fn outcome(self) -> ShotOutcome {
        match self {
            ShotResolution::TargetHit { .. } => ShotOutcome::Hit,
            ShotResolution::ObstacleBlocked { .. } | ShotResolution::Clear => ShotOutcome::Miss,
        }
    }
}

/// Result of one player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    Miss,
    PlayerWins(Player),
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for this player to fire.
    Turn(Player),
    /// The last shot missed; the board stays up until the next turn is requested.
    AwaitingProceed { next: Player },
    /// A shot hit. Terminal.
    GameOver { winner: Player },
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Turn(Player::One)
    }
}

/// Fill colors understood by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Black,
    Green,
}
