//! Board layout and render palette. Both are fixed for a game session.

use serde::{Deserialize, Serialize};

use crate::constants::{OBSTACLE_BOX, TANK1_BOX, TANK2_BOX};
use crate::enums::{Color, Player};
use crate::types::Rect;

/// Positions of the two tanks and the central obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub tank1: Rect,
    pub tank2: Rect,
    pub obstacle: Rect,
}

impl BoardLayout {
    /// The tank this player fires from.
    pub fn tank(&self, player: Player) -> Rect {
        match player {
            Player::One => self.tank1,
            Player::Two => self.tank2,
        }
    }

    /// The tank this player is aiming at.
    pub fn target_of(&self, player: Player) -> Rect {
        self.tank(player.other())
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            tank1: Rect::from_extents_unchecked(TANK1_BOX),
            tank2: Rect::from_extents_unchecked(TANK2_BOX),
            obstacle: Rect::from_extents_unchecked(OBSTACLE_BOX),
        }
    }
}

/// Colors handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub tank1: Color,
    pub tank2: Color,
    pub obstacle: Color,
    pub path: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tank1: Color::Blue,
            tank2: Color::Red,
            obstacle: Color::Black,
            path: Color::Green,
        }
    }
}
