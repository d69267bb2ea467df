//! Headless game engine for ARTILLERY.
//!
//! Samples shot trajectories, intersects them with the board's boxes,
//! resolves turns, and runs the two-player state machine. Input and
//! rendering are reached only through the [`input`] and [`render`] traits,
//! so every rule here can be tested without a terminal.

pub mod error;
pub mod game;
pub mod input;
pub mod intersect;
pub mod render;
pub mod shot;
pub mod trajectory;
pub mod turn;

pub use error::{GameError, InputError, ShotError};
pub use game::{run_game, ArtilleryGame, GameConfig};
