//! Error types for the engine and its collaborators.

use std::io;

use thiserror::Error;

use artillery_core::enums::GamePhase;

/// A shot was requested with parameters the sampler cannot integrate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShotError {
    #[error("gravity must be positive and finite, got {0}")]
    NonPositiveGravity(f64),
    #[error("launch speed must be non-negative, got {0}")]
    NegativeSpeed(f64),
    #[error("launch point is below ground: y = {0}")]
    BelowGround(f64),
    #[error("trajectory needs at least one sample")]
    NoSamples,
    #[error("shot parameters must be finite")]
    NonFinite,
}

/// Failures at the number-input boundary.
///
/// `NotANumber` and `OutOfRange` are recoverable and handled by re-prompting;
/// only `Closed` and `Io` ever leave an input collaborator.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("input stream closed")]
    Closed,
    #[error("input I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid shot: {0}")]
    Shot(#[from] ShotError),
    #[error("render failed: {0}")]
    Render(#[from] io::Error),
    #[error("{command} is not allowed during {phase:?}")]
    InvalidPhase {
        command: &'static str,
        phase: GamePhase,
    },
    #[error("{what} {value} is outside [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
