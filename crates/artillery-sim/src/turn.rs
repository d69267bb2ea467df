//! One player's turn: draw the board, get shot parameters, fire, report.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{debug, warn};

use artillery_core::constants::VELOCITY_RANGE;
use artillery_core::enums::{Player, ShotOutcome, TurnResult};
use artillery_core::layout::BoardLayout;
use artillery_core::types::Point;

use crate::error::GameError;
use crate::input::{NumberInput, ANGLE_PROMPT, VELOCITY_PROMPT};
use crate::render::Renderer;
use crate::shot::{fire_shot, ShotReport};

/// Everything that happened in one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub player: Player,
    pub velocity: f64,
    pub angle: f64,
    pub origin: Point,
    pub shot: ShotReport,
    pub result: TurnResult,
}

pub fn velocity_range() -> RangeInclusive<f64> {
    VELOCITY_RANGE.0..=VELOCITY_RANGE.1
}

/// Prompted turn. Draws the pre-shot board, asks for velocity and the
/// player's allowed angle, then fires from the center of the player's tank.
/// A shot the sampler cannot fly (a speed that overflows) is asked for again.
pub fn play_turn<I, R>(
    layout: &BoardLayout,
    player: Player,
    gravity: f64,
    input: &mut I,
    renderer: &mut R,
) -> Result<TurnReport, GameError>
where
    I: NumberInput + ?Sized,
    R: Renderer + ?Sized,
{
    renderer.draw_board(layout, player)?;

    loop {
        let velocity = input.get_number(VELOCITY_PROMPT, velocity_range())?;
        let angle = input.get_number(ANGLE_PROMPT, player.angle_range())?;

        match shoot(layout, player, velocity, angle, gravity, &mut *renderer) {
            Err(GameError::Shot(e)) => warn!(%player, velocity, angle, "shot rejected: {e}"),
            other => return other,
        }
    }
}

/// Unprompted turn with parameters chosen elsewhere. Parameters outside the
/// player's ranges are rejected before anything is drawn.
pub fn fire_turn<R: Renderer + ?Sized>(
    layout: &BoardLayout,
    player: Player,
    velocity: f64,
    angle: f64,
    gravity: f64,
    renderer: &mut R,
) -> Result<TurnReport, GameError> {
    check_range("velocity", velocity, &velocity_range())?;
    check_range("angle", angle, &player.angle_range())?;

    renderer.draw_board(layout, player)?;
    shoot(layout, player, velocity, angle, gravity, renderer)
}

fn check_range(what: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<(), GameError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(GameError::OutOfRange {
            what,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn shoot<R: Renderer + ?Sized>(
    layout: &BoardLayout,
    player: Player,
    velocity: f64,
    angle: f64,
    gravity: f64,
    renderer: &mut R,
) -> Result<TurnReport, GameError> {
    let origin = layout.tank(player).center();
    let target = layout.target_of(player);

    let shot = fire_shot(
        renderer,
        &target,
        &layout.obstacle,
        origin,
        velocity,
        angle,
        gravity,
    )?;

    let result = match shot.outcome() {
        ShotOutcome::Hit => TurnResult::PlayerWins(player),
        ShotOutcome::Miss => TurnResult::Miss,
    };
    debug!(%player, velocity, angle, ?result, "turn finished");

    Ok(TurnReport {
        player,
        velocity,
        angle,
        origin,
        shot,
        result,
    })
}
