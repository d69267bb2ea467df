//! The game state machine.
//!
//! `ArtilleryGame` owns the board and the current phase. Turns are played
//! either through the prompting collaborators ([`ArtilleryGame::play_turn`])
//! or by applying [`GameCommand`]s directly. After a miss the game waits in
//! [`GamePhase::AwaitingProceed`] until it is told to move on, so the
//! driver decides how the "next turn" signal is produced.

use tracing::info;

use artillery_core::commands::GameCommand;
use artillery_core::constants::GRAVITY;
use artillery_core::enums::{GamePhase, Player, TurnResult};
use artillery_core::events::GameEvent;
use artillery_core::layout::{BoardLayout, Palette};

use crate::error::GameError;
use crate::input::{AwaitProceed, NumberInput};
use crate::render::Renderer;
use crate::turn::{self, TurnReport};

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub layout: BoardLayout,
    /// Gravity passed to each shot. See [`crate::shot::resolve_shot`].
    pub gravity: f64,
    /// Colors for the renderer the driver builds.
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: BoardLayout::default(),
            gravity: GRAVITY,
            palette: Palette::default(),
        }
    }
}

pub struct ArtilleryGame {
    config: GameConfig,
    phase: GamePhase,
    /// 1-based number of the turn in progress (or the last one played).
    turn: u32,
    events: Vec<GameEvent>,
    last_turn: Option<TurnReport>,
}

impl ArtilleryGame {
    /// New game, player 1 to fire.
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self {
            config,
            phase: GamePhase::default(),
            turn: 1,
            events: Vec::new(),
            last_turn: None,
        };
        game.events.push(GameEvent::TurnStarted {
            player: Player::One,
            turn: 1,
        });
        game
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player who fires next, if a shot is expected.
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            GamePhase::Turn(player) => Some(player),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Report of the most recent shot.
    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }

    /// Take the events buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Play the current player's turn, prompting through `input`.
    pub fn play_turn<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<TurnResult, GameError>
    where
        I: NumberInput + ?Sized,
        R: Renderer + ?Sized,
    {
        let player = self.expect_turn("play_turn")?;
        let report = turn::play_turn(
            &self.config.layout,
            player,
            self.config.gravity,
            input,
            renderer,
        )?;
        Ok(self.finish_turn(report))
    }

    /// Apply a command. `Fire` returns the turn's result; `ProceedToNextTurn`
    /// returns `None`.
    pub fn apply<R: Renderer + ?Sized>(
        &mut self,
        command: GameCommand,
        renderer: &mut R,
    ) -> Result<Option<TurnResult>, GameError> {
        match command {
            GameCommand::Fire { velocity, angle } => {
                let player = self.expect_turn("Fire")?;
                let report = turn::fire_turn(
                    &self.config.layout,
                    player,
                    velocity,
                    angle,
                    self.config.gravity,
                    renderer,
                )?;
                Ok(Some(self.finish_turn(report)))
            }
            GameCommand::ProceedToNextTurn => {
                self.proceed(renderer)?;
                Ok(None)
            }
        }
    }

    /// Clear the board and hand the turn to the other player.
    pub fn proceed<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<Player, GameError> {
        let GamePhase::AwaitingProceed { next } = self.phase else {
            return Err(GameError::InvalidPhase {
                command: "ProceedToNextTurn",
                phase: self.phase,
            });
        };

        renderer.clear();
        self.turn += 1;
        self.phase = GamePhase::Turn(next);
        self.events.push(GameEvent::TurnStarted {
            player: next,
            turn: self.turn,
        });
        Ok(next)
    }

    fn expect_turn(&self, command: &'static str) -> Result<Player, GameError> {
        self.current_player().ok_or(GameError::InvalidPhase {
            command,
            phase: self.phase,
        })
    }

    fn finish_turn(&mut self, report: TurnReport) -> TurnResult {
        let result = report.result;
        self.events.push(GameEvent::ShotResolved {
            player: report.player,
            turn: self.turn,
            origin: report.origin,
            velocity: report.velocity,
            angle: report.angle,
            resolution: report.shot.resolution,
            impact: report.shot.impact(),
        });

        match result {
            TurnResult::Miss => {
                let next = report.player.other();
                self.phase = GamePhase::AwaitingProceed { next };
                self.events.push(GameEvent::AwaitingProceed { next });
            }
            TurnResult::PlayerWins(winner) => {
                info!(%winner, turns = self.turn, "game over");
                self.phase = GamePhase::GameOver { winner };
                self.events.push(GameEvent::GameOver {
                    winner,
                    turns: self.turn,
                });
            }
        }

        self.last_turn = Some(report);
        result
    }
}

/// Drive `game` until someone hits. There is no turn limit.
///
/// Buffered events are handed to `on_event`, together with the controls,
/// before each step, so a driver can announce turns through the same
/// console it prompts on.
pub fn run_game<C, R, F>(
    game: &mut ArtilleryGame,
    controls: &mut C,
    renderer: &mut R,
    mut on_event: F,
) -> Result<Player, GameError>
where
    C: NumberInput + AwaitProceed + ?Sized,
    R: Renderer + ?Sized,
    F: FnMut(&mut C, &GameEvent) -> Result<(), GameError>,
{
    loop {
        for event in game.drain_events() {
            on_event(&mut *controls, &event)?;
        }

        match game.phase() {
            GamePhase::Turn(_) => {
                game.play_turn(&mut *controls, &mut *renderer)?;
            }
            GamePhase::AwaitingProceed { next } => {
                controls.await_proceed(next)?;
                game.proceed(&mut *renderer)?;
            }
            GamePhase::GameOver { winner } => return Ok(winner),
        }
    }
}
