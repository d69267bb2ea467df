//! Terminal front end for the artillery game.
//!
//! Wires stdin/stdout to the engine: [`console::ConsoleInput`] prompts for
//! shots and the next-turn signal, [`ascii::AsciiRenderer`] draws the board.

pub mod ascii;
pub mod console;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, info, warn};

use artillery_core::enums::Player;
use artillery_sim::{run_game, ArtilleryGame, GameConfig, GameError, InputError};

use crate::ascii::AsciiRenderer;
use crate::console::ConsoleInput;

/// Play one game on the process's terminal.
///
/// Returns the winner, or `None` if the players went away first.
pub fn run(config: GameConfig) -> Result<Option<Player>, GameError> {
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let renderer = AsciiRenderer::new(stdout, config.palette).with_color(color);
    let console = ConsoleInput::new(io::stdin().lock(), io::stdout());
    play(config, console, renderer)
}

/// Play one game through the given console and renderer.
///
/// Running out of input, or the output pipe closing, ends the game without
/// a winner rather than with an error.
pub fn play<R, W, S>(
    config: GameConfig,
    mut console: ConsoleInput<R, W>,
    mut renderer: AsciiRenderer<S>,
) -> Result<Option<Player>, GameError>
where
    R: BufRead,
    W: Write,
    S: Write,
{
    let mut game = ArtilleryGame::new(config);

    let outcome = run_game(&mut game, &mut console, &mut renderer, |console, event| {
        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string(event) {
                Ok(json) => debug!(event = %json, "game event"),
                Err(e) => warn!("could not encode event: {e}"),
            }
        }
        console.announce(event)?;
        Ok(())
    });

    match outcome {
        Ok(winner) => {
            info!(%winner, turns = game.turn(), "finished");
            Ok(Some(winner))
        }
        Err(GameError::Input(InputError::Closed)) => {
            warn!(turn = game.turn(), "input closed before the game ended");
            Ok(None)
        }
        Err(GameError::Render(e) | GameError::Input(InputError::Io(e)))
            if e.kind() == io::ErrorKind::BrokenPipe =>
        {
            warn!(turn = game.turn(), "output closed before the game ended");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use artillery_core::layout::Palette;

    /// Accepts nothing; every write reports a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    /// Accepts nothing; every write fails for a reason other than a closed pipe.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn console(script: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn finished_game_reports_the_winner() {
        let renderer = AsciiRenderer::new(Vec::new(), Palette::default());
        let winner = play(GameConfig::default(), console("39.6\n75\n"), renderer).unwrap();
        assert_eq!(winner, Some(Player::One));
    }

    #[test]
    fn closed_input_ends_without_a_winner() {
        let renderer = AsciiRenderer::new(Vec::new(), Palette::default());
        let winner = play(GameConfig::default(), console("10\n"), renderer).unwrap();
        assert_eq!(winner, None);
    }

    #[test]
    fn closed_screen_ends_without_a_winner() {
        let renderer = AsciiRenderer::new(ClosedPipe, Palette::default());
        let winner = play(GameConfig::default(), console("39.6\n75\n"), renderer).unwrap();
        assert_eq!(winner, None);
    }

    #[test]
    fn other_output_failures_are_errors() {
        let renderer = AsciiRenderer::new(FullDisk, Palette::default());
        let err = play(GameConfig::default(), console("39.6\n75\n"), renderer).unwrap_err();
        assert!(matches!(err, GameError::Render(_)));
    }
}
