//! Line-oriented console input.
//!
//! Generic over the reader and writer so the prompt loop can be exercised
//! with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use artillery_core::enums::{Player, ShotResolution};
use artillery_core::events::GameEvent;
use artillery_sim::input::{parse_in_range, AwaitProceed, NumberInput};
use artillery_sim::InputError;

pub const PROCEED_PROMPT: &str = "Press Enter to Continue ";

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// One line without its terminator. `Closed` at end of input.
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Print the console line for a game event, if it has one.
    pub fn announce(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::TurnStarted { player, .. } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "**********Player {} Turn**********", player.number())?;
            }
            GameEvent::ShotResolved { resolution, .. } => {
                let line = match resolution {
                    ShotResolution::ObstacleBlocked { .. } => "The shot hit the obstacle.",
                    ShotResolution::TargetHit { .. } => "Direct hit!",
                    ShotResolution::Clear => "Missed.",
                };
                writeln!(self.writer, "{line}")?;
            }
            GameEvent::AwaitingProceed { .. } => {}
            GameEvent::GameOver { winner, .. } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "**********PLAYER {} WINS!**********", winner.number())?;
            }
        }
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> NumberInput for ConsoleInput<R, W> {
    fn get_number(&mut self, prompt: &str, range: RangeInclusive<f64>) -> Result<f64, InputError> {
        loop {
            self.prompt(prompt)?;
            let line = self.read_line()?;
            match parse_in_range(&line, &range) {
                Ok(value) => return Ok(value),
                Err(InputError::NotANumber(_)) => {
                    writeln!(self.writer, "Please enter a number")?;
                }
                Err(InputError::OutOfRange { min, max, .. }) => {
                    writeln!(self.writer, "Please enter a value in the range [{min}, {max}]")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead, W: Write> AwaitProceed for ConsoleInput<R, W> {
    /// Only an empty line counts; anything else asks again.
    fn await_proceed(&mut self, _next: Player) -> Result<(), InputError> {
        loop {
            self.prompt(PROCEED_PROMPT)?;
            if self.read_line()?.is_empty() {
                return Ok(());
            }
        }
    }
}
