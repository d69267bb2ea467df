//! Input collaborators.
//!
//! The engine asks for numbers through [`NumberInput`] and for the go-ahead
//! between turns through [`AwaitProceed`]. Implementations own the re-prompt
//! loop; malformed or out-of-range text never reaches game logic.

use std::ops::RangeInclusive;

use artillery_core::enums::Player;

use crate::error::InputError;

pub const VELOCITY_PROMPT: &str = "Velocity of shot: ";
pub const ANGLE_PROMPT: &str = "Angle: ";

pub trait NumberInput {
    /// Ask until a number inside `range` (both ends included) is given.
    ///
    /// Only returns an error when no more input can arrive.
    fn get_number(&mut self, prompt: &str, range: RangeInclusive<f64>) -> Result<f64, InputError>;
}

pub trait AwaitProceed {
    /// Block until the players ask for `next`'s turn.
    fn await_proceed(&mut self, next: Player) -> Result<(), InputError>;
}

/// Parse one line of user input and check it against `range`.
///
/// Accepts `v` iff `min <= v <= max`. Non-finite values ("inf", "NaN") are
/// treated as non-numeric so they can never reach the sampler.
pub fn parse_in_range(text: &str, range: &RangeInclusive<f64>) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if !range.contains(&value) {
        return Err(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_bounds() {
        assert_eq!(parse_in_range("0", &(0.0..=90.0)).unwrap(), 0.0);
        assert_eq!(parse_in_range(" 90 \n", &(0.0..=90.0)).unwrap(), 90.0);
        assert_eq!(parse_in_range("45.5", &(0.0..=90.0)).unwrap(), 45.5);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = parse_in_range("120", &Player::One.angle_range()).unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRange {
                value,
                min,
                max
            } if value == 120.0 && min == 0.0 && max == 90.0
        ));
        assert!(parse_in_range("-0.5", &(0.0..=f64::INFINITY)).is_err());
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(
            parse_in_range("fast", &(0.0..=90.0)),
            Err(InputError::NotANumber(s)) if s == "fast"
        ));
        assert!(matches!(
            parse_in_range("", &(0.0..=90.0)),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_in_range("inf", &(0.0..=f64::INFINITY)),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_in_range("NaN", &(0.0..=90.0)),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn unbounded_velocity_range() {
        assert_eq!(
            parse_in_range("1e6", &(0.0..=f64::INFINITY)).unwrap(),
            1_000_000.0
        );
    }
}
