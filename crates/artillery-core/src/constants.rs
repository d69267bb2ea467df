//! Game constants and tuning parameters.

/// Gravitational acceleration used for every shot (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Number of time samples taken along a shot's trajectory.
pub const TRAJECTORY_SAMPLES: usize = 10_000;

// --- Viewport ---

/// The board is drawn on a fixed square viewport, in world units.
pub const VIEWPORT_MIN: f64 = 0.0;
pub const VIEWPORT_MAX: f64 = 100.0;

// --- Default board layout: (left, right, bottom, top) ---

pub const TANK1_BOX: (f64, f64, f64, f64) = (10.0, 15.0, 0.0, 5.0);
pub const TANK2_BOX: (f64, f64, f64, f64) = (90.0, 95.0, 0.0, 5.0);
pub const OBSTACLE_BOX: (f64, f64, f64, f64) = (40.0, 60.0, 0.0, 50.0);

// --- Input ranges ---

/// Player 1 fires to the right.
pub const PLAYER1_ANGLE_RANGE: (f64, f64) = (0.0, 90.0);
/// Player 2 fires to the left.
pub const PLAYER2_ANGLE_RANGE: (f64, f64) = (90.0, 180.0);
/// Launch speed has no upper bound.
pub const VELOCITY_RANGE: (f64, f64) = (0.0, f64::INFINITY);
