//! Projectile trajectory sampling.
//!
//! Closed-form parabolic flight, no drag and no sub-stepping. The path is
//! sampled at evenly spaced times from launch until the projectile returns
//! to y = 0.

use glam::DVec2;

use artillery_core::constants::{GRAVITY, TRAJECTORY_SAMPLES};
use artillery_core::types::{Point, Trajectory};

use crate::error::ShotError;

/// Launch parameters for one shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotParams {
    pub origin: Point,
    /// Launch speed, >= 0.
    pub speed: f64,
    /// Launch angle in degrees, counter-clockwise from +x.
    pub angle_deg: f64,
    /// Gravitational acceleration, > 0.
    pub gravity: f64,
    /// Number of samples, >= 1.
    pub samples: usize,
}

impl ShotParams {
    /// Parameters with standard gravity and the default sample count.
    pub fn new(origin: Point, speed: f64, angle_deg: f64) -> Self {
        Self {
            origin,
            speed,
            angle_deg,
            gravity: GRAVITY,
            samples: TRAJECTORY_SAMPLES,
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn validate(&self) -> Result<(), ShotError> {
        if !(self.origin.is_finite() && self.speed.is_finite() && self.angle_deg.is_finite()) {
            return Err(ShotError::NonFinite);
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ShotError::NonPositiveGravity(self.gravity));
        }
        if self.speed < 0.0 {
            return Err(ShotError::NegativeSpeed(self.speed));
        }
        if self.origin.y < 0.0 {
            return Err(ShotError::BelowGround(self.origin.y));
        }
        if self.samples == 0 {
            return Err(ShotError::NoSamples);
        }
        Ok(())
    }

    /// Initial velocity vector (vx, vy).
    pub fn velocity(&self) -> DVec2 {
        DVec2::from_angle(self.angle_deg.to_radians()) * self.speed
    }
}

/// Time until the projectile returns to y = 0.
///
/// Positive root of `0.5 g t² - vy t - y0 = 0`. The other root is never
/// positive when `y0 >= 0`. A launch from the ground aimed downward lands
/// immediately (`T = 0`). Speeds so large that the flight overflows `f64`
/// are rejected with [`ShotError::NonFinite`].
pub fn flight_time(params: &ShotParams) -> Result<f64, ShotError> {
    params.validate()?;
    let g = params.gravity;
    let vy_over_g = params.velocity().y / g;
    let discriminant = vy_over_g * vy_over_g + 2.0 * params.origin.y / g;
    let t = (vy_over_g + discriminant.sqrt()).max(0.0);
    if !t.is_finite() {
        return Err(ShotError::NonFinite);
    }
    Ok(t)
}

/// Position at time `t` after launch.
fn position_at(origin: Point, velocity: DVec2, gravity: f64, t: f64) -> Point {
    DVec2::new(
        origin.x + velocity.x * t,
        origin.y + velocity.y * t - 0.5 * gravity * t * t,
    )
}

/// Sample `params.samples` points evenly in time over `[0, T]`, both ends
/// included. Index 0 is exactly the origin; the last point is the ground
/// impact.
pub fn sample_trajectory(params: &ShotParams) -> Result<Trajectory, ShotError> {
    let t_final = flight_time(params)?;
    let velocity = params.velocity();
    let n = params.samples;

    let points: Vec<Point> = if n == 1 {
        vec![params.origin]
    } else {
        let last = (n - 1) as f64;
        std::iter::once(params.origin)
            .chain((1..n).map(|i| {
                let t = t_final * (i as f64 / last);
                position_at(params.origin, velocity, params.gravity, t)
            }))
            .collect()
    };

    // A finite flight time can still overflow x or y along the way.
    if !points.iter().all(|p| p.is_finite()) {
        return Err(ShotError::NonFinite);
    }

    Ok(Trajectory::new(points))
}
