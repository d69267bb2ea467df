//! Shot resolution: miss, blocked by the obstacle, or hit.
//!
//! Resolution is a two-step decision. Step one looks only at the obstacle;
//! if the path ever enters it the shot is blocked, whatever happens after.
//! Step two runs only for unblocked shots and looks at the target.

use serde::Serialize;
use tracing::debug;

use artillery_core::constants::{GRAVITY, TRAJECTORY_SAMPLES};
use artillery_core::enums::{ShotOutcome, ShotResolution};
use artillery_core::types::{Point, Rect, Trajectory};

use crate::error::{GameError, ShotError};
use crate::intersect::{first_in_box, truncate_at_intersection};
use crate::render::Renderer;
use crate::trajectory::{sample_trajectory, ShotParams};

/// A resolved shot and the part of its path that gets drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotReport {
    pub resolution: ShotResolution,
    /// Path up to (not including) the first contact with the box that
    /// stopped the shot; the whole flight for a clean miss.
    pub rendered_path: Trajectory,
    /// Sample count of the untruncated flight.
    pub samples: usize,
}

impl ShotReport {
    pub fn outcome(&self) -> ShotOutcome {
        self.resolution.outcome()
    }

    /// Last drawn point.
    pub fn impact(&self) -> Option<Point> {
        self.rendered_path.last()
    }
}

/// Classify a sampled path. The obstacle always wins over the target.
pub fn classify(trajectory: &Trajectory, target: &Rect, obstacle: &Rect) -> ShotResolution {
    if let Some(index) = first_in_box(trajectory, obstacle) {
        return ShotResolution::ObstacleBlocked { index };
    }

    match first_in_box(trajectory, target) {
        Some(index) => ShotResolution::TargetHit { index },
        None => ShotResolution::Clear,
    }
}

/// Sample a shot from `origin` and classify it against the two boxes.
///
/// The flight is always integrated with standard gravity and the standard
/// sample count. `requested_gravity` is accepted but not applied.
pub fn resolve_shot(
    target: &Rect,
    obstacle: &Rect,
    origin: Point,
    speed: f64,
    angle_deg: f64,
    requested_gravity: f64,
) -> Result<ShotReport, ShotError> {
    if requested_gravity != GRAVITY {
        debug!(requested_gravity, applied = GRAVITY, "ignoring requested gravity");
    }

    let params = ShotParams::new(origin, speed, angle_deg)
        .with_gravity(GRAVITY)
        .with_samples(TRAJECTORY_SAMPLES);
    let trajectory = sample_trajectory(&params)?;
    let samples = trajectory.len();

    let resolution = classify(&trajectory, target, obstacle);
    let rendered_path = match resolution {
        ShotResolution::ObstacleBlocked { .. } => truncate_at_intersection(trajectory, obstacle),
        ShotResolution::TargetHit { .. } => truncate_at_intersection(trajectory, target),
        ShotResolution::Clear => trajectory,
    };

    debug!(
        speed,
        angle_deg,
        ?resolution,
        drawn = rendered_path.len(),
        samples,
        "shot resolved"
    );

    Ok(ShotReport {
        resolution,
        rendered_path,
        samples,
    })
}

/// Resolve a shot, draw its path and flush the renderer.
pub fn fire_shot<R: Renderer + ?Sized>(
    renderer: &mut R,
    target: &Rect,
    obstacle: &Rect,
    origin: Point,
    speed: f64,
    angle_deg: f64,
    requested_gravity: f64,
) -> Result<ShotReport, GameError> {
    let report = resolve_shot(target, obstacle, origin, speed, angle_deg, requested_gravity)?;
    renderer.draw_path(&report.rendered_path);
    renderer.flush()?;
    Ok(report)
}
