//! Trajectory vs. box intersection.

use artillery_core::types::{Rect, Trajectory};

/// Lowest sample index whose point lies inside `rect` (edges included),
/// or `None` if the path never enters it.
///
/// Scans in time order, so the result is the first contact, not the nearest.
pub fn first_in_box(trajectory: &Trajectory, rect: &Rect) -> Option<usize> {
    trajectory.points().iter().position(|&p| rect.contains(p))
}

/// The part of the path drawn before it enters `rect`: samples `[0, j)`
/// where `j` is the first contact. Returns the input untouched when there is
/// no contact; an empty path when the very first sample is inside.
pub fn truncate_at_intersection(mut trajectory: Trajectory, rect: &Rect) -> Trajectory {
    if let Some(j) = first_in_box(&trajectory, rect) {
        trajectory.truncate(j);
    }
    trajectory
}
