//! Renderer collaborator.
//!
//! The engine only tells a renderer what to draw; how it reaches the screen
//! is up to the implementation. Colors come from the renderer's own
//! [`Palette`], handed in at construction.

use std::io;

use artillery_core::constants::{VIEWPORT_MAX, VIEWPORT_MIN};
use artillery_core::enums::{Color, Player};
use artillery_core::layout::{BoardLayout, Palette};
use artillery_core::types::{Rect, Trajectory};

pub trait Renderer {
    fn palette(&self) -> &Palette;

    /// World-space window shown on screen, as `(min, max)` per axis.
    fn set_viewport(&mut self, x: (f64, f64), y: (f64, f64));

    /// Fill an axis-aligned rectangle.
    fn draw_box(&mut self, rect: &Rect, color: Color);

    /// Polyline through the trajectory's points, in the palette's path color.
    fn draw_path(&mut self, trajectory: &Trajectory);

    /// Wipe everything drawn so far.
    fn clear(&mut self);

    /// Push pending drawing to the display.
    fn flush(&mut self) -> io::Result<()>;

    /// Pre-shot board: fixed viewport, both tanks and the obstacle.
    fn draw_board(&mut self, layout: &BoardLayout, _current: Player) -> io::Result<()> {
        draw_layout(self, layout);
        self.flush()
    }
}

/// Draw the layout's three boxes on the standard viewport without flushing.
pub fn draw_layout<R: Renderer + ?Sized>(renderer: &mut R, layout: &BoardLayout) {
    let palette = *renderer.palette();
    renderer.set_viewport((VIEWPORT_MIN, VIEWPORT_MAX), (VIEWPORT_MIN, VIEWPORT_MAX));
    renderer.draw_box(&layout.tank1, palette.tank1);
    renderer.draw_box(&layout.tank2, palette.tank2);
    renderer.draw_box(&layout.obstacle, palette.obstacle);
}
