//! Character-grid renderer for terminals.
//!
//! World coordinates are mapped onto a fixed grid of cells, y pointing up.
//! Nothing reaches the writer until [`Renderer::flush`], which prints the
//! whole frame with a border and a caption line.

use std::io::{self, Write};

use artillery_core::enums::{Color, Player};
use artillery_core::layout::{BoardLayout, Palette};
use artillery_core::types::{Point, Rect, Trajectory};
use artillery_sim::render::{draw_layout, Renderer};

pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_ROWS: usize = 25;

const RESET: &str = "\x1b[0m";

fn glyph(color: Color) -> char {
    match color {
        Color::Blue | Color::Red => '#',
        Color::Black => '█',
        Color::Green => '*',
    }
}

fn ansi(color: Color) -> &'static str {
    match color {
        Color::Blue => "\x1b[34m",
        Color::Red => "\x1b[31m",
        Color::Black => "\x1b[90m",
        Color::Green => "\x1b[32m",
    }
}

pub struct AsciiRenderer<W> {
    out: W,
    palette: Palette,
    cols: usize,
    rows: usize,
    /// Row-major, row 0 at the top.
    cells: Vec<Option<Color>>,
    x_range: (f64, f64),
    y_range: (f64, f64),
    color: bool,
    caption: String,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self::with_size(out, palette, DEFAULT_COLS, DEFAULT_ROWS)
    }

    pub fn with_size(out: W, palette: Palette, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            palette,
            cols,
            rows,
            cells: vec![None; cols * rows],
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            color: false,
            caption: String::new(),
        }
    }

    /// Emit ANSI color codes around each painted cell.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Color> {
        self.cells.get(row * self.cols + col).copied().flatten()
    }

    fn col_of(&self, x: f64) -> Option<usize> {
        axis_cell(x, self.x_range, self.cols)
    }

    /// Row index counted from the top.
    fn row_of(&self, y: f64) -> Option<usize> {
        axis_cell(y, self.y_range, self.rows).map(|r| self.rows - 1 - r)
    }

    fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        Some((self.col_of(p.x)?, self.row_of(p.y)?))
    }

    fn paint(&mut self, col: usize, row: usize, color: Color) {
        if let Some(cell) = self.cells.get_mut(row * self.cols + col) {
            *cell = Some(color);
        }
    }

    /// Paint every cell on the straight run between two cells.
    fn paint_line(&mut self, from: (usize, usize), to: (usize, usize), color: Color) {
        let (c0, r0) = (from.0 as i64, from.1 as i64);
        let (c1, r1) = (to.0 as i64, to.1 as i64);
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        if steps == 0 {
            self.paint(from.0, from.1, color);
            return;
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let c = (c0 as f64 + (c1 - c0) as f64 * t).round() as usize;
            let r = (r0 as f64 + (r1 - r0) as f64 * t).round() as usize;
            self.paint(c, r, color);
        }
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let border = format!("+{}+", "-".repeat(self.cols));
        if !self.caption.is_empty() {
            writeln!(self.out, "{}", self.caption)?;
        }
        writeln!(self.out, "{border}")?;
        for row in 0..self.rows {
            let mut line = String::with_capacity(self.cols + 2);
            line.push('|');
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(color) if self.color => {
                        line.push_str(ansi(color));
                        line.push(glyph(color));
                        line.push_str(RESET);
                    }
                    Some(color) => line.push(glyph(color)),
                    None => line.push(' '),
                }
            }
            line.push('|');
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{border}")
    }
}

/// Cell index of `v` along one axis, or `None` outside the window.
/// The upper edge belongs to the last cell.
fn axis_cell(v: f64, (min, max): (f64, f64), cells: usize) -> Option<usize> {
    if !v.is_finite() || v < min || v > max || max <= min {
        return None;
    }
    let idx = ((v - min) / (max - min) * cells as f64).floor() as usize;
    Some(idx.min(cells - 1))
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn set_viewport(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.x_range = x;
        self.y_range = y;
    }

    fn draw_box(&mut self, rect: &Rect, color: Color) {
        let left = rect.left().max(self.x_range.0);
        let right = rect.right().min(self.x_range.1);
        let bottom = rect.bottom().max(self.y_range.0);
        let top = rect.top().min(self.y_range.1);
        let (Some(c0), Some(c1), Some(r_top), Some(r_bottom)) = (
            self.col_of(left),
            self.col_of(right),
            self.row_of(top),
            self.row_of(bottom),
        ) else {
            return;
        };
        for row in r_top..=r_bottom {
            for col in c0..=c1 {
                self.paint(col, row, color);
            }
        }
    }

    fn draw_path(&mut self, trajectory: &Trajectory) {
        let color = self.palette.path;
        let mut prev: Option<(usize, usize)> = None;
        for p in trajectory.points() {
            match self.cell_of(*p) {
                Some(cell) => {
                    match prev {
                        Some(last) => self.paint_line(last, cell, color),
                        None => self.paint(cell.0, cell.1, color),
                    }
                    prev = Some(cell);
                }
                None => prev = None,
            }
        }
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.caption.clear();
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_frame()?;
        self.out.flush()
    }

    fn draw_board(&mut self, layout: &BoardLayout, current: Player) -> io::Result<()> {
        self.caption = format!("{current} to fire");
        draw_layout(self, layout);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> AsciiRenderer<Vec<u8>> {
        AsciiRenderer::with_size(Vec::new(), Palette::default(), 20, 10)
    }

    fn frame(r: AsciiRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn axis_cell_maps_edges() {
        assert_eq!(axis_cell(0.0, (0.0, 100.0), 20), Some(0));
        assert_eq!(axis_cell(100.0, (0.0, 100.0), 20), Some(19));
        assert_eq!(axis_cell(50.0, (0.0, 100.0), 20), Some(10));
        assert_eq!(axis_cell(-0.1, (0.0, 100.0), 20), None);
        assert_eq!(axis_cell(f64::NAN, (0.0, 100.0), 20), None);
    }

    #[test]
    fn board_paints_tanks_and_obstacle() {
        let mut r = renderer();
        r.draw_board(&BoardLayout::default(), Player::One).unwrap();

        // Tank 1 spans x 10..15, bottom row.
        assert_eq!(r.cell(2, 9), Some(Color::Blue));
        assert_eq!(r.cell(18, 9), Some(Color::Red));
        // Obstacle covers x 40..60 up to half height.
        assert_eq!(r.cell(10, 9), Some(Color::Black));
        assert_eq!(r.cell(10, 5), Some(Color::Black));
        assert_eq!(r.cell(10, 0), None);
        assert_eq!(r.cell(0, 0), None);

        let out = frame(r);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Player 1 to fire"));
        assert_eq!(lines.next(), Some("+--------------------+"));
        assert_eq!(out.lines().count(), 13);
        assert!(out.contains('█'));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn path_is_joined_between_points() {
        let mut r = renderer();
        r.set_viewport((0.0, 100.0), (0.0, 100.0));
        r.draw_path(&Trajectory::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        ]));
        for col in 0..20 {
            assert_eq!(r.cell(col, 9), Some(Color::Green), "col {col}");
        }
    }

    #[test]
    fn off_screen_points_are_skipped() {
        let mut r = renderer();
        r.set_viewport((0.0, 100.0), (0.0, 100.0));
        r.draw_path(&Trajectory::new(vec![
            Point::new(50.0, 150.0),
            Point::new(50.0, 50.0),
        ]));
        let painted = (0..10)
            .flat_map(|row| (0..20).map(move |col| (col, row)))
            .filter(|&(c, r_)| r.cell(c, r_).is_some())
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn clear_empties_the_grid() {
        let mut r = renderer();
        r.set_viewport((0.0, 100.0), (0.0, 100.0));
        r.draw_box(&Rect::new(0.0, 100.0, 0.0, 100.0).unwrap(), Color::Black);
        assert_eq!(r.cell(0, 0), Some(Color::Black));
        r.clear();
        assert_eq!(r.cell(0, 0), None);
    }

    #[test]
    fn color_output_wraps_cells() {
        let mut r = renderer().with_color(true);
        r.draw_board(&BoardLayout::default(), Player::Two).unwrap();
        let out = frame(r);
        assert!(out.starts_with("Player 2 to fire"));
        assert!(out.contains("\x1b[34m#\x1b[0m"));
        assert!(out.contains("\x1b[31m#\x1b[0m"));
    }
}
