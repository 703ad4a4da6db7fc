use crate::consts;
use crate::game::Grid;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Color,
    widgets::Widget,
};
use std::ops::Range;

/// Something the game can paint solid rectangles onto.  The game never reads
/// pixels back.
pub(crate) trait Surface {
    /// Fill the `width` × `height` rectangle whose top-left corner is at
    /// (`x`, `y`) with `color`.  Parts of the rectangle outside the surface
    /// are ignored.
    fn fill_region(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
}

/// A retained pixel buffer covering the whole grid.
///
/// When rendered as a widget, each grid cell becomes
/// [`CELL_COLUMNS`][consts::CELL_COLUMNS] terminal cells colored with the
/// pixel at the center of the grid cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Framebuffer {
    grid: Grid,
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a framebuffer for `grid` with every pixel set to `fill`
    pub(crate) fn new(grid: Grid, fill: Color) -> Framebuffer {
        let width = usize::from(grid.width) * usize::from(grid.cell_size);
        let height = usize::from(grid.height) * usize::from(grid.cell_size);
        Framebuffer {
            grid,
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Return the color of the pixel at (`x`, `y`), or `None` if it is off
    /// the buffer
    pub(crate) fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        self.pixels.get(y * self.width + x).copied()
    }

    /// Size of the area needed to render the whole buffer in a terminal
    pub(crate) fn terminal_size(&self) -> Size {
        Size {
            width: self.grid.width.saturating_mul(consts::CELL_COLUMNS),
            height: self.grid.height,
        }
    }
}

impl Surface for Framebuffer {
    fn fill_region(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let xs = clip(x, width, self.width);
        for row in clip(y, height, self.height) {
            let start = row * self.width;
            if let Some(run) = self.pixels.get_mut(start + xs.start..start + xs.end) {
                run.fill(color);
            }
        }
    }
}

/// Intersect the span of `len` pixels starting at `start` with `0..limit`
fn clip(start: i32, len: u32, limit: usize) -> Range<usize> {
    let start = i64::from(start);
    let end = start + i64::from(len);
    let bound = |v: i64| usize::try_from(v.max(0)).map_or(limit, |v| v.min(limit));
    bound(start)..bound(end)
}

impl Widget for &Framebuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let half = i32::from(self.grid.cell_size) / 2;
        for pos in area.positions() {
            let col = (pos.x - area.x) / consts::CELL_COLUMNS;
            let row = pos.y - area.y;
            if col >= self.grid.width || row >= self.grid.height {
                continue;
            }
            let origin = self.grid.cell_origin(col, row);
            if let Some(color) = self.pixel(origin.x + half, origin.y + half) {
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_bg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    const GRID: Grid = Grid {
        width: 3,
        height: 2,
        cell_size: 4,
    };

    #[test]
    fn fill_inside() {
        let mut fb = Framebuffer::new(GRID, Color::White);
        fb.fill_region(4, 0, 4, 4, Color::Red);
        assert_eq!(fb.pixel(3, 0), Some(Color::White));
        assert_eq!(fb.pixel(4, 0), Some(Color::Red));
        assert_eq!(fb.pixel(7, 3), Some(Color::Red));
        assert_eq!(fb.pixel(8, 3), Some(Color::White));
        assert_eq!(fb.pixel(4, 4), Some(Color::White));
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut fb = Framebuffer::new(GRID, Color::White);
        fb.fill_region(-2, -2, 4, 4, Color::Red);
        assert_eq!(fb.pixel(0, 0), Some(Color::Red));
        assert_eq!(fb.pixel(1, 1), Some(Color::Red));
        assert_eq!(fb.pixel(2, 0), Some(Color::White));
        assert_eq!(fb.pixel(0, 2), Some(Color::White));
        fb.fill_region(10, 6, 10, 10, Color::Blue);
        assert_eq!(fb.pixel(11, 7), Some(Color::Blue));
        assert_eq!(fb.pixel(9, 7), Some(Color::White));
        assert_eq!(fb.pixel(12, 7), None);
    }

    #[test]
    fn fill_entirely_outside() {
        let mut fb = Framebuffer::new(GRID, Color::White);
        let before = fb.clone();
        fb.fill_region(-20, 0, 10, 8, Color::Red);
        fb.fill_region(0, 8, 12, 8, Color::Red);
        fb.fill_region(12, 0, 4, 4, Color::Red);
        assert_eq!(fb, before);
    }

    #[test]
    fn render_samples_cell_centers() {
        let mut fb = Framebuffer::new(GRID, Color::White);
        // Only the edge of the first cell; its center stays white.
        fb.fill_region(0, 0, 1, 4, Color::Red);
        fb.fill_region(4, 0, 4, 4, Color::Green);
        fb.fill_region(8, 4, 4, 4, Color::Blue);
        assert_eq!(fb.terminal_size(), Size::new(6, 2));
        let area = Rect::new(0, 0, 6, 2);
        let mut buffer = Buffer::empty(area);
        fb.render(area, &mut buffer);
        let mut expected = Buffer::with_lines(["      ", "      "]);
        expected.set_style(Rect::new(0, 0, 6, 2), Style::new().bg(Color::White));
        expected.set_style(Rect::new(2, 0, 2, 1), Style::new().bg(Color::Green));
        expected.set_style(Rect::new(4, 1, 2, 1), Style::new().bg(Color::Blue));
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
