use super::grid::Point;
use crate::surface::Surface;
use ratatui::style::Color;

/// One filled square of the grid.  Cells are never moved; a moving snake
/// creates new cells and drops old ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    origin: Point,
    size: u16,
    color: Color,
}

impl Cell {
    pub(crate) fn new(origin: Point, size: u16, color: Color) -> Cell {
        Cell {
            origin,
            size,
            color,
        }
    }

    /// Pixel position of the cell's top-left corner
    pub(crate) fn origin(&self) -> Point {
        self.origin
    }

    /// Paint a `border`-pixel margin of `background` around the cell, then
    /// the cell itself
    pub(crate) fn draw<S: Surface>(&self, surface: &mut S, border: u16, background: Color) {
        let outset = i32::from(border);
        let side = u32::from(self.size) + 2 * u32::from(border);
        surface.fill_region(
            self.origin.x - outset,
            self.origin.y - outset,
            side,
            side,
            background,
        );
        self.fill(surface, self.color);
    }

    /// Paint exactly the cell's square with `background`
    pub(crate) fn erase<S: Surface>(&self, surface: &mut S, background: Color) {
        self.fill(surface, background);
    }

    fn fill<S: Surface>(&self, surface: &mut S, color: Color) {
        let side = u32::from(self.size);
        surface.fill_region(self.origin.x, self.origin.y, side, side, color);
    }
}
