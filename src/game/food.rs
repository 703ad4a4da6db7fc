use super::cell::Cell;
use super::grid::{Grid, Point};
use super::snake::Snake;
use crate::surface::Surface;
use rand::{seq::IteratorRandom, Rng};
use ratatui::style::Color;

/// The single piece of food currently on the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    cell: Cell,
}

impl Food {
    pub(crate) fn new(position: Point, size: u16, color: Color) -> Food {
        Food {
            cell: Cell::new(position, size, color),
        }
    }

    pub(crate) fn position(&self) -> Point {
        self.cell.origin()
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S, background: Color) {
        self.cell.draw(surface, 0, background);
    }

    pub(crate) fn erase<S: Surface>(&self, surface: &mut S, background: Color) {
        self.cell.erase(surface, background);
    }

    /// Pick a uniformly random cell of `grid` not occupied by `snake`,
    /// giving up after `attempts` occupied picks
    pub(crate) fn place<R: Rng>(
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
        attempts: usize,
    ) -> Option<Point> {
        for _ in 0..attempts {
            let pos = grid.cell_origin(
                rng.random_range(0..grid.width),
                rng.random_range(0..grid.height),
            );
            if !snake.occupies(pos) {
                return Some(pos);
            }
        }
        None
    }

    /// Choose uniformly among all cells of `grid` not occupied by `snake`.
    /// Returns `None` only if the snake covers the whole grid.
    pub(crate) fn place_anywhere<R: Rng>(
        rng: &mut R,
        grid: Grid,
        snake: &Snake,
    ) -> Option<Point> {
        grid.cells().filter(|&p| !snake.occupies(p)).choose(rng)
    }
}
