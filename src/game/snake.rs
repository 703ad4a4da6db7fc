use super::cell::Cell;
use super::direction::Direction;
use super::grid::{Grid, Point};
use crate::consts;
use crate::surface::Surface;
use ratatui::style::Color;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are in pixels relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head; always equal to the origin of
    /// `body[0]`
    pub(super) head: Point,

    /// The cells of the snake's body, head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    cell_size: u16,
    color: Color,
}

/// Outcome of moving the snake one cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The head moved and the tail was dropped
    Moved,
    /// The head landed on the food and the tail was kept
    Ate,
}

/// Outcome of a turn request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Turn {
    /// The requested direction was not perpendicular to the current one
    Rejected,
    /// The direction changed without moving
    Turned,
    /// The direction changed and the snake immediately took a step
    Stepped(Step),
}

impl Snake {
    /// Create a snake of `length` cells lying along the top row of `grid`,
    /// head rightmost and facing right
    pub(crate) fn new(grid: Grid, length: u16, color: Color) -> Snake {
        let cell_size = grid.cell_size;
        let body = (0..length)
            .rev()
            .map(|col| Cell::new(grid.cell_origin(col, 0), cell_size, color))
            .collect::<VecDeque<_>>();
        Snake {
            head: grid.cell_origin(length.saturating_sub(1), 0),
            body,
            direction: Direction::Right,
            cell_size,
            color,
        }
    }

    pub(crate) fn head(&self) -> Point {
        self.head
    }

    pub(crate) fn occupies(&self, pos: Point) -> bool {
        self.body.iter().any(|c| c.origin() == pos)
    }

    /// Returns `true` if the head overlaps any other segment
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.iter().skip(1).any(|c| c.origin() == self.head)
    }

    /// Move the head one cell in `direction`.  If the new head is on `food`
    /// the snake grows, otherwise the tail is dropped.
    pub(crate) fn step(&mut self, direction: Direction, food: Option<Point>) -> Step {
        self.head = direction.advance(self.head, self.cell_size);
        let step = if food == Some(self.head) {
            Step::Ate
        } else {
            let _ = self.body.pop_back();
            Step::Moved
        };
        self.body.push_front(Cell::new(self.head, self.cell_size, self.color));
        step
    }

    /// Turn towards `requested` if it is perpendicular to the current
    /// direction.  When `immediate` is set, an accepted turn also takes one
    /// step in the new direction straight away.
    pub(crate) fn change_direction(
        &mut self,
        requested: Direction,
        food: Option<Point>,
        immediate: bool,
    ) -> Turn {
        if !requested.is_perpendicular(self.direction) {
            return Turn::Rejected;
        }
        self.direction = requested;
        if immediate {
            Turn::Stepped(self.step(requested, food))
        } else {
            Turn::Turned
        }
    }

    /// Move forwards one cell in the current direction
    pub(crate) fn update(&mut self, food: Option<Point>) -> Step {
        self.step(self.direction, food)
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S, background: Color) {
        for cell in &self.body {
            cell.draw(surface, consts::SNAKE_BORDER, background);
        }
    }

    pub(crate) fn remove<S: Surface>(&self, surface: &mut S, background: Color) {
        for cell in &self.body {
            cell.erase(surface, background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Framebuffer;

    const GRID: Grid = Grid {
        width: 6,
        height: 6,
        cell_size: 10,
    };

    fn positions(snake: &Snake) -> Vec<Point> {
        snake.body.iter().map(Cell::origin).collect()
    }

    #[test]
    fn new_snake_lies_along_top_row() {
        let snake = Snake::new(GRID, 3, Color::Black);
        assert_eq!(snake.head(), Point::new(20, 0));
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(
            positions(&snake),
            [Point::new(20, 0), Point::new(10, 0), Point::new(0, 0)]
        );
    }

    #[test]
    fn turn_down_is_accepted() {
        let mut snake = Snake::new(GRID, 2, Color::Black);
        assert_eq!(
            snake.change_direction(Direction::Down, None, true),
            Turn::Stepped(Step::Moved)
        );
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Point::new(10, 10));
        assert_eq!(positions(&snake), [Point::new(10, 10), Point::new(10, 0)]);
    }

    #[test]
    fn same_direction_and_reversal_are_rejected() {
        let mut snake = Snake::new(GRID, 2, Color::Black);
        let before = snake.clone();
        assert_eq!(
            snake.change_direction(Direction::Right, None, true),
            Turn::Rejected
        );
        assert_eq!(
            snake.change_direction(Direction::Left, None, true),
            Turn::Rejected
        );
        assert_eq!(snake, before);
    }

    #[test]
    fn turn_without_immediate_step() {
        let mut snake = Snake::new(GRID, 2, Color::Black);
        assert_eq!(
            snake.change_direction(Direction::Up, None, false),
            Turn::Turned
        );
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.head(), Point::new(10, 0));
        assert_eq!(snake.body.len(), 2);
    }

    #[test]
    fn five_updates_keep_length() {
        let mut snake = Snake::new(GRID, 2, Color::Black);
        for _ in 0..5 {
            assert_eq!(snake.update(Some(Point::new(0, 50))), Step::Moved);
        }
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.head(), Point::new(60, 0));
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn eating_keeps_tail() {
        let mut snake = Snake::new(GRID, 2, Color::Black);
        assert_eq!(snake.update(Some(Point::new(20, 0))), Step::Ate);
        assert_eq!(
            positions(&snake),
            [Point::new(20, 0), Point::new(10, 0), Point::new(0, 0)]
        );
        assert_eq!(snake.update(Some(Point::new(20, 0))), Step::Moved);
        assert_eq!(snake.body.len(), 3);
    }

    #[test]
    fn bites_itself() {
        let mut snake = Snake::new(GRID, 5, Color::Black);
        assert_eq!(snake.head(), Point::new(40, 0));
        let _ = snake.change_direction(Direction::Down, None, true);
        let _ = snake.change_direction(Direction::Left, None, true);
        assert!(!snake.bites_itself());
        let _ = snake.change_direction(Direction::Up, None, true);
        assert_eq!(snake.head(), Point::new(30, 0));
        assert!(snake.bites_itself());
    }

    #[test]
    fn draw_then_remove() {
        let mut fb = Framebuffer::new(GRID, Color::White);
        let snake = Snake::new(GRID, 2, Color::Black);
        snake.draw(&mut fb, Color::White);
        assert_eq!(fb.pixel(5, 5), Some(Color::Black));
        assert_eq!(fb.pixel(15, 5), Some(Color::Black));
        // The tail's border eats into the head's left edge.
        assert_eq!(fb.pixel(10, 5), Some(Color::White));
        assert_eq!(fb.pixel(25, 5), Some(Color::White));
        snake.remove(&mut fb, Color::White);
        assert_eq!(fb, Framebuffer::new(GRID, Color::White));
    }
}
