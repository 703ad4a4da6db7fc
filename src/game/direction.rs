use super::grid::Point;

/// The four headings the snake can take.
///
/// The declaration order is the cyclic order used for turn validation: two
/// directions whose indices differ by an odd count are perpendicular, while
/// an even difference means "same way" or "reversed".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Position of the direction in the Right → Up → Left → Down cycle
    pub(crate) fn index(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Down => 3,
        }
    }

    /// Movement per step in grid-cell units
    pub(crate) fn unit_vector(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Returns `true` if turning from `self` to `other` is allowed
    pub(crate) fn is_perpendicular(self, other: Direction) -> bool {
        self.index().abs_diff(other.index()) % 2 == 1
    }

    /// Move `pos` one cell of `cell_size` pixels in this direction.  The
    /// result is not bounds-checked.
    pub(crate) fn advance(self, pos: Point, cell_size: u16) -> Point {
        let (dx, dy) = self.unit_vector();
        let size = i32::from(cell_size);
        Point::new(pos.x + dx * size, pos.y + dy * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Right, Direction::Right, false)]
    #[case(Direction::Right, Direction::Up, true)]
    #[case(Direction::Right, Direction::Left, false)]
    #[case(Direction::Right, Direction::Down, true)]
    #[case(Direction::Up, Direction::Right, true)]
    #[case(Direction::Up, Direction::Up, false)]
    #[case(Direction::Up, Direction::Left, true)]
    #[case(Direction::Up, Direction::Down, false)]
    #[case(Direction::Left, Direction::Right, false)]
    #[case(Direction::Left, Direction::Up, true)]
    #[case(Direction::Left, Direction::Left, false)]
    #[case(Direction::Left, Direction::Down, true)]
    #[case(Direction::Down, Direction::Right, true)]
    #[case(Direction::Down, Direction::Up, false)]
    #[case(Direction::Down, Direction::Left, true)]
    #[case(Direction::Down, Direction::Down, false)]
    fn test_is_perpendicular(
        #[case] current: Direction,
        #[case] requested: Direction,
        #[case] allowed: bool,
    ) {
        assert_eq!(current.is_perpendicular(requested), allowed);
    }

    #[rstest]
    #[case(Direction::Right, Point::new(20, 30), Point::new(30, 30))]
    #[case(Direction::Up, Point::new(20, 30), Point::new(20, 20))]
    #[case(Direction::Left, Point::new(20, 30), Point::new(10, 30))]
    #[case(Direction::Down, Point::new(20, 30), Point::new(20, 40))]
    #[case(Direction::Left, Point::new(0, 0), Point::new(-10, 0))]
    #[case(Direction::Up, Point::new(0, 0), Point::new(0, -10))]
    fn test_direction_advance(#[case] d: Direction, #[case] pos: Point, #[case] r: Point) {
        assert_eq!(d.advance(pos, 10), r);
    }
}
