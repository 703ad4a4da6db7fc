/// A position in pixel space, relative to the top-left corner of the grid.
/// Coordinates are signed so that a head which has run off the grid can
/// still be represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// Dimensions of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Width in cells
    pub(crate) width: u16,

    /// Height in cells
    pub(crate) height: u16,

    /// Edge length of a cell in pixels
    pub(crate) cell_size: u16,
}

impl Grid {
    pub(crate) fn pixel_width(self) -> u32 {
        u32::from(self.width) * u32::from(self.cell_size)
    }

    pub(crate) fn pixel_height(self) -> u32 {
        u32::from(self.height) * u32::from(self.cell_size)
    }

    /// Pixel position of the top-left corner of the cell at column `col`,
    /// row `row`
    pub(crate) fn cell_origin(self, col: u16, row: u16) -> Point {
        let size = i32::from(self.cell_size);
        Point::new(i32::from(col) * size, i32::from(row) * size)
    }

    /// Returns `true` if a cell whose top-left corner is at `pos` lies
    /// entirely on the grid
    pub(crate) fn contains(self, pos: Point) -> bool {
        let size = i64::from(self.cell_size);
        let (x, y) = (i64::from(pos.x), i64::from(pos.y));
        x >= 0
            && y >= 0
            && x <= i64::from(self.pixel_width()) - size
            && y <= i64::from(self.pixel_height()) - size
    }

    /// Returns `true` if `pos` is a multiple of the cell size on both axes
    pub(crate) fn is_aligned(self, pos: Point) -> bool {
        let size = i32::from(self.cell_size);
        pos.x.rem_euclid(size) == 0 && pos.y.rem_euclid(size) == 0
    }

    /// Iterate over the origins of every cell on the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Point> {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| self.cell_origin(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GRID: Grid = Grid {
        width: 6,
        height: 4,
        cell_size: 10,
    };

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(50, 30), true)]
    #[case(Point::new(60, 0), false)]
    #[case(Point::new(0, 40), false)]
    #[case(Point::new(-10, 0), false)]
    #[case(Point::new(0, -10), false)]
    #[case(Point::new(51, 0), false)]
    fn test_contains(#[case] pos: Point, #[case] inside: bool) {
        assert_eq!(GRID.contains(pos), inside);
    }

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(-20, 30), true)]
    #[case(Point::new(5, 30), false)]
    #[case(Point::new(10, -3), false)]
    fn test_is_aligned(#[case] pos: Point, #[case] aligned: bool) {
        assert_eq!(GRID.is_aligned(pos), aligned);
    }

    #[test]
    fn cells_cover_grid() {
        let cells = GRID.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 24);
        assert_eq!(cells.first(), Some(&Point::new(0, 0)));
        assert_eq!(cells.get(6), Some(&Point::new(0, 10)));
        assert_eq!(cells.last(), Some(&Point::new(50, 30)));
        assert!(cells.iter().all(|&p| GRID.contains(p) && GRID.is_aligned(p)));
    }

    #[test]
    fn pixel_extent() {
        assert_eq!(GRID.pixel_width(), 60);
        assert_eq!(GRID.pixel_height(), 40);
    }
}
