//! Grid cursor over a row-major card board.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selected card position. Moves wrap around the edges of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl GridCursor {
    /// `columns` is clamped to at least 1; `len` should be a multiple of it.
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / self.columns
    }

    pub fn column(&self) -> usize {
        self.index % self.columns
    }

    fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    pub fn move_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn step(&mut self, dir: Direction) {
        if self.len == 0 {
            return;
        }
        let (row, col) = (self.row(), self.column());
        let rows = self.rows();
        let (row, col) = match dir {
            Direction::Left => (row, (col + self.columns - 1) % self.columns),
            Direction::Right => (row, (col + 1) % self.columns),
            Direction::Up => ((row + rows - 1) % rows, col),
            Direction::Down => ((row + 1) % rows, col),
        };
        self.move_to(row * self.columns + col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        let mut c = GridCursor::new(4, 16);
        c.step(Direction::Right);
        c.step(Direction::Down);
        assert_eq!(c.index(), 5);
        assert_eq!((c.row(), c.column()), (1, 1));
        c.step(Direction::Left);
        c.step(Direction::Up);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_wraps_at_edges() {
        let mut c = GridCursor::new(4, 16);
        c.step(Direction::Left);
        assert_eq!(c.index(), 3);
        c.step(Direction::Up);
        assert_eq!(c.index(), 15);
        c.step(Direction::Right);
        assert_eq!(c.index(), 12);
        c.step(Direction::Down);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_move_to_ignores_out_of_range() {
        let mut c = GridCursor::new(2, 4);
        c.move_to(3);
        assert_eq!(c.index(), 3);
        c.move_to(4);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_empty_grid_stays_put() {
        let mut c = GridCursor::new(0, 0);
        c.step(Direction::Down);
        assert_eq!(c.index(), 0);
    }
}
