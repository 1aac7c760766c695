//! Direction vectors and a dense 2D grid
//!
//! Coordinates are `(x, y)` with `x` growing right and `y` growing down, so
//! "up" is `(0, -1)`.

pub type Offset = (isize, isize);

pub const LEFT: Offset = (-1, 0);
pub const RIGHT: Offset = (1, 0);
pub const UP: Offset = (0, -1);
pub const DOWN: Offset = (0, 1);
pub const UP_LEFT: Offset = (-1, -1);
pub const UP_RIGHT: Offset = (1, -1);
pub const DOWN_LEFT: Offset = (-1, 1);
pub const DOWN_RIGHT: Offset = (1, 1);

pub const CARDINALS: [Offset; 4] = [LEFT, RIGHT, UP, DOWN];
pub const DIAGONALS: [Offset; 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    LEFT, RIGHT, UP, DOWN, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT,
];

/// Row-major rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows, which must all have the same length.
    ///
    /// Returns `None` for ragged or empty input.
    pub fn from_rows<I, R>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let before = cells.len();
            cells.extend(row);
            let row_width = cells.len() - before;
            if *width.get_or_insert(row_width) != row_width {
                return None;
            }
            height += 1;
        }
        let width = width.filter(|&w| w > 0)?;
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// `width` x `height` grid with every cell set to `fill`
    pub fn filled(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Same-shaped grid with `f` applied to every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        (x < self.width && y < self.height).then(|| &self.cells[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// All `(x, y)` positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// First position whose cell satisfies `pred`
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| pred(cell))
            .map(|idx| (idx % self.width, idx / self.width))
    }

    /// Step from `(x, y)` by `offset`, if the result stays inside the grid.
    pub fn step(&self, (x, y): (usize, usize), (dx, dy): Offset) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }

    /// In-bounds cardinal neighbours of `(x, y)`
    pub fn neighbours(&self, pos: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        CARDINALS
            .into_iter()
            .filter_map(move |offset| self.step(pos, offset))
    }

    /// Cells walked from `(x, y)` (exclusive) towards the edge along `offset`
    pub fn ray(&self, pos: (usize, usize), offset: Offset) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.step(pos, offset), move |&p| self.step(p, offset))
            .map(|(x, y)| &self.cells[y * self.width + x])
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        &self.cells[y * self.width + x]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        &mut self.cells[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<u8> {
        Grid::from_rows(["123".bytes(), "456".bytes()]).unwrap()
    }

    #[test]
    fn rejects_ragged_and_empty_rows() {
        assert!(Grid::from_rows(["12".bytes(), "3".bytes()]).is_none());
        assert!(Grid::<u8>::from_rows(Vec::<Vec<u8>>::new()).is_none());
        assert!(Grid::from_rows(["".bytes()]).is_none());
    }

    #[test]
    fn indexes_row_major() {
        let grid = sample();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[(2, 1)], b'6');
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.row(1), b"456");
        assert_eq!(grid.find(|&c| c == b'5'), Some((1, 1)));
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    fn filled_and_mapped_grids() {
        let mut grid = Grid::filled(2, 3, 0u8);
        grid[(1, 2)] = 9;
        assert_eq!(grid.find(|&c| c == 9), Some((1, 2)));
        let doubled = grid.map(|&c| c as u16 * 2);
        assert_eq!(doubled[(1, 2)], 18);
        assert_eq!((doubled.width(), doubled.height()), (2, 3));
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid = sample();
        let mut corner: Vec<_> = grid.neighbours((0, 0)).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbours((1, 1)).count(), 3);
    }

    #[test]
    fn rays_walk_to_the_edge() {
        let grid = sample();
        let right: Vec<_> = grid.ray((0, 0), RIGHT).copied().collect();
        assert_eq!(right, b"23");
        assert_eq!(grid.ray((0, 0), UP).count(), 0);
        assert_eq!(grid.ray((2, 1), UP_LEFT).copied().collect::<Vec<_>>(), b"2");
    }

    #[test]
    fn direction_sets_are_disjoint() {
        for d in CARDINALS {
            assert!(!DIAGONALS.contains(&d));
        }
        assert_eq!(ALL_DIRECTIONS.len(), CARDINALS.len() + DIAGONALS.len());
    }
}
