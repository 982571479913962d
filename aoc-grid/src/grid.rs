//! Rectangular 2-D grids addressed by [`Point`]

use crate::error::GridError;
use crate::point::Point;

/// Immutable-by-convention rectangular grid stored row-major
///
/// Width and height are always non-zero. Points outside `[0, width) x [0, height)`
/// have no cell; [`Grid::get`] returns `None` for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Occupancy grid: `true` marks a wall
pub type WallGrid = Grid<bool>;

impl<T> Grid<T> {
    /// Build a grid from row-major cells
    ///
    /// # Returns
    /// * `Err(GridError::Empty)` - width or height is zero
    /// * `Err(GridError::CellCount)` - `cells.len() != width * height`
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        Self::new(width, height, vec![value; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `point` addresses a cell of this grid
    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.index(point).map(|i| &self.cells[i])
    }

    /// Overwrite one cell
    pub fn set(&mut self, point: Point, value: T) -> Result<(), GridError> {
        let index = self.index(point).ok_or(GridError::OutOfBounds(point))?;
        self.cells[index] = value;
        Ok(())
    }

    /// All points of the grid in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Point::new((i % width) as i32, (i / width) as i32))
    }

    /// First point (row-major) whose cell satisfies `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.points().zip(&self.cells).find(|&(_, cell)| predicate(cell)).map(|(p, _)| p)
    }

    /// Map every cell into a new grid of the same shape
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<u8> {
    /// Parse rectangular text into a byte grid
    ///
    /// Leading blank lines are skipped and the grid ends at the first blank line
    /// after it, so a grid followed by another input section parses cleanly.
    /// Trailing `\r` is ignored.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows: Vec<&[u8]> = input
            .lines()
            .map(|line| line.trim_end_matches('\r').as_bytes())
            .skip_while(|row| row.is_empty())
            .take_while(|row| !row.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, bytes) in rows.iter().enumerate() {
            if bytes.len() != width {
                return Err(GridError::Ragged {
                    row: row + 1,
                    expected: width,
                    found: bytes.len(),
                });
            }
            cells.extend_from_slice(bytes);
        }

        Grid::new(width, rows.len(), cells)
    }
}

impl Grid<bool> {
    /// Whether `point` is blocked; anything outside the grid counts as a wall
    pub fn is_wall(&self, point: Point) -> bool {
        self.get(point).copied().unwrap_or(true)
    }

    /// Open grid of the given size with `walls` blocked
    pub fn from_points<I>(width: usize, height: usize, walls: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = Grid::filled(width, height, false)?;
        for wall in walls {
            grid.set(wall, true)?;
        }
        Ok(grid)
    }

    /// Parse `#`-walled text; every other character is open floor
    pub fn parse_walls(input: &str) -> Result<Self, GridError> {
        Ok(Grid::parse(input)?.map(|&cell| cell == b'#'))
    }
}
