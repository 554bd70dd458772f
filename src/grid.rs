use crate::error::{Error, Result};
use std::fmt;

/// A `(row, col)` coordinate.
/// Signed so that neighbours of edge cells can be represented before they are bounds-checked.
pub type Coord = (isize, isize);

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    Alive,
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    fn glyph(self) -> char {
        match self {
            CellState::Alive => '*',
            CellState::Dead => ' ',
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        match alive {
            true => CellState::Alive,
            false => CellState::Dead,
        }
    }
}

/// A fixed-size field of cells.
///
/// Dimensions never change after construction. Every generation of a simulation is a new `Grid`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Arguments
    /// * `height` - The number of rows.
    /// * `width` - The number of columns.
    pub fn new(height: usize, width: usize) -> Result<Grid> {
        // A Vec cannot hold more than isize::MAX bytes
        let size = height
            .checked_mul(width)
            .filter(|&size| size > 0 && size <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { height, width })?;

        Ok(Grid {
            width,
            height,
            cells: vec![false; size],
        })
    }

    /// Returns the grid with every coordinate in `pattern` set alive.
    ///
    /// All coordinates are checked before any cell changes, so an out of bounds
    /// coordinate fails the whole call.
    pub fn seed(mut self, pattern: &[Coord]) -> Result<Grid> {
        if let Some(&coord) = pattern.iter().find(|&&coord| !self.in_bounds(coord)) {
            return Err(Error::out_of_bounds(coord, self.height, self.width));
        }

        for &(row, col) in pattern {
            self.set(row as usize, col as usize, CellState::Alive);
        }

        Ok(self)
    }

    pub fn get(&self, coord: Coord) -> Result<CellState> {
        if !self.in_bounds(coord) {
            return Err(Error::out_of_bounds(coord, self.height, self.width));
        }

        Ok(self.cell(coord.0 as usize, coord.1 as usize))
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// The coordinates of all alive cells in row-major order.
    pub fn alive_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| ((index / self.width) as isize, (index % self.width) as isize))
            .collect()
    }

    /// An all-dead grid with the same dimensions.
    pub(crate) fn blank(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            cells: vec![false; self.width * self.height],
        }
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> CellState {
        CellState::from(self.cells[row * self.width + col])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: CellState) {
        self.cells[row * self.width + col] = value.is_alive();
    }
}

impl fmt::Display for Grid {
    /// One line per row, columns separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line = (0..self.width)
                .map(|col| self.cell(row, col).glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
