use super::{Cell, LifeError, Result};
use rand::Rng;
use rayon::prelude::*;

/// Offsets of the eight Moore neighbors as (d_row, d_col)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is a fixed-size, row-major buffer of cells on a torus.
/// Evolution is functional: `evolve` reads `self` and returns a fresh grid,
/// so no cell ever sees a neighbor's next-generation value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let invalid = LifeError::InvalidDimensions { height, width };
        let len = height
            .checked_mul(width)
            .filter(|&len| len > 0)
            .ok_or(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Dead);
        Ok(Self { height, width, cells })
    }

    /// Create a grid where every cell is independently alive with probability 1/2
    pub fn random<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Self::new(height, width)?;
        grid.randomize(rng);
        Ok(grid)
    }

    /// Re-draw every cell independently, alive with probability 1/2
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Get grid dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Validate a caller-supplied coordinate. Negative or too-large values
    /// are rejected, never wrapped.
    pub fn checked_position(&self, row: isize, col: isize) -> Result<(usize, usize)> {
        let in_range = |v: isize, len: usize| usize::try_from(v).ok().filter(|&v| v < len);
        match (in_range(row, self.height), in_range(col, self.width)) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(LifeError::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            }),
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip a single cell in place
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.get(row, col) {
            self.set(row, col, cell.toggle());
        }
    }

    /// Step `base` by `delta` around a ring of length `len`
    fn wrap(base: usize, delta: isize, len: usize) -> usize {
        // delta is in -1..=1 so one extra `len` keeps the sum non-negative
        (base + len).wrapping_add_signed(delta) % len
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// On a 1-wide or 1-high grid a cell can be its own neighbor.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let r = Self::wrap(row, dr, self.height);
                let c = Self::wrap(col, dc, self.width);
                self.cells[self.get_index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (row, col) = (idx / self.width, idx % self.width);
        self.cells[idx].evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Parallel evolution using rayon; same result as `evolve`
    pub fn evolve_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}
