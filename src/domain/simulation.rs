//! The simulation core: one owned grid, replaced wholesale on every advance.

use super::{Algorithm, Cell, Grid, Pattern, Result};
use log::{debug, trace};
use rand::Rng;

/// GridSimulation owns the current generation of a toroidal Life grid.
///
/// Callers read through `cell_state`/`cells` and mutate only through
/// `toggle_cell` and `advance` (plus the `place`/`clear` conveniences).
/// Direct addressing is range-checked and never wraps; wraparound is used
/// only for neighbor lookups while computing the next generation.
#[derive(Clone, Debug)]
pub struct GridSimulation {
    grid: Grid,
    algorithm: Algorithm,
}

impl GridSimulation {
    /// Create a simulation, randomizing with the thread-local generator
    pub fn new(height: usize, width: usize, randomize: bool) -> Result<Self> {
        Self::with_rng(height, width, randomize, &mut rand::rng())
    }

    /// Create a simulation drawing initial cells from `rng`.
    /// With `randomize == false` every cell starts dead and `rng` is unused.
    pub fn with_rng<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let grid = if randomize {
            Grid::random(height, width, rng)?
        } else {
            Grid::new(height, width)?
        };
        debug!(
            "created {height}x{width} simulation ({}), population {}",
            if randomize { "random" } else { "empty" },
            grid.population()
        );
        Ok(Self::from_grid(grid))
    }

    /// Wrap an existing grid as the current generation
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            algorithm: Algorithm::default(),
        }
    }

    /// (height, width), fixed for the lifetime of the instance
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// State of the cell at (row, col)
    pub fn cell_state(&self, row: isize, col: isize) -> Result<Cell> {
        let (r, c) = self.grid.checked_position(row, col)?;
        Ok(self.grid.get(r, c).unwrap_or_default())
    }

    /// Flip one cell of the current generation. This edits the generation in
    /// place and is not an advance.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Result<()> {
        let (r, c) = self.grid.checked_position(row, col)?;
        self.grid.toggle(r, c);
        Ok(())
    }

    /// Alive cells among the eight toroidal neighbors of (row, col)
    pub fn live_neighbors(&self, row: isize, col: isize) -> Result<u8> {
        let (r, c) = self.grid.checked_position(row, col)?;
        Ok(self.grid.count_live_neighbors(r, c))
    }

    /// Compute the next generation from the current one and swap it in.
    /// The new grid is built in a separate buffer, so every neighbor count
    /// reads pre-advance values.
    pub fn advance(&mut self) {
        let next = match self.algorithm {
            Algorithm::Serial => self.grid.evolve(),
            Algorithm::Parallel => self.grid.evolve_parallel(),
        };
        self.grid = next;
        trace!("advanced ({}), population {}", self.algorithm.name(), self.grid.population());
    }

    /// Number of alive cells in the current generation
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// All cells as (row, col, state), row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid.iter_cells()
    }

    /// Stamp `pattern` alive with its top-left offset at (row, col).
    /// The anchor must be in range; cells past the edges wrap around.
    pub fn place(&mut self, pattern: &Pattern, row: isize, col: isize) -> Result<()> {
        let (r, c) = self.grid.checked_position(row, col)?;
        let (height, width) = self.dimensions();
        for &(dr, dc) in &pattern.cells {
            self.grid.set((r + dr) % height, (c + dc) % width, Cell::Alive);
        }
        debug!("placed {} at ({r}, {c})", pattern.name);
        Ok(())
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Replace the current generation with a fresh random fill
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(rng);
        debug!("randomized, population {}", self.grid.population());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeError, presets};
    use rand::{SeedableRng, rngs::StdRng};

    fn empty(height: usize, width: usize) -> GridSimulation {
        GridSimulation::new(height, width, false).unwrap()
    }

    fn with_alive(height: usize, width: usize, alive: &[(isize, isize)]) -> GridSimulation {
        let mut sim = empty(height, width);
        for &(r, c) in alive {
            sim.toggle_cell(r, c).unwrap();
        }
        sim
    }

    fn alive_cells(sim: &GridSimulation) -> Vec<(usize, usize)> {
        sim.cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            GridSimulation::new(0, 5, false).unwrap_err(),
            LifeError::InvalidDimensions { height: 0, width: 5 }
        );
        assert_eq!(
            GridSimulation::new(5, 0, true).unwrap_err(),
            LifeError::InvalidDimensions { height: 5, width: 0 }
        );
    }

    #[test]
    fn test_dimensions_are_height_width() {
        let sim = empty(45, 80);
        assert_eq!(sim.dimensions(), (45, 80));
    }

    #[test]
    fn test_non_random_start_is_all_dead() {
        let sim = empty(20, 30);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_seeded_random_start_is_reproducible() {
        let a = GridSimulation::with_rng(30, 40, true, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = GridSimulation::with_rng(30, 40, true, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_random_start_is_roughly_half_alive() {
        let sim = GridSimulation::with_rng(100, 100, true, &mut StdRng::seed_from_u64(1)).unwrap();
        let population = sim.population();
        assert!((4000..6000).contains(&population), "population {population}");
    }

    #[test]
    fn test_out_of_range_access() {
        let mut sim = empty(3, 4);
        let expected = |row, col| LifeError::OutOfRange { row, col, height: 3, width: 4 };

        assert_eq!(sim.cell_state(3, 0), Err(expected(3, 0)));
        assert_eq!(sim.cell_state(0, 4), Err(expected(0, 4)));
        assert_eq!(sim.cell_state(-1, 0), Err(expected(-1, 0)));
        assert_eq!(sim.cell_state(0, -1), Err(expected(0, -1)));

        assert_eq!(sim.toggle_cell(3, 0), Err(expected(3, 0)));
        assert_eq!(sim.toggle_cell(0, 4), Err(expected(0, 4)));
        assert_eq!(sim.toggle_cell(-2, -2), Err(expected(-2, -2)));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut sim = empty(4, 4);
        sim.toggle_cell(1, 2).unwrap();
        assert_eq!(sim.cell_state(1, 2), Ok(Cell::Alive));
        assert_eq!(sim.population(), 1);
        sim.toggle_cell(1, 2).unwrap();
        assert_eq!(sim.cell_state(1, 2), Ok(Cell::Dead));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_neighbor_count_wraps_at_corners() {
        let sim = with_alive(3, 3, &[(0, 0)]);
        assert_eq!(sim.live_neighbors(2, 2), Ok(1));
        assert_eq!(sim.live_neighbors(2, 0), Ok(1));
        assert_eq!(sim.live_neighbors(0, 2), Ok(1));
        assert_eq!(sim.live_neighbors(1, 1), Ok(1));
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let mut sim = with_alive(6, 6, &[(1, 1), (1, 2), (1, 3)]);
        assert_eq!(sim.cell_state(2, 2), Ok(Cell::Dead));
        sim.advance();
        assert_eq!(sim.cell_state(2, 2), Ok(Cell::Alive));
    }

    #[test]
    fn test_survival_depends_on_neighbor_count() {
        let ring: [(isize, isize); 8] = [
            (1, 1), (1, 2), (1, 3),
            (2, 1),         (2, 3),
            (3, 1), (3, 2), (3, 3),
        ];
        for n in 0..=8 {
            let mut sim = with_alive(7, 7, &ring[..n]);
            sim.toggle_cell(2, 2).unwrap();
            assert_eq!(sim.live_neighbors(2, 2), Ok(n as u8));
            sim.advance();
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(sim.cell_state(2, 2), Ok(expected), "{n} neighbors");
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut sim = empty(4, 4);
        sim.place(&presets::block(), 1, 1).unwrap();
        let before = sim.grid().clone();
        sim.advance();
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.population(), 4);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(1, 2), (2, 2), (3, 2)]);

        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // horizontal blinker centered on column 0 spans the left/right edge
        let mut sim = with_alive(5, 5, &[(0, 4), (0, 0), (0, 1)]);
        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(0, 0), (1, 0), (4, 0)]);
    }

    #[test]
    fn test_glider_translates_across_torus() {
        let glider = presets::glider();
        let mut sim = empty(8, 8);
        sim.place(&glider, 6, 6).unwrap();

        for _ in 0..4 {
            sim.advance();
        }

        let mut expected = empty(8, 8);
        expected.place(&glider, 7, 7).unwrap();
        assert_eq!(sim.grid(), expected.grid());
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut a = GridSimulation::with_rng(25, 25, true, &mut StdRng::seed_from_u64(9)).unwrap();
        let mut b = a.clone();
        a.advance();
        b.advance();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_algorithms_agree() {
        let mut serial = GridSimulation::with_rng(40, 60, true, &mut StdRng::seed_from_u64(3)).unwrap();
        let mut parallel = serial.clone();
        parallel.set_algorithm(Algorithm::Parallel);
        assert_eq!(parallel.algorithm(), Algorithm::Parallel);

        for _ in 0..20 {
            serial.advance();
            parallel.advance();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn test_place_requires_in_range_anchor() {
        let mut sim = empty(5, 5);
        assert!(sim.place(&presets::block(), 5, 0).is_err());
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_clear() {
        let mut sim = GridSimulation::with_rng(10, 10, true, &mut StdRng::seed_from_u64(5)).unwrap();
        sim.clear();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.dimensions(), (10, 10));
    }

    #[test]
    fn test_randomize_keeps_dimensions() {
        let mut sim = empty(12, 9);
        sim.randomize(&mut StdRng::seed_from_u64(11));
        assert_eq!(sim.dimensions(), (12, 9));
        assert!(sim.population() > 0);
    }
}
