use crate::config::SimulationConfig;
use crate::domain::{GridSimulation, Pattern, Result, presets};
use crate::input::pixel_to_cell;
use log::{debug, info};

/// Driver orchestrates the simulation for the windowed front end.
/// It decides when `advance` is called (single step or auto-advance at a
/// fixed rate) and what to do with clicks that miss the grid.
pub struct Driver {
    pub simulation: GridSimulation,
    pub auto_advance: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_advance_time_ms: f32,  // Advance performance metric
    /// Presets available for stamping
    pub patterns: Vec<Pattern>,
    /// Index into `patterns` of the one `stamp_selected` places
    pub selected_pattern: usize,
}

impl Driver {
    /// Create a driver and its simulation from startup settings
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let simulation = GridSimulation::new(config.height, config.width, config.randomize)?;
        Ok(Self::from_simulation(simulation, config.updates_per_second))
    }

    /// Drive an already constructed simulation
    pub fn from_simulation(simulation: GridSimulation, updates_per_second: f32) -> Self {
        Self {
            simulation,
            auto_advance: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second,
            last_advance_time_ms: 0.0,
            patterns: presets::all_patterns(),
            selected_pattern: 0,
        }
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.simulation.advance();
        self.last_advance_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Toggle continuous auto-advance
    pub fn toggle_auto(mut self) -> Self {
        self.auto_advance = !self.auto_advance;
        self.update_timer = 0.0;
        info!("auto-advance {}", if self.auto_advance { "on" } else { "off" });
        self
    }

    /// Switch between serial and parallel evolution
    pub fn cycle_algorithm(mut self) -> Self {
        let next = self.simulation.algorithm().cycle();
        self.simulation.set_algorithm(next);
        info!("algorithm {}", next.name());
        self
    }

    /// Kill every cell and reset generation counter
    pub fn clear(mut self) -> Self {
        self.simulation.clear();
        self.generation = 0;
        self.auto_advance = false;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.simulation.randomize(&mut rand::rng());
        self.generation = 0;
        self.auto_advance = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame.
    /// In auto mode at most one generation is advanced per call, once
    /// `1 / updates_per_second` seconds have accumulated.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.auto_advance {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step();
            self.update_timer = 0.0;
        }

        self
    }

    /// Toggle the cell under a pixel. Returns false when the pixel maps
    /// outside the grid, in which case the click is ignored.
    pub fn click(&mut self, pixel: (f32, f32), display: (f32, f32)) -> bool {
        let (row, col) = pixel_to_cell(pixel, display, self.simulation.dimensions());
        match self.simulation.toggle_cell(row, col) {
            Ok(()) => true,
            Err(err) => {
                debug!("ignoring click: {err}");
                false
            }
        }
    }

    /// Choose which preset `stamp_selected` places; unknown indices are ignored
    pub fn select_pattern(mut self, index: usize) -> Self {
        if let Some(pattern) = self.patterns.get(index) {
            info!("pattern {} ({})", pattern.name, pattern.description);
            self.selected_pattern = index;
        }
        self
    }

    /// Currently selected preset
    pub fn selected(&self) -> &Pattern {
        &self.patterns[self.selected_pattern]
    }

    /// Stamp the selected preset centered on the cell under a pixel
    pub fn stamp_selected(&mut self, pixel: (f32, f32), display: (f32, f32)) -> bool {
        let pattern = self.selected().clone();
        self.stamp(&pattern, pixel, display)
    }

    /// Stamp a pattern centered on the cell under a pixel. The cursor cell
    /// must be on the grid; the pattern itself wraps past the edges.
    pub fn stamp(&mut self, pattern: &Pattern, pixel: (f32, f32), display: (f32, f32)) -> bool {
        let (row, col) = pixel_to_cell(pixel, display, self.simulation.dimensions());
        if let Err(err) = self.simulation.cell_state(row, col) {
            debug!("ignoring {} placement: {err}", pattern.name);
            return false;
        }

        let (height, width) = self.simulation.dimensions();
        let anchor_row = (row - (pattern.height / 2) as isize).rem_euclid(height as isize);
        let anchor_col = (col - (pattern.width / 2) as isize).rem_euclid(width as isize);
        self.simulation.place(pattern, anchor_row, anchor_col).is_ok()
    }
}
