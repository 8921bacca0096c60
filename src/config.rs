use macroquad::prelude::Conf;

/// Startup settings for the windowed driver.
/// The simulation core takes none of these; they only shape the front end.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid rows
    pub height: usize,
    /// Grid columns
    pub width: usize,
    /// Seed the first generation randomly instead of all dead
    pub randomize: bool,
    /// Window size in pixels (width, height)
    pub resolution: (i32, i32),
    /// Generations per second while auto-advancing
    pub updates_per_second: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: 45,
            width: 80,
            randomize: true,
            resolution: (1280, 720),
            updates_per_second: 10.0,
        }
    }
}

impl SimulationConfig {
    /// Window configuration for macroquad
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Conway's Game of Life".to_owned(),
            window_width: self.resolution.0,
            window_height: self.resolution.1,
            window_resizable: true,
            ..Default::default()
        }
    }
}
