// Domain layer - Core simulation logic, no windowing dependencies
pub mod domain;

// Startup settings for the front end
pub mod config;

// Application layer - Driving the simulation
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, GridSimulation, LifeError, Pattern, presets};
pub use application::Driver;
pub use config::SimulationConfig;
