mod algorithm;
mod cell;
mod error;
mod grid;
mod patterns;
mod simulation;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use simulation::GridSimulation;
