//! Compute module - Grid storage, transition rule and simulation driver.

mod engine;
mod grid;
mod simulation;

pub use engine::*;
pub use grid::*;
pub use simulation::*;
