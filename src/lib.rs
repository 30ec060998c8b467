//! Toroidal Life - Conway's Game of Life on a wrap-around grid.
//!
//! This crate provides the simulation core of a Game of Life: a toroidal
//! cell grid, the B3/S23 transition rule, pattern seeding and a small driver
//! that a presentation layer can tick from its own timer.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: Grid storage, the Life engine and the simulation driver
//!
//! # Example
//!
//! ```rust
//! use toroidal_life::{
//!     compute::{Grid, LifeEngine},
//!     schema::{LifeConfig, Pattern, Seed},
//!     Simulation,
//! };
//!
//! // Step a grid directly
//! let engine = LifeEngine::new();
//! let mut grid = Grid::new(20, 20).unwrap();
//! engine.stamp_glider(&mut grid, (0, 0));
//! let next = engine.step(&grid);
//! assert_eq!(next.population(), 5);
//!
//! // Or let a driver own the state
//! let seed = Seed {
//!     pattern: Pattern::Gliders { spacing: 10 },
//! };
//! let mut simulation = Simulation::from_seed(LifeConfig::default(), &seed).unwrap();
//! simulation.start();
//! simulation.tick();
//! assert_eq!(simulation.generation(), 1);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, GridError, LifeEngine, RunState, Simulation, SimulationStats};
pub use schema::{LifeConfig, Pattern, Seed};
