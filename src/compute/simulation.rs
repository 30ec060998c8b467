//! Simulation driver - owns the current grid, run state and tick pace.
//!
//! A presentation layer keeps one `Simulation`, calls `tick` on its timer
//! every `delay()` and reads `grid()` to redraw. Edits go through the same
//! object between ticks.

use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::schema::{ConfigError, LifeConfig, Seed};

use super::{Grid, GridError, LifeEngine};

/// Errors raised by the simulation driver.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid grid operation: {0}")]
    Grid(#[from] GridError),
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Fresh or reset, never started since.
    Ready,
    /// Ticks advance the grid.
    Running,
    /// Stopped after running; ticks are ignored.
    OnHold,
}

/// Game of Life driver.
pub struct Simulation {
    config: LifeConfig,
    engine: LifeEngine,
    grid: Grid,
    generation: u64,
    delay_ms: u64,
    state: RunState,
}

impl Simulation {
    /// Create a simulation with an empty grid.
    pub fn new(config: LifeConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        log::info!("Created {}x{} simulation", config.rows, config.cols);

        Ok(Self {
            delay_ms: config.pace.initial_ms,
            config,
            engine: LifeEngine::new(),
            grid,
            generation: 0,
            state: RunState::Ready,
        })
    }

    /// Create a simulation whose grid is initialized from `seed`.
    pub fn from_seed(config: LifeConfig, seed: &Seed) -> Result<Self, SimulationError> {
        let mut simulation = Self::new(config)?;
        seed.apply(&mut simulation.grid)?;
        Ok(simulation)
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get configuration reference.
    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Generations computed since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) {
        if !self.is_running() {
            log::debug!("Started at generation {}", self.generation);
            self.state = RunState::Running;
        }
    }

    /// Put a running simulation on hold. No effect otherwise.
    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("Stopped at generation {}", self.generation);
            self.state = RunState::OnHold;
        }
    }

    /// Advance one generation if running. Returns whether the grid changed
    /// generation.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step_once();
        true
    }

    /// Advance one generation regardless of run state.
    pub fn step_once(&mut self) {
        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
        log::trace!(
            "Generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Run the given number of generations.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step_once();
        }
    }

    /// Kill every cell, zero the generation counter and stop.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.state = RunState::Ready;
        log::debug!("Grid reset");
    }

    /// Refill the grid at the configured density.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SimulationError> {
        self.grid.fill_random(self.config.density, rng)?;
        log::debug!(
            "Randomized grid at density {}: population {}",
            self.config.density,
            self.grid.population()
        );
        Ok(())
    }

    /// Refill the grid at the configured density using entropy.
    pub fn randomize_from_entropy(&mut self) -> Result<(), SimulationError> {
        self.randomize(&mut StdRng::from_entropy())
    }

    /// Reset, then tile gliders at the configured spacing.
    pub fn seed_gliders(&mut self) {
        self.reset();
        self.engine.seed_gliders_with_spacing(&mut self.grid, self.config.glider_spacing);
    }

    /// Flip a single cell.
    pub fn toggle(&mut self, r: i64, c: i64) {
        self.grid.toggle(r, c);
    }

    /// Replace the configuration. The grid is rebuilt empty with the new
    /// dimensions. On error nothing changes.
    pub fn reconfigure(&mut self, config: LifeConfig) -> Result<(), SimulationError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        log::info!(
            "Reconfigured {}x{} -> {}x{}",
            self.config.rows,
            self.config.cols,
            config.rows,
            config.cols
        );

        self.grid = grid;
        self.delay_ms = config.pace.initial_ms;
        self.config = config;
        self.generation = 0;
        self.state = RunState::Ready;
        Ok(())
    }

    /// Interval between ticks.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Shorten the tick interval by one step, down to the minimum.
    pub fn faster(&mut self) {
        let pace = &self.config.pace;
        self.delay_ms = self.delay_ms.saturating_sub(pace.step_ms).max(pace.min_ms);
        log::debug!("Delay now {}ms", self.delay_ms);
    }

    /// Lengthen the tick interval by one step, up to the maximum.
    pub fn slower(&mut self) {
        let pace = &self.config.pace;
        self.delay_ms = self.delay_ms.saturating_add(pace.step_ms).min(pace.max_ms);
        log::debug!("Delay now {}ms", self.delay_ms);
    }

    pub fn reset_pace(&mut self) {
        self.delay_ms = self.config.pace.initial_ms;
    }

    pub fn can_go_faster(&self) -> bool {
        self.delay_ms > self.config.pace.min_ms
    }

    pub fn can_go_slower(&self) -> bool {
        self.delay_ms < self.config.pace.max_ms
    }

    /// Short status such as "[12] RUNNING".
    pub fn status_line(&self) -> String {
        match self.state {
            RunState::Ready => "READY".to_string(),
            RunState::Running => format!("[{}] RUNNING", self.generation),
            RunState::OnHold => format!("[{}] ON HOLD", self.generation),
        }
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_simulation(self)
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub population: usize,
    pub rows: usize,
    pub cols: usize,
    pub state: RunState,
}

impl SimulationStats {
    pub fn from_simulation(simulation: &Simulation) -> Self {
        let (rows, cols) = simulation.grid.dimensions();
        Self {
            generation: simulation.generation,
            population: simulation.grid.population(),
            rows,
            cols,
            state: simulation.state,
        }
    }

    /// Fraction of cells alive.
    pub fn density(&self) -> f64 {
        self.population as f64 / (self.rows * self.cols) as f64
    }
}
