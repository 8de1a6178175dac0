// simulation.rs - Frame-by-frame driver tying the grid to the stagnation monitor

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::LifeConfig;
use crate::error::{GridError, SimulationError};
use crate::grid::Grid;
use crate::stagnation::{Observation, StagnationMonitor};
use crate::viewport::grid_dimensions;

/// What happened during one [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Generation shown after the tick; 0 right after a restart.
    pub generation: u64,
    pub observation: Observation,
    pub restarted: bool,
}

/// Why the grid was thrown away and redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    Stagnation,
    Manual,
    Resize,
}

/// Game of Life state owned by a host loop.
///
/// The host calls [`tick`](Self::tick) once per frame, forwards pointer
/// presses to [`seed_at`](Self::seed_at) and viewport changes to
/// [`resize`](Self::resize).
pub struct Simulation<R = StdRng, C = SystemClock> {
    current_grid: Grid,
    next_grid: Grid, // scratch buffer swapped in each tick
    monitor: StagnationMonitor,
    config: LifeConfig,
    rng: R,
    clock: C,
    generation: u64,
    restarts: u64,
}

/// RNG from `seed`, or from the OS when none is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl Simulation {
    /// Simulation on the system clock, seeded from `config.rng_seed`.
    pub fn from_config(config: LifeConfig, cols: usize, rows: usize) -> Result<Self, SimulationError> {
        let rng = seeded_rng(config.rng_seed);
        Self::new(config, cols, rows, rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> Simulation<R, C> {
    pub fn new(
        config: LifeConfig,
        cols: usize,
        rows: usize,
        mut rng: R,
        clock: C,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let current_grid = Grid::random(cols, rows, config.seed_probability, &mut rng)?
            .with_row_edges(config.row_edges);
        let next_grid = current_grid.clone();
        let monitor = StagnationMonitor::from_config(&config, clock.now());

        info!(cols, rows, row_edges = ?config.row_edges, "simulation created");
        Ok(Self {
            current_grid,
            next_grid,
            monitor,
            config,
            rng,
            clock,
            generation: 0,
            restarts: 0,
        })
    }

    /// Sizes the grid to fit a viewport at the configured resolution.
    pub fn for_viewport(
        config: LifeConfig,
        width: f32,
        height: f32,
        rng: R,
        clock: C,
    ) -> Result<Self, SimulationError> {
        let (cols, rows) = grid_dimensions(width, height, config.resolution)?;
        Self::new(config, cols, rows, rng, clock)
    }

    /// Advances one generation and checks it for stagnation.
    pub fn tick(&mut self) -> TickReport {
        self.current_grid.step_into(&mut self.next_grid);
        std::mem::swap(&mut self.current_grid, &mut self.next_grid);
        self.generation += 1;

        let now = self.clock.now();
        let observation = self.monitor.observe(self.current_grid.snapshot(), now);
        let restarted = observation.should_restart();
        if restarted {
            self.reseed(ResetReason::Stagnation);
        }

        TickReport {
            generation: self.generation,
            observation,
            restarted,
        }
    }

    /// Splashes life around a cell using the configured brush.
    pub fn seed_at(&mut self, col: usize, row: usize) -> Result<(), GridError> {
        let brush = self.config.brush();
        self.current_grid.seed_around(col, row, brush, &mut self.rng)
    }

    /// Redraws the grid at random and clears history, as the restart button does.
    pub fn restart(&mut self) {
        self.reseed(ResetReason::Manual);
    }

    /// Reallocates the grid at new dimensions; history and cooldown start over.
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        let mut grid = Grid::new(cols, rows)?.with_row_edges(self.config.row_edges);
        grid.randomize(self.config.seed_probability, &mut self.rng);
        self.current_grid = grid;
        self.next_grid = self.current_grid.clone();
        self.monitor.reset(self.clock.now());
        self.generation = 0;
        info!(cols, rows, reason = ?ResetReason::Resize, "grid reset");
        Ok(())
    }

    /// Resizes to fit a viewport, leaving the grid untouched if the cell count is unchanged.
    ///
    /// Returns whether a reset happened.
    pub fn fit_viewport(&mut self, width: f32, height: f32) -> Result<bool, SimulationError> {
        let dims = grid_dimensions(width, height, self.config.resolution)?;
        if dims == self.current_grid.dimensions() {
            return Ok(false);
        }
        self.resize(dims.0, dims.1)?;
        Ok(true)
    }

    fn reseed(&mut self, reason: ResetReason) {
        self.current_grid
            .randomize(self.config.seed_probability, &mut self.rng);
        self.monitor.reset(self.clock.now());
        self.generation = 0;
        self.restarts += 1;
        info!(?reason, restarts = self.restarts, "grid reset");
    }

    pub fn grid(&self) -> &Grid {
        &self.current_grid
    }

    /// Mutable access for hosts that paint cells directly.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current_grid
    }

    pub fn monitor(&self) -> &StagnationMonitor {
        &self.monitor
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resets caused by stagnation or the restart trigger.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}
