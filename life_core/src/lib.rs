//! Conway's Game of Life engine with stagnation-triggered restarts.
//!
//! [`Grid`] holds the cells and applies the B3/S23 rule with wrapped columns.
//! [`StagnationMonitor`] remembers recent generations and decides when a
//! repeating world should be reseeded. [`Simulation`] owns both plus the RNG
//! and clock, and is what a host loop drives once per frame.
//!
//! ```
//! use life_core::{LifeConfig, ManualClock, Simulation};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let clock = ManualClock::default();
//! let mut sim = Simulation::new(LifeConfig::default(), 40, 30, StdRng::seed_from_u64(7), &clock)?;
//! sim.seed_at(20, 15)?;
//! let report = sim.tick();
//! assert_eq!(report.generation, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod stagnation;
pub mod viewport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LifeConfig;
pub use error::{ConfigError, GridError, SimulationError, ViewportError};
pub use grid::{Brush, Grid, RowEdges};
pub use render::{CellPainter, TextCanvas, render};
pub use simulation::{ResetReason, Simulation, TickReport, seeded_rng};
pub use stagnation::{Observation, StagnationMonitor, StateSnapshot};
pub use viewport::{PointerMapper, grid_dimensions};
