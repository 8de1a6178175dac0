//! Error types for life_core.

use thiserror::Error;

/// Errors raised by grid construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    #[error("grid dimensions must be non-zero, got {cols}x{rows}")]
    EmptyDimensions {
        /// Requested column count.
        cols: usize,
        /// Requested row count.
        rows: usize,
    },

    /// The cell count does not fit in memory addressing.
    #[error("grid dimensions {cols}x{rows} are too large")]
    TooLarge { cols: usize, rows: usize },

    /// A cell coordinate lies outside the grid.
    #[error("cell ({col}, {row}) is outside a {cols}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },

    /// Raw cell data does not match the requested dimensions.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// Errors raised while loading or validating a [`LifeConfig`](crate::LifeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell resolution must be a positive finite number, got {0}")]
    ZeroResolution(f32),

    #[error("history size must be at least 1")]
    ZeroHistory,

    #[error("restart cooldown must be a non-negative finite number of seconds, got {0}")]
    InvalidCooldown(f64),

    #[error("seed probability must be between 0.0 and 1.0, got {0}")]
    InvalidSeedProbability(f64),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when deriving grid dimensions from a viewport.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// The viewport cannot fit a single cell on one of its axes.
    #[error("viewport {width}x{height} is too small for cell resolution {resolution}")]
    TooSmall {
        width: f32,
        height: f32,
        resolution: f32,
    },
}

/// Errors raised while building a [`Simulation`](crate::Simulation).
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
