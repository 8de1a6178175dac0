// grid.rs - Cell grid for Conway's Game of Life

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GridError;
use crate::stagnation::StateSnapshot;

/// How neighbor lookups treat the top and bottom edges.
///
/// Columns always wrap around. `Clip` treats rows above the first and below
/// the last as dead, which is how the browser version of this simulation
/// behaves. `Wrap` closes the vertical seam too, giving a true torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowEdges {
    #[default]
    Clip,
    Wrap,
}

/// Shape of the random splash painted by [`Grid::seed_around`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Half-width of the square block; 2 gives a 5x5 splash.
    pub radius: usize,
    /// Chance that each non-center cell is switched on.
    pub probability: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self { radius: 2, probability: 0.5 }
    }
}

/// Dense `cols x rows` grid of binary cells, stored column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>, // index = col * rows + row
    row_edges: RowEdges,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        let len = cell_count(cols, rows)?;
        Ok(Self {
            cols,
            rows,
            cells: vec![false; len],
            row_edges: RowEdges::default(),
        })
    }

    /// Creates a grid where each cell is independently alive with `probability`.
    ///
    /// Cells are drawn column by column, top to bottom.
    pub fn random<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(cols, rows)?;
        grid.randomize(probability, rng);
        Ok(grid)
    }

    /// Redraws every cell in place, keeping the shape and edge policy.
    pub fn randomize<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.random::<f64>() < probability;
        }
    }

    /// Builds a grid from column-major cell data.
    pub fn from_cells(cols: usize, rows: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = cell_count(cols, rows)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cols,
            rows,
            cells,
            row_edges: RowEdges::default(),
        })
    }

    /// Builds a dead grid and switches on the listed `(col, row)` cells.
    pub fn from_alive(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(cols, rows)?;
        for &(col, row) in alive {
            grid.set(col, row, true)?;
        }
        Ok(grid)
    }

    pub fn with_row_edges(mut self, row_edges: RowEdges) -> Self {
        self.row_edges = row_edges;
        self
    }

    pub fn row_edges(&self) -> RowEdges {
        self.row_edges
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns `(cols, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Cell state, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        (col < self.cols && row < self.rows).then(|| self.cells[self.index(col, row)])
    }

    /// Cell state, with anything outside the grid reading as dead.
    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.get(col, row).unwrap_or(false)
    }

    pub fn set(&mut self, col: usize, row: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(col, row)?;
        let idx = self.index(col, row);
        self.cells[idx] = alive;
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates `(col, row)` of every live cell in column-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / rows, idx % rows))
    }

    /// Captures the full cell state for repeat detection.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.cols, self.rows, &self.cells)
    }

    /// Counts live cells among the eight neighbors of `(col, row)`.
    ///
    /// On grids one or two columns wide the wrapped left and right neighbor
    /// land on the same column and are counted once per direction.
    pub fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        let left = (col + self.cols - 1) % self.cols;
        let right = (col + 1) % self.cols;
        let mut count = 0;

        for delta in [-1, 0, 1] {
            let Some(r) = self.offset_row(row, delta) else {
                continue; // clipped edge reads as dead
            };
            if self.cells[self.index(left, r)] {
                count += 1;
            }
            if delta != 0 && self.cells[self.index(col, r)] {
                count += 1;
            }
            if self.cells[self.index(right, r)] {
                count += 1;
            }
        }
        count
    }

    /// Computes the next generation into a fresh grid.
    pub fn step(&self) -> Grid {
        let mut next = self.clone();
        self.step_into(&mut next);
        next
    }

    /// Computes the next generation into `next`, reshaping it if needed.
    ///
    /// Every cell is evaluated against `self` only, so `next` never feeds back
    /// into the generation being computed.
    pub fn step_into(&self, next: &mut Grid) {
        next.cols = self.cols;
        next.rows = self.rows;
        next.row_edges = self.row_edges;
        next.cells.resize(self.cells.len(), false);

        for col in 0..self.cols {
            for row in 0..self.rows {
                let current_alive = self.cells[self.index(col, row)];
                let count = self.live_neighbors(col, row);

                let next_state = match (current_alive, count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };

                let idx = self.index(col, row);
                next.cells[idx] = next_state;
            }
        }
    }

    /// Splashes life around `(col, row)`.
    ///
    /// The center is always switched on. Every other cell in the
    /// `(2 * radius + 1)` square, wrapped on both axes, is switched on with the
    /// brush probability and otherwise left as it was.
    pub fn seed_around<R: Rng + ?Sized>(
        &mut self,
        col: usize,
        row: usize,
        brush: Brush,
        rng: &mut R,
    ) -> Result<(), GridError> {
        self.check_bounds(col, row)?;
        let radius = brush.radius as isize;
        let cols = self.cols as isize;
        let rows = self.rows as isize;
        let mut planted = 0usize;

        for dc in -radius..=radius {
            for dr in -radius..=radius {
                if dc == 0 && dr == 0 {
                    let idx = self.index(col, row);
                    self.cells[idx] = true;
                    planted += 1;
                } else if rng.random::<f64>() < brush.probability {
                    let c = (col as isize + dc).rem_euclid(cols) as usize;
                    let r = (row as isize + dr).rem_euclid(rows) as usize;
                    let idx = self.index(c, r);
                    self.cells[idx] = true;
                    planted += 1;
                }
            }
        }

        debug!(col, row, radius = brush.radius, planted, "seeded cells");
        Ok(())
    }

    fn offset_row(&self, row: usize, delta: isize) -> Option<usize> {
        let shifted = row as isize + delta;
        match self.row_edges {
            RowEdges::Clip => (0..self.rows as isize)
                .contains(&shifted)
                .then_some(shifted as usize),
            RowEdges::Wrap => Some(shifted.rem_euclid(self.rows as isize) as usize),
        }
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), GridError> {
        if col < self.cols && row < self.rows {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    const fn index(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }
}

/// Validates a shape and returns its cell count.
fn cell_count(cols: usize, rows: usize) -> Result<usize, GridError> {
    if cols == 0 || rows == 0 {
        return Err(GridError::EmptyDimensions { cols, rows });
    }
    cols.checked_mul(rows)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(GridError::TooLarge { cols, rows })
}
