// render.rs - Painting cell states onto a surface

use std::fmt;

use crate::grid::Grid;

/// A surface that can show one cell at a time.
pub trait CellPainter {
    fn paint(&mut self, col: usize, row: usize, alive: bool);
}

/// Paints every cell of `grid`, column by column.
pub fn render<P: CellPainter + ?Sized>(grid: &Grid, painter: &mut P) {
    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            painter.paint(col, row, grid.is_alive(col, row));
        }
    }
}

/// Character surface, one glyph per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    glyphs: Vec<char>, // row-major for printing
    live: char,
    dead: char,
}

impl TextCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_glyphs(cols, rows, '#', '.')
    }

    pub fn with_glyphs(cols: usize, rows: usize, live: char, dead: char) -> Self {
        Self {
            cols,
            rows,
            glyphs: vec![dead; cols * rows],
            live,
            dead,
        }
    }

    /// Canvas sized to `grid` with the grid already painted.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut canvas = Self::new(grid.cols(), grid.rows());
        render(grid, &mut canvas);
        canvas
    }
}

impl CellPainter for TextCanvas {
    fn paint(&mut self, col: usize, row: usize, alive: bool) {
        if col < self.cols && row < self.rows {
            self.glyphs[row * self.cols + col] = if alive { self.live } else { self.dead };
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.glyphs.chunks(self.cols.max(1)) {
            let text: String = line.iter().collect();
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}
