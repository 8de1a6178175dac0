// viewport.rs - Mapping between viewport pixels and grid cells

use crate::error::ViewportError;

/// Number of whole cells that fit in a `width x height` viewport.
pub fn grid_dimensions(
    width: f32,
    height: f32,
    resolution: f32,
) -> Result<(usize, usize), ViewportError> {
    let too_small = ViewportError::TooSmall { width, height, resolution };
    if !(resolution > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(too_small);
    }
    let cols = (width / resolution).floor();
    let rows = (height / resolution).floor();
    if cols < 1.0 || rows < 1.0 {
        return Err(too_small);
    }
    Ok((cols as usize, rows as usize))
}

/// Translates pointer positions into grid coordinates.
///
/// The drawing surface may be displayed at a different size than it is
/// rendered at, so positions are first scaled from display space into canvas
/// space and then divided by the cell resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Top-left corner of the surface in pointer coordinates.
    pub origin: (f32, f32),
    /// Size the surface is shown at.
    pub display_size: (f32, f32),
    /// Size the surface is rendered at.
    pub canvas_size: (f32, f32),
    pub resolution: f32,
}

impl PointerMapper {
    /// Mapper for a surface shown at its native size.
    pub fn unscaled(origin: (f32, f32), size: (f32, f32), resolution: f32) -> Self {
        Self {
            origin,
            display_size: size,
            canvas_size: size,
            resolution,
        }
    }

    /// Cell under `(x, y)`, clamped into a `cols x rows` grid.
    ///
    /// Returns `None` for pointers left of or above the surface. Pointers on
    /// the partial strip past the last whole cell land on the last cell.
    pub fn cell_at(&self, x: f32, y: f32, cols: usize, rows: usize) -> Option<(usize, usize)> {
        if cols == 0 || rows == 0 || self.resolution <= 0.0 {
            return None;
        }
        let scale_x = safe_ratio(self.canvas_size.0, self.display_size.0);
        let scale_y = safe_ratio(self.canvas_size.1, self.display_size.1);

        let canvas_x = (x - self.origin.0) * scale_x;
        let canvas_y = (y - self.origin.1) * scale_y;
        if !(canvas_x >= 0.0 && canvas_y >= 0.0) {
            return None;
        }

        let col = (canvas_x / self.resolution).floor() as usize;
        let row = (canvas_y / self.resolution).floor() as usize;
        Some((col.min(cols - 1), row.min(rows - 1)))
    }
}

fn safe_ratio(canvas: f32, display: f32) -> f32 {
    if display > 0.0 { canvas / display } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_floor_partial_cells() {
        assert_eq!(grid_dimensions(1255.0, 695.0, 10.0), Ok((125, 69)));
        assert_eq!(grid_dimensions(10.0, 10.0, 10.0), Ok((1, 1)));
    }

    #[test]
    fn tiny_viewports_are_rejected() {
        assert!(grid_dimensions(9.9, 100.0, 10.0).is_err());
        assert!(grid_dimensions(100.0, 100.0, 0.0).is_err());
        assert!(grid_dimensions(f32::NAN, 100.0, 10.0).is_err());
    }

    #[test]
    fn pointer_maps_through_display_scale() {
        // Canvas rendered at 400x200 but shown at 200x100, offset by (50, 20)
        let mapper = PointerMapper {
            origin: (50.0, 20.0),
            display_size: (200.0, 100.0),
            canvas_size: (400.0, 200.0),
            resolution: 10.0,
        };
        assert_eq!(mapper.cell_at(50.0, 20.0, 40, 20), Some((0, 0)));
        assert_eq!(mapper.cell_at(61.0, 27.0, 40, 20), Some((2, 1)));
    }

    #[test]
    fn pointer_outside_is_ignored_or_clamped() {
        let mapper = PointerMapper::unscaled((0.0, 0.0), (105.0, 55.0), 10.0);
        assert_eq!(mapper.cell_at(-1.0, 5.0, 10, 5), None);
        assert_eq!(mapper.cell_at(104.0, 54.0, 10, 5), Some((9, 4)));
        assert_eq!(mapper.cell_at(5.0, 5.0, 0, 5), None);
    }
}
