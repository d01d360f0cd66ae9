//! Startup configuration: raster size and cell scale decide the grid size.

use crate::brush::DEFAULT_BRUSH_RADIUS;
use crate::error::{SimError, SimResult};
use crate::Grid;

pub const DEFAULT_RASTER_WIDTH: usize = 1664;
pub const DEFAULT_RASTER_HEIGHT: usize = 936;
pub const DEFAULT_CELL_SCALE: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimConfig {
    /// Output raster width in pixels.
    pub raster_width: usize,
    /// Output raster height in pixels.
    pub raster_height: usize,
    /// Pixels per cell along each axis.
    pub cell_scale: usize,
    pub brush_radius: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            raster_width: DEFAULT_RASTER_WIDTH,
            raster_height: DEFAULT_RASTER_HEIGHT,
            cell_scale: DEFAULT_CELL_SCALE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl SimConfig {
    /// Grid `(width, height)` in cells. A partial trailing cell is dropped.
    pub fn grid_size(&self) -> SimResult<(usize, usize)> {
        if self.cell_scale == 0 {
            return Err(SimError::InvalidConfig("cell scale must be positive".into()));
        }
        let width = self.raster_width / self.cell_scale;
        let height = self.raster_height / self.cell_scale;
        if width == 0 || height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "raster {}x{} is smaller than one {}px cell",
                self.raster_width, self.raster_height, self.cell_scale
            )));
        }
        Ok((width, height))
    }

    pub fn build_grid(&self) -> SimResult<Grid> {
        let (width, height) = self.grid_size()?;
        Grid::try_new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_416_by_234() {
        let config = SimConfig::default();
        assert_eq!(config.grid_size(), Ok((416, 234)));
        assert_eq!(config.brush_radius, 2);
        let grid = config.build_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (416, 234));
    }

    #[test]
    fn partial_cells_are_dropped() {
        let config = SimConfig {
            raster_width: 10,
            raster_height: 7,
            cell_scale: 3,
            ..SimConfig::default()
        };
        assert_eq!(config.grid_size(), Ok((3, 2)));
    }

    #[test]
    fn zero_scale_and_tiny_raster_are_rejected() {
        let zero = SimConfig { cell_scale: 0, ..SimConfig::default() };
        assert!(matches!(zero.grid_size(), Err(SimError::InvalidConfig(_))));

        let tiny = SimConfig {
            raster_width: 3,
            raster_height: 100,
            cell_scale: 4,
            ..SimConfig::default()
        };
        assert!(matches!(tiny.build_grid(), Err(SimError::InvalidConfig(_))));
    }
}
