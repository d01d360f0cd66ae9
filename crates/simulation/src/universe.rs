//! Browser-facing host: owns the grid, the selected material and a frame
//! buffer the page reads straight out of wasm memory.

use wasm_bindgen::prelude::*;

use crate::brush::{apply_brush, DEFAULT_BRUSH_RADIUS};
use crate::cell::Material;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::render::{render_into, BYTES_PER_PIXEL};
use crate::Grid;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    selected: Material,
    brush_radius: u32,
    frame: Vec<u8>,
}

/// Report a defect to the log, then abort the host.
fn fatal(err: &SimError) -> ! {
    tracing::error!(%err, "internal invariant violated");
    panic!("{err}");
}

/// Brush and cell edits that miss the grid are dropped.
fn ignore_rejected(result: Result<(), SimError>) {
    if let Err(err) = result {
        if err.is_fatal() {
            fatal(&err);
        }
        tracing::debug!(%err, "edit ignored");
    }
}

#[wasm_bindgen]
impl Universe {
    /// Fails when a dimension is beyond what cell coordinates can address.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Universe, JsError> {
        let grid = Grid::try_new(width, height)?;
        Ok(Self::with_grid(grid, DEFAULT_BRUSH_RADIUS))
    }

    /// Size the grid from a raster resolution and cell pixel scale.
    pub fn from_raster(
        raster_width: usize,
        raster_height: usize,
        cell_scale: usize,
    ) -> Result<Universe, JsError> {
        let config = SimConfig {
            raster_width,
            raster_height,
            cell_scale,
            ..SimConfig::default()
        };
        let grid = config.build_grid()?;
        Ok(Self::with_grid(grid, config.brush_radius))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn tick_count(&self) -> u32 {
        self.grid.tick_count()
    }

    /// Write one cell from a raw material code.
    ///
    /// # Panics
    ///
    /// Panics if `material` is not a known material discriminant.
    pub fn set_cell(&mut self, x: i32, y: i32, material: u8) {
        let material = Material::try_from(material).unwrap_or_else(|err| fatal(&err));
        ignore_rejected(self.grid.set(x, y, material));
    }

    /// Paint the selected material with the current brush at `(x, y)`.
    pub fn paint(&mut self, x: i32, y: i32) {
        let painted = apply_brush(&mut self.grid, x, y, self.selected, self.brush_radius);
        ignore_rejected(painted.map(drop));
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        self.brush_radius = radius;
    }

    /// Cycle the selected material by `notches` scroll steps.
    pub fn scroll(&mut self, notches: i32) {
        self.selected = self.selected.cycle(notches);
    }

    #[must_use]
    pub fn selected_material(&self) -> u8 {
        self.selected as u8
    }

    /// Run one simulation tick and refresh the frame buffer.
    pub fn tick(&mut self) {
        self.grid.tick();
        self.redraw();
    }

    /// Pointer to the RGBA frame, `frame_len()` bytes long.
    #[must_use]
    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }
}

impl Universe {
    fn with_grid(grid: Grid, brush_radius: u32) -> Self {
        let frame = vec![0; grid.cells().len() * BYTES_PER_PIXEL];
        let mut universe = Self {
            grid,
            selected: Material::Sand,
            brush_radius,
            frame,
        };
        universe.redraw();
        universe
    }

    fn redraw(&mut self) {
        // The frame is sized from the grid at construction and never resized.
        if let Err(err) = render_into(&self.grid, &mut self.frame) {
            fatal(&err);
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    #[must_use]
    pub fn selected(&self) -> Material {
        self.selected
    }
}
