//! Falling sand simulation engine.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod render;
pub mod universe;

use api::CellApi;
use cell::{Cell, Material};
use error::{SimError, SimResult};

pub use universe::Universe;

/// Cell movement summary for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    /// Cells that swapped into a destination.
    pub moved: usize,
    /// Mobile cells that found nowhere to go.
    pub rested: usize,
}

/// 2D grid of cells, row-major with x as the fast axis. `y = 0` is the top
/// row and gravity points towards larger `y`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    tick: u32,
}

impl Grid {
    /// All-Air grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension exceeds `i32::MAX`; use `try_new` for
    /// sizes that come from outside the program.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            Self::addressable(width, height),
            "grid {width}x{height} exceeds the addressable range"
        );
        tracing::debug!(width, height, "allocating grid");
        Self {
            width,
            height,
            cells: vec![Cell::air(); width * height],
            tick: 0,
        }
    }

    /// All-Air grid, rejecting dimensions that cell coordinates cannot reach.
    pub fn try_new(width: usize, height: usize) -> SimResult<Self> {
        if !Self::addressable(width, height) {
            return Err(SimError::InvalidConfig(format!(
                "grid {width}x{height} exceeds the addressable range"
            )));
        }
        Ok(Self::new(width, height))
    }

    fn addressable(width: usize, height: usize) -> bool {
        width <= i32::MAX as usize && height <= i32::MAX as usize
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ticks run so far, wrapping at `u32::MAX`.
    #[must_use]
    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    /// Override the tick counter, e.g. to replay a state with a given parity.
    pub fn set_tick_count(&mut self, tick: u32) {
        self.tick = tick;
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write an unprocessed cell of `material`. Out-of-bounds writes are
    /// rejected and leave the grid untouched.
    pub fn set(&mut self, x: i32, y: i32, material: Material) -> SimResult<()> {
        let i = self.index(x, y).ok_or(SimError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[i] = Cell::new(material);
        Ok(())
    }

    pub fn reset_processed(&mut self) {
        for cell in &mut self.cells {
            cell.processed = false;
        }
    }

    /// Number of cells holding each material, indexed by discriminant.
    #[must_use]
    pub fn material_counts(&self) -> [usize; Material::COUNT] {
        let mut counts = [0usize; Material::COUNT];
        for cell in &self.cells {
            counts[cell.material as usize] += 1;
        }
        counts
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans bottom-to-top, alternating horizontal direction each tick: even
    /// ticks run left to right, odd ticks right to left. Reads and writes
    /// happen in place, so a cell sees moves made earlier in the same pass.
    /// Every cell is marked processed by the end of the pass.
    pub fn tick(&mut self) -> TickStats {
        self.tick = self.tick.wrapping_add(1);
        let tick = self.tick;
        let w = self.width as i32;
        let h = self.height as i32;
        let mut stats = TickStats::default();

        self.reset_processed();

        for y in (0..h).rev() {
            let x_range: Box<dyn Iterator<Item = i32>> = if tick % 2 == 0 {
                Box::new(0..w)
            } else {
                Box::new((0..w).rev())
            };
            for x in x_range {
                let src = y as usize * self.width + x as usize;
                let cell = self.cells[src];
                if cell.processed {
                    continue;
                }
                if !cell.material.is_mobile() {
                    self.cells[src].processed = true;
                    continue;
                }

                let api = CellApi::new(self, x, y, tick);
                let dst = elements::destination(cell.material, &api)
                    .and_then(|(to_x, to_y)| self.index(to_x, to_y));

                match dst {
                    Some(dst) => {
                        self.cells.swap(src, dst);
                        self.cells[dst].processed = true;
                        stats.moved += 1;
                    }
                    None => stats.rested += 1,
                }
                self.cells[src].processed = true;
            }
        }

        tracing::trace!(tick, moved = stats.moved, rested = stats.rested, "tick complete");
        stats
    }
}
