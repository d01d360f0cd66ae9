//! Neighbourhood view handed to material rules during a tick.

use crate::cell::{Cell, Material};
use crate::Grid;

/// Absolute grid position `(x, y)`.
pub type Pos = (i32, i32);

/// The five neighbour positions a rule may consult. `None` where the
/// neighbour would fall outside the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Neighbors {
    pub below: Option<Pos>,
    pub left: Option<Pos>,
    pub right: Option<Pos>,
    pub below_left: Option<Pos>,
    pub below_right: Option<Pos>,
}

/// Read-only view of one cell and its surroundings.
/// Rules pick a destination; the tick loop performs the swap.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a Grid,
    pub x: i32,
    pub y: i32,
    pub tick: u32,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a Grid, x: i32, y: i32, tick: u32) -> Self {
        Self { grid, x, y, tick }
    }

    /// Cell at a relative offset, `None` outside the grid.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Cell> {
        self.grid.get(self.x + dx, self.y + dy)
    }

    /// Material at an absolute position, `None` when the position is absent.
    #[must_use]
    pub fn material_at(&self, pos: Option<Pos>) -> Option<Material> {
        pos.and_then(|(x, y)| self.grid.get(x, y)).map(|cell| cell.material)
    }

    #[must_use]
    pub fn neighbors(&self) -> Neighbors {
        let offset = |dx: i32, dy: i32| {
            let (x, y) = (self.x + dx, self.y + dy);
            self.grid.in_bounds(x, y).then_some((x, y))
        };
        Neighbors {
            below: offset(0, 1),
            left: offset(-1, 0),
            right: offset(1, 0),
            below_left: offset(-1, 1),
            below_right: offset(1, 1),
        }
    }
}
