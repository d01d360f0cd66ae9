//! Slide search: bounded lateral scan along a liquid surface.
//!
//! A liquid that cannot fall walks sideways through neighbouring liquid
//! looking for the first Air cell on its own level. Solids and the grid
//! edge end the walk. The walk is capped at `SLIDE_RANGE` steps, which
//! sets how fast a pool levels out.

use crate::cell::Material;
use crate::Grid;

/// Maximum horizontal steps a slide may take.
pub const SLIDE_RANGE: i32 = 8;

/// Walk from `x` in direction `dir` (`-1` or `1`) along level `y`.
/// Returns the x of the first reachable Air cell.
#[must_use]
pub fn slide(grid: &Grid, x: i32, y: i32, dir: i32) -> Option<i32> {
    debug_assert!(dir == 1 || dir == -1, "slide direction must be unit");
    for step in 1..=SLIDE_RANGE {
        let cx = x + dir * step;
        let cell = grid.get(cx, y)?;
        if !cell.material.is_liquid() {
            return (cell.material == Material::Air).then_some(cx);
        }
    }
    None
}
