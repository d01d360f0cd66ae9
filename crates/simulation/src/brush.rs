//! Square brush: paints a material into a window around a pointer cell.

use crate::cell::Material;
use crate::error::{SimError, SimResult};
use crate::Grid;

/// Half-width of the default brush (a 5×5 window).
pub const DEFAULT_BRUSH_RADIUS: u32 = 2;

/// Write `material` into every in-bounds cell of the `(2r+1)²` window
/// centred at `(cx, cy)`. Parts of the window outside the grid are skipped.
///
/// Returns the number of cells written. A centre outside the grid rejects
/// the whole edit with `SimError::OutOfBounds`.
pub fn apply_brush(
    grid: &mut Grid,
    cx: i32,
    cy: i32,
    material: Material,
    radius: u32,
) -> SimResult<usize> {
    if !grid.in_bounds(cx, cy) {
        return Err(SimError::OutOfBounds {
            x: cx,
            y: cy,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let r = radius.min(i32::MAX as u32 / 2) as i32;
    let x_lo = cx.saturating_sub(r).max(0);
    let y_lo = cy.saturating_sub(r).max(0);
    let x_hi = cx.saturating_add(r).min(grid.width() as i32 - 1);
    let y_hi = cy.saturating_add(r).min(grid.height() as i32 - 1);

    let mut written = 0;
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            grid.set(x, y, material)?;
            written += 1;
        }
    }
    Ok(written)
}
