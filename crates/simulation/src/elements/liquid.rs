//! Water and Acid: fall, slide diagonally, then spread along the surface.
//!
//! When a liquid cannot fall straight down it picks a side with
//! `prefers_left`, which depends on the cell position and the tick. The
//! preference flips between neighbouring cells and between ticks, so spread
//! has no fixed left or right bias. Diagonal moves only enter Air; liquids
//! never displace each other or solids.

use crate::api::{CellApi, Pos};
use crate::cell::Material;

use super::slide::slide;

/// Tie-break for lateral movement: true when `(x + y + tick)` is even.
#[must_use]
pub fn prefers_left(x: i32, y: i32, tick: u32) -> bool {
    (x as u32)
        .wrapping_add(y as u32)
        .wrapping_add(tick)
        .is_multiple_of(2)
}

#[must_use]
pub fn destination(api: &CellApi) -> Option<Pos> {
    let is_air = |pos: Option<Pos>| api.material_at(pos) == Some(Material::Air);
    let n = api.neighbors();

    if is_air(n.below) {
        return n.below;
    }

    let left = prefers_left(api.x, api.y, api.tick);
    let (first, second) = if left {
        (n.below_left, n.below_right)
    } else {
        (n.below_right, n.below_left)
    };
    if is_air(first) {
        return first;
    }
    if is_air(second) {
        return second;
    }

    let dir = if left { -1 } else { 1 };
    slide(api.grid, api.x, api.y, dir)
        .or_else(|| slide(api.grid, api.x, api.y, -dir))
        .map(|x| (x, api.y))
}
