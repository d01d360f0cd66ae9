//! Per-material movement rules dispatched from the tick loop.

pub mod liquid;
mod sand;
pub mod slide;


use crate::api::{CellApi, Pos};
use crate::cell::Material;

/// Where the cell under `api` wants to move this tick, if anywhere.
///
/// Air and Wood are immobile and are skipped before calling this.
#[must_use]
pub fn destination(material: Material, api: &CellApi) -> Option<Pos> {
    match material {
        Material::Sand => sand::destination(api),
        Material::Water | Material::Acid => liquid::destination(api),
        Material::Air | Material::Wood => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cell::Material;
    use crate::Grid;
    use proptest::prelude::*;

    pub fn arb_material() -> impl Strategy<Value = Material> {
        prop_oneof![
            Just(Material::Air),
            Just(Material::Sand),
            Just(Material::Water),
            Just(Material::Wood),
            Just(Material::Acid),
        ]
    }

    /// Strategy: a `size`×`size` grid of arbitrary materials.
    pub fn arb_grid(size: usize) -> impl Strategy<Value = Grid> {
        proptest::collection::vec(arb_material(), size * size).prop_map(move |materials| {
            let mut grid = Grid::new(size, size);
            for (i, &material) in materials.iter().enumerate() {
                let (x, y) = ((i % size) as i32, (i / size) as i32);
                grid.set(x, y, material).unwrap();
            }
            grid
        })
    }

    /// Sum of the vertical levels of every sand cell.
    pub fn sand_depth(grid: &Grid) -> i64 {
        grid.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.material == Material::Sand)
            .map(|(i, _)| (i / grid.width()) as i64)
            .sum()
    }
}
