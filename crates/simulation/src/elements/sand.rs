//! Sand: falls straight down, then diagonally; sinks through liquids.

use crate::api::{CellApi, Pos};
use crate::cell::Material;

/// Below, then below-left, then below-right; the first Air or liquid wins.
#[must_use]
pub fn destination(api: &CellApi) -> Option<Pos> {
    let n = api.neighbors();
    [n.below, n.below_left, n.below_right]
        .into_iter()
        .find(|&pos| {
            api.material_at(pos)
                .is_some_and(|m| m == Material::Air || m.is_liquid())
        })
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn dest(grid: &Grid, x: i32, y: i32) -> Option<Pos> {
        destination(&CellApi::new(grid, x, y, 1))
    }

    #[test]
    fn falls_into_air_below() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 0, Material::Sand).unwrap();
        assert_eq!(dest(&grid, 1, 0), Some((1, 1)));
    }

    #[test]
    fn sinks_into_liquid_below() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 0, Material::Sand).unwrap();
        grid.set(1, 1, Material::Acid).unwrap();
        assert_eq!(dest(&grid, 1, 0), Some((1, 1)));
    }

    #[test]
    fn prefers_below_left_over_below_right() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Material::Sand).unwrap();
        grid.set(1, 2, Material::Wood).unwrap();
        assert_eq!(dest(&grid, 1, 1), Some((0, 2)));

        grid.set(0, 2, Material::Sand).unwrap();
        assert_eq!(dest(&grid, 1, 1), Some((2, 2)));

        grid.set(2, 2, Material::Water).unwrap();
        assert_eq!(dest(&grid, 1, 1), Some((2, 2)));
    }

    #[test]
    fn rests_on_solids_and_floor() {
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            grid.set(x, 2, Material::Wood).unwrap();
        }
        assert_eq!(dest(&grid, 1, 1), None);
        assert_eq!(dest(&grid, 0, 2), None);
    }
}
