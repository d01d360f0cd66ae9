//! Scripted brush strokes standing in for pointer input.

use clap::ValueEnum;
use sandfall::cell::Material;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Scene {
    /// Sand poured from one spout onto a wooden floor.
    Pile,
    /// Water held back by a wooden wall, then sand dumped into the pool.
    Dam,
    /// Water and acid drops raining across the whole width.
    Rain,
}

/// One brush application queued for the next frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stroke {
    pub x: i32,
    pub y: i32,
    pub material: Material,
    pub radius: u32,
}

impl Stroke {
    fn new(x: i32, y: i32, material: Material, radius: u32) -> Self {
        Self { x, y, material, radius }
    }
}

/// Strokes written along the bottom row to make a floor.
fn floor(width: i32, height: i32) -> impl Iterator<Item = Stroke> {
    (0..width).map(move |x| Stroke::new(x, height - 1, Material::Wood, 0))
}

impl Scene {
    /// Edits to apply before frame `frame` of a run lasting `frames` frames.
    pub fn strokes(
        self,
        frame: u32,
        frames: u32,
        width: i32,
        height: i32,
        radius: u32,
    ) -> Vec<Stroke> {
        let pour_until = frames / 2;
        let mut strokes = Vec::new();
        match self {
            Self::Pile => {
                if frame == 0 {
                    strokes.extend(floor(width, height));
                }
                if frame < pour_until {
                    strokes.push(Stroke::new(width / 2, radius as i32, Material::Sand, radius));
                }
            }
            Self::Dam => {
                if frame == 0 {
                    strokes.extend(floor(width, height));
                    let wall = width / 3;
                    strokes.extend(
                        (height / 3..height - 1).map(|y| Stroke::new(wall, y, Material::Wood, 0)),
                    );
                    for y in height / 2..height - 1 {
                        for x in 0..wall {
                            strokes.push(Stroke::new(x, y, Material::Water, 0));
                        }
                    }
                }
                if (pour_until / 2..pour_until).contains(&frame) {
                    strokes.push(Stroke::new(width / 6, radius as i32, Material::Sand, radius));
                }
            }
            Self::Rain => {
                if frame == 0 {
                    strokes.extend(floor(width, height));
                }
                if frame < pour_until && width > 0 {
                    // Spread drops across the width with a fixed stride.
                    let x = (i64::from(frame) * 37 % i64::from(width)) as i32;
                    let material = if frame % 3 == 0 { Material::Acid } else { Material::Water };
                    strokes.push(Stroke::new(x, 0, material, 0));
                }
            }
        }
        strokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_lays_floor_once_then_pours() {
        let first = Scene::Pile.strokes(0, 10, 20, 10, 2);
        assert_eq!(first.iter().filter(|s| s.material == Material::Wood).count(), 20);
        assert!(first.iter().any(|s| s.material == Material::Sand));

        let later = Scene::Pile.strokes(3, 10, 20, 10, 2);
        assert_eq!(later, vec![Stroke::new(10, 2, Material::Sand, 2)]);

        assert!(Scene::Pile.strokes(5, 10, 20, 10, 2).is_empty());
    }

    #[test]
    fn dam_fills_only_behind_the_wall() {
        let strokes = Scene::Dam.strokes(0, 100, 30, 12, 1);
        let wall = 10;
        assert!(strokes
            .iter()
            .filter(|s| s.material == Material::Water)
            .all(|s| s.x < wall));
        assert!(strokes
            .iter()
            .any(|s| s.material == Material::Wood && s.x == wall && s.y == 4));
    }

    #[test]
    fn rain_stays_within_width() {
        for frame in 0..50 {
            for stroke in Scene::Rain.strokes(frame, 100, 17, 10, 0) {
                assert!((0..17).contains(&stroke.x));
            }
        }
    }
}
