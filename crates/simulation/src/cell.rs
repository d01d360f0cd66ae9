//! Cell and Material types for the simulation grid.

use std::fmt;

use crate::error::SimError;

/// Discriminant values are the raw material codes hosts pass in; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Air = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Acid = 4,
}

impl Material {
    pub const COUNT: usize = 5;

    /// Every material, in discriminant order.
    pub const ALL: [Material; Material::COUNT] = [
        Material::Air,
        Material::Sand,
        Material::Water,
        Material::Wood,
        Material::Acid,
    ];

    /// Water and Acid share the liquid movement rules.
    #[must_use]
    pub fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Acid)
    }

    /// Air and Wood never run a movement rule.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        !matches!(self, Self::Air | Self::Wood)
    }

    /// Next material in the selection cycle, wrapping after Acid.
    #[must_use]
    pub fn next(self) -> Self {
        self.cycle(1)
    }

    /// Previous material in the selection cycle, wrapping before Air.
    #[must_use]
    pub fn prev(self) -> Self {
        self.cycle(-1)
    }

    /// Advance `steps` positions through the cycle; negative steps go backwards.
    #[must_use]
    pub fn cycle(self, steps: i32) -> Self {
        let count = Self::COUNT as i32;
        let idx = (self as i32 + steps).rem_euclid(count);
        Self::ALL[idx as usize]
    }
}

impl TryFrom<u8> for Material {
    type Error = SimError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(SimError::UnknownMaterial(raw))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "Air"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Wood => write!(f, "Wood"),
            Self::Acid => write!(f, "Acid"),
        }
    }
}

/// One grid slot. `processed` is only meaningful while a tick is running.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub material: Material,
    pub processed: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl Cell {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            processed: false,
        }
    }

    #[must_use]
    pub fn air() -> Self {
        Self::new(Material::Air)
    }
}
