//! Error types for grid edits, material decoding and frame output.

use thiserror::Error;

/// Simulation error type.
///
/// `OutOfBounds` is a rejected edit and hosts ignore it. `UnknownMaterial`
/// means a raw value outside the material table reached the simulation,
/// which is a defect: hosts abort on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Coordinate outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Raw material discriminant with no matching material.
    #[error("unknown material discriminant {0}")]
    UnknownMaterial(u8),

    /// Frame buffer length does not match the grid.
    #[error("frame buffer holds {actual} bytes, grid needs {expected}")]
    FrameSize { expected: usize, actual: usize },

    /// Configuration cannot produce a grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimError {
    /// True for internal invariant violations that must terminate the host.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownMaterial(_))
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
