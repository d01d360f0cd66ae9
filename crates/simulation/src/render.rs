//! Presenter: maps materials to colours and rasterises the grid.

use crate::cell::Material;
use crate::error::{SimError, SimResult};
use crate::Grid;

/// RGBA8 colour.
pub type Rgba = [u8; 4];

/// Bytes per output pixel.
pub const BYTES_PER_PIXEL: usize = 4;

#[must_use]
pub fn colour(material: Material) -> Rgba {
    match material {
        Material::Air => [255, 255, 255, 255],
        Material::Sand => [253, 249, 0, 255],
        Material::Water => [0, 121, 241, 255],
        Material::Wood => [127, 106, 79, 255],
        Material::Acid => [0, 228, 48, 255],
    }
}

/// One RGBA pixel per cell, row-major.
#[must_use]
pub fn render(grid: &Grid) -> Vec<u8> {
    let mut frame = vec![0; grid.cells().len() * BYTES_PER_PIXEL];
    for (px, cell) in frame.chunks_exact_mut(BYTES_PER_PIXEL).zip(grid.cells()) {
        px.copy_from_slice(&colour(cell.material));
    }
    frame
}

/// Render into a caller-owned buffer that must hold exactly one pixel per cell.
pub fn render_into(grid: &Grid, frame: &mut [u8]) -> SimResult<()> {
    let expected = grid.cells().len() * BYTES_PER_PIXEL;
    if frame.len() != expected {
        return Err(SimError::FrameSize {
            expected,
            actual: frame.len(),
        });
    }
    for (px, cell) in frame.chunks_exact_mut(BYTES_PER_PIXEL).zip(grid.cells()) {
        px.copy_from_slice(&colour(cell.material));
    }
    Ok(())
}

/// Nearest-neighbour upscale of an RGBA frame `width` pixels wide: each
/// pixel becomes a `scale`×`scale` block.
#[must_use]
pub fn upscale(frame: &[u8], width: usize, scale: usize) -> Vec<u8> {
    let row_bytes = width * BYTES_PER_PIXEL;
    let mut out = Vec::with_capacity(frame.len() * scale * scale);
    if row_bytes == 0 {
        return out;
    }
    for row in frame.chunks(row_bytes) {
        let mut line = Vec::with_capacity(row_bytes * scale);
        for px in row.chunks_exact(BYTES_PER_PIXEL) {
            for _ in 0..scale {
                line.extend_from_slice(px);
            }
        }
        for _ in 0..scale {
            out.extend_from_slice(&line);
        }
    }
    out
}

/// The grid rendered and upscaled so each cell becomes a `scale`×`scale` block.
#[must_use]
pub fn render_scaled(grid: &Grid, scale: usize) -> Vec<u8> {
    upscale(&render(grid), grid.width(), scale)
}
