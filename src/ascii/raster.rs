//! Rasterize a glyph grid into a grayscale image.
//!
//! Each cell becomes a solid `cell_px` square whose shade follows the ramp
//! level of its glyph: index 0 is black, the last index white.
//!
//! The PNG/JPEG exports are this shade map, not a picture of the glyphs;
//! the `txt` export is the text-art itself.

use image::{GrayImage, Luma};

use super::assemble::GlyphGrid;

/// Default cell edge in pixels.
pub const DEFAULT_CELL_PX: u32 = 8;

/// Largest cell edge accepted from configuration.
pub const MAX_CELL_PX: u32 = 128;

/// Largest raster (`width * height`) that will be allocated.
pub const MAX_RASTER_PIXELS: u64 = 100_000_000;

/// Gray level (0-255) for a ramp index.
///
/// A single-glyph ramp has only one level, drawn white.
pub fn shade_for_index(index: usize, ramp_len: usize) -> u8 {
    if ramp_len <= 1 {
        return u8::MAX;
    }
    let index = index.min(ramp_len - 1);
    (index * u8::MAX as usize / (ramp_len - 1)) as u8
}

/// Output dimensions for `grid` at `cell_px`.
///
/// `None` when a side overflows `u32` or the image would exceed
/// [`MAX_RASTER_PIXELS`]. `cell_px` of zero is treated as one.
pub fn raster_size(grid: &GlyphGrid, cell_px: u32) -> Option<(u32, u32)> {
    let cell_px = cell_px.max(1);
    let width = grid.width.checked_mul(cell_px)?;
    let height = grid.height.checked_mul(cell_px)?;
    if width as u64 * height as u64 > MAX_RASTER_PIXELS {
        return None;
    }
    Some((width, height))
}

/// Render `grid` as a `width * cell_px` by `height * cell_px` image.
///
/// Returns `None` without allocating when [`raster_size`] rejects the size.
pub fn rasterize(grid: &GlyphGrid, cell_px: u32) -> Option<GrayImage> {
    let (width, height) = raster_size(grid, cell_px)?;
    let cell_px = cell_px.max(1);
    let mut image = GrayImage::new(width, height);

    for cy in 0..grid.height {
        for cx in 0..grid.width {
            let Some(index) = grid.index_at(cx, cy) else {
                continue;
            };
            let shade = Luma([shade_for_index(index, grid.ramp_len)]);
            for py in 0..cell_px {
                for px in 0..cell_px {
                    image.put_pixel(cx * cell_px + px, cy * cell_px + py, shade);
                }
            }
        }
    }

    Some(image)
}
