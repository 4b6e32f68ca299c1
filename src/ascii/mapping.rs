//! Luminance to glyph mapping.

use super::luminance::MAX_LUMINANCE;
use super::ramp::GlyphRamp;
use crate::errors::TransformError;

/// Quantize a luminance value into a ramp index.
///
/// The index is `floor(ramp_len * luminance / 100)`. Luminance 100 would
/// land one past the end, so it is pulled back to the last glyph.
///
/// # Arguments
/// * `luminance` - Luminance value (0-100)
/// * `ramp_len` - Number of glyphs in the ramp
///
/// # Errors
/// * `TransformError::EmptyRamp` - `ramp_len` is zero
/// * `TransformError::LuminanceOutOfRange` - `luminance` is above 100
///
/// # Example
/// ```
/// use glyphcam::ascii::glyph_index;
///
/// assert_eq!(glyph_index(49, 3).unwrap(), 1);
/// assert_eq!(glyph_index(100, 3).unwrap(), 2);
/// ```
pub fn glyph_index(luminance: u8, ramp_len: usize) -> Result<usize, TransformError> {
    if ramp_len == 0 {
        return Err(TransformError::EmptyRamp);
    }
    if luminance > MAX_LUMINANCE {
        return Err(TransformError::LuminanceOutOfRange(luminance));
    }

    let index = ramp_len * luminance as usize / MAX_LUMINANCE as usize;
    Ok(index.min(ramp_len - 1))
}

/// Map a luminance value to its glyph.
///
/// # Example
/// ```
/// use glyphcam::ascii::{map_to_glyph, GlyphRamp};
///
/// let ramp = GlyphRamp::new(" .#").unwrap();
/// assert_eq!(map_to_glyph(0, &ramp).unwrap(), ' ');
/// assert_eq!(map_to_glyph(67, &ramp).unwrap(), '#');
/// ```
pub fn map_to_glyph(luminance: u8, ramp: &GlyphRamp) -> Result<char, TransformError> {
    let index = glyph_index(luminance, ramp.len())?;
    Ok(ramp.glyphs()[index])
}

/// Map a slice of luminance values to ramp indices into an existing buffer.
///
/// Stops at the first out-of-range value; the buffer content is then
/// unspecified.
pub fn map_to_indices_into(
    luminance: &[u8],
    ramp_len: usize,
    buffer: &mut Vec<usize>,
) -> Result<usize, TransformError> {
    buffer.clear();
    buffer.reserve(luminance.len());

    for &value in luminance {
        buffer.push(glyph_index(value, ramp_len)?);
    }

    Ok(luminance.len())
}
