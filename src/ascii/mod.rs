//! Luminance quantization and glyph mapping.
//!
//! Turns a normalized pixel grid into text-art:
//!
//! 1. **Luminance** - RGB to a 0-100 relative luminance (Rec.709 or BT.601)
//! 2. **Quantization** - luminance to an index over a [`GlyphRamp`]
//! 3. **Assembly** - glyph rows joined into [`AssembledText`]
//! 4. **Raster** - optional grayscale image of the glyph grid for export
//!
//! # Ramps
//!
//! Presets are available via [`RampPreset`]:
//! - `Classic` - 53-level ramp with Unicode symbols at the dense end
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod assemble;
mod luminance;
mod mapping;
mod ramp;
mod raster;

pub use assemble::{assemble, AssembledText, GlyphGrid};
pub use luminance::{
    compute_luminance, compute_luminance_with, LuminanceFormula, LuminanceGrid, MAX_LUMINANCE,
};
pub use mapping::{glyph_index, map_to_glyph, map_to_indices_into};
pub use ramp::{
    GlyphRamp, RampPreset, BLOCKS_RAMP, CLASSIC_RAMP, MINIMAL_RAMP, STANDARD_RAMP,
};
pub use raster::{
    raster_size, rasterize, shade_for_index, DEFAULT_CELL_PX, MAX_CELL_PX, MAX_RASTER_PIXELS,
};
