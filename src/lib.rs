//! glyphcam library crate.
//!
//! Turns an encoded photo into glyph-based text-art: decode, rotate and
//! rescale to a fixed grid, quantize per-pixel luminance over a glyph ramp,
//! then assemble rows of text. See [`pipeline::Pipeline`] for the entry point.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod pipeline;
pub mod pipeline_config;
