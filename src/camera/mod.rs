//! Image acquisition and normalization.
//!
//! - Image sources via [`ImageSource`] ([`FileSource`], [`MemorySource`])
//! - Decode/rotate/rescale via [`normalize`] and [`normalize_with`]
//! - Grid types [`PixelGrid`], [`GridSize`] and [`Rotation`]

mod normalize;
mod source;
mod types;

pub use normalize::{
    normalize, normalize_with, NormalizeOptions, ResizeFilter, DEFAULT_MAX_DECODED_PIXELS,
};
pub use source::{FileSource, ImageSource, MemorySource, SourceError};
pub use types::{GridSize, PixelGrid, Rotation};
