//! Decode, rotate and rescale an encoded camera image to a fixed grid.
//!
//! Steps, in order:
//! 1. Validate the target size and its pixel budget (before any decoding work)
//! 2. Read the header and reject images over the pixel budget
//! 3. Decode to RGB
//! 4. Rotate clockwise into portrait
//! 5. Resize to exactly the target size (aspect ratio is not preserved)

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};
use std::io::Cursor;

use super::types::{GridSize, PixelGrid, Rotation};
use crate::errors::TransformError;

/// Largest decoded image accepted by default (`width * height`).
pub const DEFAULT_MAX_DECODED_PIXELS: u64 = 40_000_000;

/// Sampling used when resizing to the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Unfiltered nearest-neighbor sampling
    #[default]
    Nearest,
    /// Bilinear sampling
    Triangle,
}

impl ResizeFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "nearest" => Some(ResizeFilter::Nearest),
            "triangle" | "bilinear" => Some(ResizeFilter::Triangle),
            _ => None,
        }
    }

    fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
        }
    }
}

/// Settings for [`normalize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub rotation: Rotation,
    pub target: GridSize,
    pub filter: ResizeFilter,
    /// Upper bound on `width * height` of the decoded image.
    pub max_decoded_pixels: u64,
}

impl NormalizeOptions {
    pub fn new(rotation: Rotation, target: GridSize) -> Self {
        Self {
            rotation,
            target,
            ..Self::default()
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            target: GridSize::default(),
            filter: ResizeFilter::default(),
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
        }
    }
}

/// Normalize an encoded image with the default filter and pixel budget.
///
/// # Errors
/// * `TransformError::Dimension` - `target` has a zero side
/// * `TransformError::Decode` - `bytes` is empty or not a decodable image
pub fn normalize(
    bytes: &[u8],
    rotation: Rotation,
    target: GridSize,
) -> Result<PixelGrid, TransformError> {
    normalize_with(bytes, &NormalizeOptions::new(rotation, target))
}

/// Normalize an encoded image to `options.target`.
///
/// The returned grid is always exactly `options.target` in size, whatever
/// the aspect ratio of the source.
pub fn normalize_with(
    bytes: &[u8],
    options: &NormalizeOptions,
) -> Result<PixelGrid, TransformError> {
    options.target.validate()?;
    validate_target_budget(options.target, options.max_decoded_pixels)?;

    if bytes.is_empty() {
        return Err(TransformError::Decode("image buffer is empty".to_string()));
    }

    let (header_width, header_height) = inspect_dimensions(bytes)?;
    validate_pixel_limit(header_width, header_height, options.max_decoded_pixels)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| TransformError::Decode(e.to_string()))?
        .to_rgb8();

    let rotated = rotate(&decoded, options.rotation);
    let target = options.target;
    let scaled = imageops::resize(
        &rotated,
        target.width,
        target.height,
        options.filter.filter_type(),
    );

    log::debug!(
        "Normalized {}x{} -> rotated {} -> {} ({})",
        header_width,
        header_height,
        options.rotation,
        target,
        options.filter.name()
    );

    let (width, height) = scaled.dimensions();
    PixelGrid::from_rgb(width, height, scaled.into_raw()).ok_or_else(|| {
        TransformError::Decode("resampled pixel buffer has unexpected length".to_string())
    })
}

/// Read width and height from the image header without decoding pixels.
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), TransformError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("unrecognized image format: {}", e)))?
        .into_dimensions()
        .map_err(|e| TransformError::Decode(e.to_string()))
}

fn validate_pixel_limit(width: u32, height: u32, max_pixels: u64) -> Result<(), TransformError> {
    let pixels = (width as u64) * (height as u64);
    if pixels > max_pixels {
        return Err(TransformError::ResourceLimit(format!(
            "image has {} pixels (limit: {})",
            pixels, max_pixels
        )));
    }
    Ok(())
}

fn validate_target_budget(target: GridSize, max_pixels: u64) -> Result<(), TransformError> {
    let cells = target.width as u64 * target.height as u64;
    if cells > max_pixels {
        return Err(TransformError::ResourceLimit(format!(
            "target grid {} has {} cells (limit: {})",
            target, cells, max_pixels
        )));
    }
    Ok(())
}

/// Rotate clockwise about the image center.
///
/// Quarter turns swap width and height; pixels are moved, never resampled.
pub(crate) fn rotate(image: &RgbImage, rotation: Rotation) -> RgbImage {
    match rotation {
        Rotation::Deg90 => imageops::rotate90(image),
        Rotation::Deg180 => imageops::rotate180(image),
        Rotation::Deg270 => imageops::rotate270(image),
    }
}
