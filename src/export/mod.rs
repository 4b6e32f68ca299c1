//! Export of rendered text-art.
//!
//! An [`Exporter`] takes a finished rendering and persists it somewhere the
//! host can share from. [`CacheExporter`] writes timestamped files into a
//! cache directory.

mod cache;
mod format;

use std::path::PathBuf;

use crate::pipeline::Rendering;

pub use cache::{default_dir, CacheExporter, TIMESTAMP_FORMAT};
pub use format::ExportFormat;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Nothing to export: the rendering has no rows")]
    NothingToExport,

    #[error(
        "Raster too large: {width}x{height} cells at {cell_px}px exceeds {} pixels",
        crate::ascii::MAX_RASTER_PIXELS
    )]
    TooLarge {
        width: u32,
        height: u32,
        cell_px: u32,
    },
}

/// Persists a rendering and returns where it went.
pub trait Exporter {
    fn export(&self, rendering: &Rendering) -> Result<PathBuf, ExportError>;
}
