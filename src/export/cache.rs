//! CacheExporter - writes renderings into a cache directory.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use super::format::ExportFormat;
use super::{ExportError, Exporter};
use crate::ascii::{raster_size, rasterize, DEFAULT_CELL_PX};
use crate::pipeline::Rendering;

/// Timestamp prefix of exported file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%3f";

/// Writes `<timestamp>_ascii.<ext>` files into a cache directory.
///
/// The directory is passed in explicitly; nothing is looked up globally
/// at export time.
#[derive(Debug, Clone)]
pub struct CacheExporter {
    cache_dir: PathBuf,
    format: ExportFormat,
    cell_px: u32,
}

impl CacheExporter {
    /// Create an exporter for the given directory.
    /// Does not create the directory - it is created on first export.
    pub fn new(cache_dir: PathBuf, format: ExportFormat) -> Self {
        Self {
            cache_dir,
            format,
            cell_px: DEFAULT_CELL_PX,
        }
    }

    /// Create an exporter writing into the default cache directory.
    /// Default: ~/.cache/glyphcam/exports/
    pub fn with_default_dir(format: ExportFormat) -> Self {
        Self::new(default_dir(), format)
    }

    /// Set the raster cell size in pixels (ignored for text exports).
    pub fn with_cell_px(mut self, cell_px: u32) -> Self {
        self.cell_px = cell_px.max(1);
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Ensure the cache directory exists, creating it if necessary.
    pub fn ensure_dir_exists(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|e| ExportError::Io {
            path: self.cache_dir.clone(),
            source: e,
        })
    }

    /// File name for an export taken at `timestamp`.
    pub fn file_name(&self, timestamp: &DateTime<Local>) -> String {
        format!(
            "{}_ascii.{}",
            timestamp.format(TIMESTAMP_FORMAT),
            self.format.extension()
        )
    }

    /// Export with an explicit timestamp.
    pub fn export_at(
        &self,
        rendering: &Rendering,
        timestamp: DateTime<Local>,
    ) -> Result<PathBuf, ExportError> {
        if rendering.text.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        if self.format.image_format().is_some()
            && raster_size(&rendering.glyphs, self.cell_px).is_none()
        {
            return Err(self.too_large(rendering));
        }

        self.ensure_dir_exists()?;
        let path = self.cache_dir.join(self.file_name(&timestamp));

        match self.format.image_format() {
            None => {
                let content = format!("{}\n", rendering.text);
                std::fs::write(&path, content).map_err(|e| ExportError::Io {
                    path: path.clone(),
                    source: e,
                })?;
            }
            Some(image_format) => {
                let raster = rasterize(&rendering.glyphs, self.cell_px)
                    .ok_or_else(|| self.too_large(rendering))?;
                raster
                    .save_with_format(&path, image_format)
                    .map_err(|e| ExportError::Encode {
                        path: path.clone(),
                        source: e,
                    })?;
            }
        }

        log::info!("Exported {} to {}", self.format.extension(), path.display());
        Ok(path)
    }

    fn too_large(&self, rendering: &Rendering) -> ExportError {
        ExportError::TooLarge {
            width: rendering.glyphs.width,
            height: rendering.glyphs.height,
            cell_px: self.cell_px,
        }
    }
}

impl Exporter for CacheExporter {
    fn export(&self, rendering: &Rendering) -> Result<PathBuf, ExportError> {
        self.export_at(rendering, Local::now())
    }
}

/// Default export directory under the platform cache dir.
pub fn default_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("glyphcam")
        .join("exports")
}
