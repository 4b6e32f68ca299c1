//! Single-shot capture pipeline.
//!
//! One invocation: encoded bytes → normalized grid → luminance grid →
//! glyph grid → assembled text. The pipeline holds only configuration, so
//! the same instance can be reused for any number of captures.

use std::path::PathBuf;
use std::time::Instant;

use crate::ascii::{compute_luminance_with, AssembledText, GlyphGrid, LuminanceGrid};
use crate::camera::{normalize_with, ImageSource, SourceError};
use crate::errors::TransformError;
use crate::export::{ExportError, Exporter};
use crate::pipeline_config::PipelineConfig;

/// Errors that can occur while running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub luminance: LuminanceGrid,
    pub glyphs: GlyphGrid,
    pub text: AssembledText,
}

/// The image-to-glyph pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Transform one encoded image into text-art.
    ///
    /// Fails atomically: on error nothing is returned and no state is kept.
    pub fn run(&self, bytes: &[u8]) -> Result<Rendering, PipelineError> {
        let started = Instant::now();

        let grid = normalize_with(bytes, &self.config.normalize_options())?;
        let normalized_at = Instant::now();
        log::info!(
            "Normalized {} bytes to {}x{} in {:?}",
            bytes.len(),
            grid.width,
            grid.height,
            normalized_at.duration_since(started)
        );

        let luminance = compute_luminance_with(&grid, self.config.formula);
        drop(grid);

        let glyphs = GlyphGrid::from_luminance(&luminance, &self.config.ramp)?;
        let text = glyphs.render();
        log::info!(
            "Mapped {} cells over {} glyphs ({}) in {:?}",
            luminance.values().len(),
            self.config.ramp.len(),
            self.config.formula.name(),
            normalized_at.elapsed()
        );

        Ok(Rendering {
            luminance,
            glyphs,
            text,
        })
    }

    /// Capture one image from `source` and transform it.
    pub fn capture(&self, source: &mut dyn ImageSource) -> Result<Rendering, PipelineError> {
        log::debug!("Capturing from {}", source.describe());
        let bytes = source.capture()?;
        self.run(&bytes)
    }

    /// Hand a finished rendering to `exporter`.
    pub fn export(
        &self,
        rendering: &Rendering,
        exporter: &dyn Exporter,
    ) -> Result<PathBuf, PipelineError> {
        Ok(exporter.export(rendering)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::GlyphRamp;
    use crate::camera::{GridSize, MemorySource, Rotation};
    use image::{ImageFormat, Rgb, RgbImage};
    use std::cell::RefCell;
    use std::io::Cursor;

    fn encode_png(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn config(target: GridSize, ramp: &str) -> PipelineConfig {
        PipelineConfig {
            rotation: Rotation::Deg90,
            target,
            ramp: GlyphRamp::new(ramp).unwrap(),
            ..PipelineConfig::default()
        }
    }

    /// Records renderings instead of writing files.
    struct RecordingExporter {
        seen: RefCell<Vec<String>>,
    }

    impl Exporter for RecordingExporter {
        fn export(&self, rendering: &Rendering) -> Result<PathBuf, ExportError> {
            self.seen.borrow_mut().push(rendering.text.as_text());
            Ok(PathBuf::from("recorded"))
        }
    }

    #[test]
    fn test_run_uniform_gray() {
        let bytes = encode_png(&RgbImage::from_pixel(2, 2, Rgb([128, 128, 128])));
        let pipeline = Pipeline::new(config(GridSize::new(2, 2), " .#"));
        let rendering = pipeline.run(&bytes).unwrap();

        assert_eq!(rendering.text.row_count(), 2);
        // Rec.709 mid-gray is 21 -> floor(3 * 21 / 100) = 0
        assert_eq!(rendering.text.as_text(), "    \n    ");
        assert_eq!(rendering.luminance.values(), &[21; 4]);
    }

    #[test]
    fn test_run_propagates_decode_error() {
        let pipeline = Pipeline::new(config(GridSize::new(2, 2), " .#"));
        let err = pipeline.run(&[]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Transform(TransformError::Decode(_))
        ));
    }

    #[test]
    fn test_capture_uses_source() {
        let bytes = encode_png(&RgbImage::from_pixel(4, 3, Rgb([255, 255, 255])));
        let mut source = MemorySource::new(bytes);
        let pipeline = Pipeline::new(config(GridSize::new(3, 2), " .#"));

        let rendering = pipeline.capture(&mut source).unwrap();
        assert_eq!(source.captures(), 1);
        assert_eq!(rendering.text.as_text(), "# # # \n# # # ");
    }

    #[test]
    fn test_export_delegates_to_exporter() {
        let bytes = encode_png(&RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])));
        let pipeline = Pipeline::new(config(GridSize::new(1, 1), "ab"));
        let rendering = pipeline.run(&bytes).unwrap();

        let exporter = RecordingExporter {
            seen: RefCell::new(Vec::new()),
        };
        let path = pipeline.export(&rendering, &exporter).unwrap();
        assert_eq!(path, PathBuf::from("recorded"));
        assert_eq!(exporter.seen.borrow().as_slice(), &["a ".to_string()]);
    }
}
