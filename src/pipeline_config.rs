//! Resolved settings for the pipeline and the exporter.
//!
//! A [`Config`] file holds loosely typed, optional values. The types here are
//! what the rest of the crate consumes: every name parsed, every default
//! filled in.

use std::path::PathBuf;

use crate::ascii::{GlyphRamp, LuminanceFormula, RampPreset, DEFAULT_CELL_PX, MAX_CELL_PX};
use crate::camera::{
    GridSize, NormalizeOptions, ResizeFilter, Rotation, DEFAULT_MAX_DECODED_PIXELS,
};
use crate::config::{Config, ConfigError};
use crate::export::{default_dir, CacheExporter, ExportFormat};

/// Settings for one [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub rotation: Rotation,
    pub target: GridSize,
    pub ramp: GlyphRamp,
    pub filter: ResizeFilter,
    pub formula: LuminanceFormula,
    pub max_decoded_pixels: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            target: GridSize::default(),
            ramp: GlyphRamp::default(),
            filter: ResizeFilter::default(),
            formula: LuminanceFormula::default(),
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
        }
    }
}

impl PipelineConfig {
    /// Resolve pipeline settings from a config file, falling back to defaults.
    ///
    /// Custom `ramp.glyphs` win over `ramp.preset`. Zero grid sizes are kept
    /// as-is so the pipeline reports them as dimension errors.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let target = GridSize::new(
            config.grid.width.unwrap_or(defaults.target.width),
            config.grid.height.unwrap_or(defaults.target.height),
        );

        let ramp = match (&config.ramp.glyphs, &config.ramp.preset) {
            (Some(glyphs), _) => GlyphRamp::new(glyphs)
                .map_err(|e| ConfigError::Invalid(format!("ramp.glyphs: {}", e)))?,
            (None, Some(name)) => RampPreset::from_name(name)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("unknown ramp preset '{}'", name))
                })?
                .ramp(),
            (None, None) => defaults.ramp,
        };

        let rotation = match config.normalize.rotation {
            Some(degrees) => Rotation::from_degrees(degrees).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "rotation must be 90, 180 or 270, got {}",
                    degrees
                ))
            })?,
            None => defaults.rotation,
        };

        let filter = match &config.normalize.filter {
            Some(name) => ResizeFilter::from_name(name).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown resize filter '{}'", name))
            })?,
            None => defaults.filter,
        };

        let formula = match &config.normalize.formula {
            Some(name) => LuminanceFormula::from_name(name).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown luminance formula '{}'", name))
            })?,
            None => defaults.formula,
        };

        Ok(Self {
            rotation,
            target,
            ramp,
            filter,
            formula,
            max_decoded_pixels: config
                .normalize
                .max_decoded_pixels
                .unwrap_or(defaults.max_decoded_pixels),
        })
    }

    /// Options for the normalization stage.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            rotation: self.rotation,
            target: self.target,
            filter: self.filter,
            max_decoded_pixels: self.max_decoded_pixels,
        }
    }
}

/// Settings for the cache exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub cache_dir: PathBuf,
    pub format: ExportFormat,
    pub cell_px: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            cache_dir: default_dir(),
            format: ExportFormat::default(),
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

impl ExportSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let format = match &config.export.format {
            Some(name) => ExportFormat::from_name(name).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown export format '{}'", name))
            })?,
            None => defaults.format,
        };

        let cell_px = config.export.cell_px.unwrap_or(defaults.cell_px);
        if !(1..=MAX_CELL_PX).contains(&cell_px) {
            return Err(ConfigError::Invalid(format!(
                "export.cell_px must be between 1 and {}, got {}",
                MAX_CELL_PX, cell_px
            )));
        }

        Ok(Self {
            cache_dir: config.export.cache_dir.clone().unwrap_or(defaults.cache_dir),
            format,
            cell_px,
        })
    }

    pub fn exporter(&self) -> CacheExporter {
        CacheExporter::new(self.cache_dir.clone(), self.format).with_cell_px(self.cell_px)
    }
}
