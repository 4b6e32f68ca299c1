//! Subcommand handlers for render, ramps and config actions.

use std::path::{Path, PathBuf};

use super::args::{ConfigAction, RenderArgs};
use super::enums::OutputMode;
use crate::ascii::{GlyphRamp, RampPreset};
use crate::camera::FileSource;
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG_TEMPLATE};
use crate::errors::TransformError;
use crate::pipeline::{Pipeline, PipelineError, Rendering};
use crate::pipeline_config::{ExportSettings, PipelineConfig};

/// Errors surfaced by subcommand handlers.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("Failed to serialize luminance grid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the config file.
///
/// An explicit `--config` path must exist and parse. The default path falls
/// back to built-in defaults when missing or unreadable.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from_explicit(path.to_path_buf()),
        None => match Config::load(None) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Failed to load config file: {}", e);
                log::warn!("Using default configuration");
                Ok(Config::default())
            }
        },
    }
}

/// Apply command-line overrides on top of file settings.
pub fn apply_render_overrides(
    args: &RenderArgs,
    mut pipeline: PipelineConfig,
    mut export: ExportSettings,
) -> Result<(PipelineConfig, ExportSettings), TransformError> {
    if let Some(width) = args.width {
        pipeline.target.width = width;
    }
    if let Some(height) = args.height {
        pipeline.target.height = height;
    }
    if let Some(rotation) = args.rotation {
        pipeline.rotation = rotation.into();
    }
    if let Some(glyphs) = &args.glyphs {
        pipeline.ramp = GlyphRamp::new(glyphs)?;
    } else if let Some(ramp) = args.ramp {
        pipeline.ramp = RampPreset::from(ramp).ramp();
    }
    if let Some(filter) = args.filter {
        pipeline.filter = filter.into();
    }
    if let Some(formula) = args.formula {
        pipeline.formula = formula.into();
    }
    if let Some(format) = args.format {
        export.format = format.into();
    }
    if let Some(dir) = &args.cache_dir {
        export.cache_dir = dir.clone();
    }
    Ok((pipeline, export))
}

/// Format a rendering for stdout.
pub fn format_output(rendering: &Rendering, mode: OutputMode) -> Result<String, CommandError> {
    Ok(match mode {
        OutputMode::Text => rendering.text.as_text(),
        OutputMode::Luminance => rendering.luminance.to_table(),
        OutputMode::Json => serde_json::to_string_pretty(&rendering.luminance)?,
    })
}

/// Render one image file and print it, optionally exporting it.
pub fn render(args: &RenderArgs, config_path: Option<&Path>) -> Result<(), CommandError> {
    let config = load_config(config_path)?;
    let (pipeline_config, export_settings) = apply_render_overrides(
        args,
        PipelineConfig::from_config(&config)?,
        ExportSettings::from_config(&config)?,
    )?;
    log::debug!(
        "Resolved settings: {} grid, rotation {}, {} glyphs, {} filter, {} luminance",
        pipeline_config.target,
        pipeline_config.rotation,
        pipeline_config.ramp.len(),
        pipeline_config.filter.name(),
        pipeline_config.formula.name()
    );

    let pipeline = Pipeline::new(pipeline_config);
    let mut source = FileSource::new(&args.input);
    let rendering = pipeline.capture(&mut source)?;

    println!("{}", format_output(&rendering, args.output)?);

    if args.export {
        let exporter = export_settings.exporter();
        let path = pipeline.export(&rendering, &exporter)?;
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}

/// Print the built-in ramps.
pub fn list_ramps() {
    println!("Available ramps:");
    for preset in RampPreset::ALL {
        let ramp = preset.ramp();
        println!("  {:<9} {:>3} glyphs  [{}]", preset.name(), ramp.len(), ramp);
    }
    println!();
    println!("Use --ramp <name> or --glyphs <string> to select a ramp.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), CommandError> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            let pipeline = PipelineConfig::from_config(&config)?;
            let export = ExportSettings::from_config(&config)?;

            println!("Current configuration:");
            println!("  Grid: {}", pipeline.target);
            println!("  Rotation: {}", pipeline.rotation);
            println!("  Ramp: {} glyphs [{}]", pipeline.ramp.len(), pipeline.ramp);
            println!("  Filter: {}", pipeline.filter.name());
            println!("  Formula: {}", pipeline.formula.name());
            println!("  Max decoded pixels: {}", pipeline.max_decoded_pixels);
            println!("  Export dir: {}", export.cache_dir.display());
            println!("  Export format: {}", export.format.extension());
            println!("  Cell size: {}px", export.cell_px);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let path = init_config(&path)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(path: &Path) -> Result<PathBuf, CommandError> {
    if path.exists() {
        return Err(CommandError::ConfigExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CommandError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| CommandError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::LuminanceFormula;
    use crate::camera::{GridSize, ResizeFilter, Rotation};
    use crate::cli::enums::{Degrees, Filter, Format, Formula, Ramp};
    use crate::export::ExportFormat;

    fn args() -> RenderArgs {
        RenderArgs {
            input: PathBuf::from("in.png"),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let (pipeline, export) = apply_render_overrides(
            &args(),
            PipelineConfig::default(),
            ExportSettings::default(),
        )
        .unwrap();
        assert_eq!(pipeline, PipelineConfig::default());
        assert_eq!(export, ExportSettings::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config::parse(
            r#"
            [grid]
            width = 10
            height = 20

            [ramp]
            preset = "minimal"

            [normalize]
            rotation = 180
            "#,
        )
        .unwrap();
        let cli = RenderArgs {
            width: Some(30),
            rotation: Some(Degrees::D270),
            ramp: Some(Ramp::Blocks),
            filter: Some(Filter::Triangle),
            formula: Some(Formula::Bt601),
            format: Some(Format::Png),
            cache_dir: Some(PathBuf::from("/tmp/exports")),
            ..args()
        };

        let (pipeline, export) = apply_render_overrides(
            &cli,
            PipelineConfig::from_config(&config).unwrap(),
            ExportSettings::from_config(&config).unwrap(),
        )
        .unwrap();

        assert_eq!(pipeline.target, GridSize::new(30, 20));
        assert_eq!(pipeline.rotation, Rotation::Deg270);
        assert_eq!(pipeline.ramp, RampPreset::Blocks.ramp());
        assert_eq!(pipeline.filter, ResizeFilter::Triangle);
        assert_eq!(pipeline.formula, LuminanceFormula::Bt601);
        assert_eq!(export.format, ExportFormat::Png);
        assert_eq!(export.cache_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_empty_glyphs_override_is_rejected() {
        let cli = RenderArgs {
            glyphs: Some(String::new()),
            ..args()
        };
        let err = apply_render_overrides(
            &cli,
            PipelineConfig::default(),
            ExportSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, TransformError::EmptyRamp);
    }

    #[test]
    fn test_init_config_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, CommandError::ConfigExists(_)));
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }
}
