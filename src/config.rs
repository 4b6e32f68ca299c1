//! Configuration file handling for glyphcam.
//!
//! Loads configuration from `~/.config/glyphcam/config.toml` or a custom path.
//! Every field is optional; unset fields fall back to built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for glyphcam.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub ramp: RampConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct RampConfig {
    /// Preset name: classic, standard, blocks, minimal
    pub preset: Option<String>,
    /// Custom glyphs, darkest first. Takes precedence over `preset`.
    pub glyphs: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Clockwise rotation in degrees: 90, 180 or 270
    pub rotation: Option<u16>,
    /// Resize filter: nearest or triangle
    pub filter: Option<String>,
    /// Luminance formula: rec709 or bt601
    pub formula: Option<String>,
    pub max_decoded_pixels: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub cache_dir: Option<PathBuf>,
    /// Export format: txt, png or jpg
    pub format: Option<String>,
    /// Raster cell size in pixels
    pub cell_px: Option<u32>,
}

/// Commented default file written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# glyphcam configuration

[grid]
# Output grid in glyphs (portrait)
width = 60
height = 80

[ramp]
# Preset: classic, standard, blocks, minimal
preset = "classic"
# Custom glyphs, darkest first (overrides preset)
# glyphs = " .:-=+*#%@"

[normalize]
# Clockwise rotation applied before scaling: 90, 180, 270
rotation = 90
# Resize filter: nearest, triangle
filter = "nearest"
# Luminance formula: rec709 (gamma-aware), bt601
formula = "rec709"

[export]
# Directory for exported files (default: platform cache dir)
# cache_dir = "/tmp/glyphcam"
# Format: txt, png, jpg
format = "txt"
# Raster cell size in pixels (1-128)
cell_px = 8
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::ParseError { path, source: e })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// A value parsed but is not usable (unknown preset, bad rotation, ...)
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphcam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphcam/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [grid]
            width = 40

            [ramp]
            glyphs = " .#"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.width, Some(40));
        assert_eq!(config.grid.height, None);
        assert_eq!(config.ramp.glyphs.as_deref(), Some(" .#"));
        assert_eq!(config.normalize, NormalizeConfig::default());
    }

    #[test]
    fn test_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.grid.width, Some(60));
        assert_eq!(config.grid.height, Some(80));
        assert_eq!(config.ramp.preset.as_deref(), Some("classic"));
        assert_eq!(config.normalize.rotation, Some(90));
        assert_eq!(config.export.format.as_deref(), Some("txt"));
        assert_eq!(config.export.cell_px, Some(8));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid\nwidth = ").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_from_explicit_missing_file() {
        let err = Config::load_from_explicit(PathBuf::from("/nonexistent/glyphcam.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        assert!(Config::parse("[grid]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        assert!(default_path().ends_with("glyphcam/config.toml"));
    }
}
