//! CLI enum types for ramp, rotation, filter, formula and output options.

use clap::ValueEnum;

use crate::ascii::{LuminanceFormula, RampPreset};
use crate::camera::{ResizeFilter, Rotation};
use crate::export::ExportFormat;

/// Built-in glyph ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Ramp {
    #[default]
    Classic,
    Standard,
    Blocks,
    Minimal,
}

impl From<Ramp> for RampPreset {
    fn from(r: Ramp) -> Self {
        match r {
            Ramp::Classic => RampPreset::Classic,
            Ramp::Standard => RampPreset::Standard,
            Ramp::Blocks => RampPreset::Blocks,
            Ramp::Minimal => RampPreset::Minimal,
        }
    }
}

/// Clockwise rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Degrees {
    #[default]
    #[value(name = "90")]
    D90,
    #[value(name = "180")]
    D180,
    #[value(name = "270")]
    D270,
}

impl From<Degrees> for Rotation {
    fn from(d: Degrees) -> Self {
        match d {
            Degrees::D90 => Rotation::Deg90,
            Degrees::D180 => Rotation::Deg180,
            Degrees::D270 => Rotation::Deg270,
        }
    }
}

/// Resize sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    #[default]
    Nearest,
    Triangle,
}

impl From<Filter> for ResizeFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ResizeFilter::Nearest,
            Filter::Triangle => ResizeFilter::Triangle,
        }
    }
}

/// Luminance formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Formula {
    #[default]
    Rec709,
    Bt601,
}

impl From<Formula> for LuminanceFormula {
    fn from(f: Formula) -> Self {
        match f {
            Formula::Rec709 => LuminanceFormula::Rec709,
            Formula::Bt601 => LuminanceFormula::Bt601,
        }
    }
}

/// What `render` prints to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// The assembled glyph rows
    #[default]
    Text,
    /// The 0-100 luminance grid as a table
    Luminance,
    /// The luminance grid as JSON
    Json,
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Txt,
    Png,
    Jpg,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Txt => ExportFormat::Text,
            Format::Png => ExportFormat::Png,
            Format::Jpg => ExportFormat::Jpeg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_to_preset() {
        assert_eq!(RampPreset::from(Ramp::Classic), RampPreset::Classic);
        assert_eq!(RampPreset::from(Ramp::Standard), RampPreset::Standard);
        assert_eq!(RampPreset::from(Ramp::Blocks), RampPreset::Blocks);
        assert_eq!(RampPreset::from(Ramp::Minimal), RampPreset::Minimal);
    }

    #[test]
    fn test_degrees_to_rotation() {
        assert_eq!(Rotation::from(Degrees::D90), Rotation::Deg90);
        assert_eq!(Rotation::from(Degrees::D180), Rotation::Deg180);
        assert_eq!(Rotation::from(Degrees::D270), Rotation::Deg270);
    }

    #[test]
    fn test_filter_and_formula() {
        assert_eq!(ResizeFilter::from(Filter::Triangle), ResizeFilter::Triangle);
        assert_eq!(LuminanceFormula::from(Formula::Bt601), LuminanceFormula::Bt601);
    }

    #[test]
    fn test_format_to_export_format() {
        assert_eq!(ExportFormat::from(Format::Txt), ExportFormat::Text);
        assert_eq!(ExportFormat::from(Format::Png), ExportFormat::Png);
        assert_eq!(ExportFormat::from(Format::Jpg), ExportFormat::Jpeg);
    }
}
