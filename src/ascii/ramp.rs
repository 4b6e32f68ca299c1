//! Glyph ramps ordered from sparsest to fullest.

use std::fmt;

use crate::errors::TransformError;

/// Default ramp (53 levels).
/// Twelve leading spaces keep shadows blank before the ink starts.
pub const CLASSIC_RAMP: &str = "            .,_-~'=+^:;cba!?IO0123456789B$&WM#@Ñ☯🀫◉✿☻";

/// Standard ASCII density ramp (10 levels).
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Unicode block ramp (5 levels).
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Minimal ramp (4 levels) for a clean look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPreset {
    #[default]
    Classic,
    Standard,
    Blocks,
    Minimal,
}

impl RampPreset {
    pub const ALL: [RampPreset; 4] = [
        RampPreset::Classic,
        RampPreset::Standard,
        RampPreset::Blocks,
        RampPreset::Minimal,
    ];

    /// The glyphs of this preset, darkest first.
    pub fn glyphs(&self) -> &'static str {
        match self {
            RampPreset::Classic => CLASSIC_RAMP,
            RampPreset::Standard => STANDARD_RAMP,
            RampPreset::Blocks => BLOCKS_RAMP,
            RampPreset::Minimal => MINIMAL_RAMP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RampPreset::Classic => "classic",
            RampPreset::Standard => "standard",
            RampPreset::Blocks => "blocks",
            RampPreset::Minimal => "minimal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn ramp(&self) -> GlyphRamp {
        GlyphRamp {
            glyphs: self.glyphs().chars().collect(),
        }
    }
}

/// An ordered, non-empty sequence of glyphs.
///
/// Index 0 is the sparsest glyph (low luminance), the last index the fullest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string, one glyph per Unicode scalar value.
    ///
    /// # Errors
    /// * `TransformError::EmptyRamp` - `glyphs` contains no characters
    pub fn new(glyphs: &str) -> Result<Self, TransformError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(TransformError::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs; never zero.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true for a constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).copied()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// The fullest glyph.
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        RampPreset::default().ramp()
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ramp_rejected() {
        assert_eq!(GlyphRamp::new(""), Err(TransformError::EmptyRamp));
    }

    #[test]
    fn test_single_glyph_ramp() {
        let ramp = GlyphRamp::new("#").unwrap();
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.last(), '#');
        assert!(!ramp.is_empty());
    }

    #[test]
    fn test_ramp_counts_unicode_scalars() {
        // Multi-byte glyphs count once each
        let ramp = GlyphRamp::new(" ░▒▓█").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.glyph(4), Some('█'));
        assert_eq!(ramp.glyph(5), None);
    }

    #[test]
    fn test_preset_lengths() {
        assert_eq!(RampPreset::Classic.ramp().len(), 53);
        assert_eq!(RampPreset::Standard.ramp().len(), 10);
        assert_eq!(RampPreset::Blocks.ramp().len(), 5);
        assert_eq!(RampPreset::Minimal.ramp().len(), 4);
    }

    #[test]
    fn test_classic_ramp_starts_blank() {
        let ramp = RampPreset::Classic.ramp();
        assert!(ramp.glyphs()[..12].iter().all(|&c| c == ' '));
        assert_eq!(ramp.glyph(12), Some('.'));
        assert_eq!(ramp.last(), '☻');
    }

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in RampPreset::ALL {
            assert_eq!(RampPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(RampPreset::from_name(" Blocks "), Some(RampPreset::Blocks));
        assert_eq!(RampPreset::from_name("braille"), None);
    }

    #[test]
    fn test_default_ramp_is_classic() {
        assert_eq!(GlyphRamp::default(), RampPreset::Classic.ramp());
    }

    #[test]
    fn test_ramp_display() {
        assert_eq!(GlyphRamp::new(" .#").unwrap().to_string(), " .#");
    }
}
