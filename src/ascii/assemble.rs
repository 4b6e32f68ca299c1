//! Glyph grids and their text rendering.

use std::fmt;

use super::luminance::LuminanceGrid;
use super::mapping::map_to_indices_into;
use super::ramp::GlyphRamp;
use crate::errors::TransformError;

/// Glyphs chosen for each cell, with the ramp index behind each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    /// Length of the ramp the indices refer to
    pub ramp_len: usize,
    indices: Vec<usize>,
    glyphs: Vec<char>,
}

impl GlyphGrid {
    /// Quantize every luminance cell against `ramp`.
    ///
    /// # Errors
    /// * `TransformError::LuminanceOutOfRange` - a cell holds a value above 100
    pub fn from_luminance(
        luminance: &LuminanceGrid,
        ramp: &GlyphRamp,
    ) -> Result<Self, TransformError> {
        let mut indices = Vec::new();
        map_to_indices_into(luminance.values(), ramp.len(), &mut indices)?;
        let glyphs = indices.iter().map(|&i| ramp.glyphs()[i]).collect();

        Ok(Self {
            width: luminance.width,
            height: luminance.height,
            ramp_len: ramp.len(),
            indices,
            glyphs,
        })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Ramp index at (x, y), or `None` outside the grid.
    pub fn index_at(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.indices[y as usize * self.width as usize + x as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Render rows of `glyph + ' '`, joined with line breaks.
    pub fn render(&self) -> AssembledText {
        if self.is_empty() {
            return AssembledText::default();
        }

        let rows = self
            .glyphs
            .chunks_exact(self.width as usize)
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for &glyph in row {
                    line.push(glyph);
                    line.push(' ');
                }
                line
            })
            .collect();

        AssembledText { rows }
    }
}

/// Final text-art: each row is every glyph followed by one space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledText {
    rows: Vec<String>,
}

impl AssembledText {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows joined with `\n`, without a trailing line break.
    pub fn as_text(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for AssembledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Map a luminance grid through `ramp` and assemble the text rows.
pub fn assemble(
    luminance: &LuminanceGrid,
    ramp: &GlyphRamp,
) -> Result<AssembledText, TransformError> {
    Ok(GlyphGrid::from_luminance(luminance, ramp)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp3() -> GlyphRamp {
        GlyphRamp::new(" .#").unwrap()
    }

    #[test]
    fn test_assemble_rows_have_trailing_space() {
        let lum = LuminanceGrid::from_values(3, 2, vec![0, 49, 67, 100, 100, 0]).unwrap();
        let text = assemble(&lum, &ramp3()).unwrap();
        assert_eq!(text.row_count(), 2);
        assert_eq!(text.rows()[0], "  . # ");
        assert_eq!(text.rows()[1], "# #   ");
        assert_eq!(text.as_text(), "  . # \n# #   ");
    }

    #[test]
    fn test_display_matches_as_text() {
        let lum = LuminanceGrid::from_values(2, 3, vec![100; 6]).unwrap();
        let text = assemble(&lum, &ramp3()).unwrap();
        assert_eq!(text.to_string(), text.as_text());
        assert!(!text.to_string().ends_with('\n'));
    }

    #[test]
    fn test_empty_grid_produces_no_rows() {
        let lum = LuminanceGrid::from_values(0, 0, vec![]).unwrap();
        let text = assemble(&lum, &ramp3()).unwrap();
        assert!(text.is_empty());
        assert_eq!(text.as_text(), "");

        let lum = LuminanceGrid::from_values(4, 0, vec![]).unwrap();
        assert!(assemble(&lum, &ramp3()).unwrap().is_empty());

        let lum = LuminanceGrid::from_values(0, 4, vec![]).unwrap();
        assert!(assemble(&lum, &ramp3()).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let lum = LuminanceGrid::from_values(2, 1, vec![10, 101]).unwrap();
        assert_eq!(
            assemble(&lum, &ramp3()),
            Err(TransformError::LuminanceOutOfRange(101))
        );
    }

    #[test]
    fn test_glyph_grid_keeps_indices() {
        let lum = LuminanceGrid::from_values(2, 2, vec![0, 50, 99, 100]).unwrap();
        let grid = GlyphGrid::from_luminance(&lum, &ramp3()).unwrap();
        assert_eq!(grid.indices(), &[0, 1, 2, 2]);
        assert_eq!(grid.glyphs(), &[' ', '.', '#', '#']);
        assert_eq!(grid.index_at(1, 0), Some(1));
        assert_eq!(grid.index_at(2, 0), None);
        assert_eq!(grid.ramp_len, 3);
    }

    #[test]
    fn test_multibyte_glyphs() {
        let ramp = GlyphRamp::new(" ░▒▓█").unwrap();
        let lum = LuminanceGrid::from_values(2, 1, vec![0, 100]).unwrap();
        let text = assemble(&lum, &ramp).unwrap();
        assert_eq!(text.as_text(), "  █ ");
    }
}
