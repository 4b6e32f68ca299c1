//! Pixel grid, rotation and grid size types.

use std::fmt;

use crate::errors::TransformError;

/// Target grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Portrait grid used by the capture flow (60x80)
    pub const COMPACT: GridSize = GridSize {
        width: 60,
        height: 80,
    };

    /// High density portrait grid (100x216)
    pub const TALL: GridSize = GridSize {
        width: 100,
        height: 216,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject grids with a zero side.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::Dimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::COMPACT
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Clockwise rotation applied before scaling.
///
/// Camera sensors are mounted landscape, so the default turns the frame
/// a quarter clockwise into portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Whether the rotation swaps width and height.
    pub fn swaps_axes(&self) -> bool {
        !matches!(self, Rotation::Deg180)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A decoded RGB image, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelGrid {
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a grid from raw RGB bytes.
    ///
    /// Returns `None` when `data` does not hold exactly `width * height` pixels.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(Self::BYTES_PER_PIXEL)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// A grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * Self::BYTES_PER_PIXEL);
        for _ in 0..count {
            data.extend_from_slice(&rgb);
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// RGB value at (x, y), or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(Self::BYTES_PER_PIXEL)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_constants() {
        assert_eq!(GridSize::COMPACT.width, 60);
        assert_eq!(GridSize::COMPACT.height, 80);
        assert_eq!(GridSize::TALL.width, 100);
        assert_eq!(GridSize::TALL.height, 216);
        assert_eq!(GridSize::default(), GridSize::COMPACT);
    }

    #[test]
    fn test_grid_size_validate() {
        assert!(GridSize::new(1, 1).validate().is_ok());
        assert_eq!(
            GridSize::new(0, 5).validate(),
            Err(TransformError::Dimension { width: 0, height: 5 })
        );
        assert!(GridSize::new(5, 0).validate().is_err());
    }

    #[test]
    fn test_grid_size_display() {
        assert_eq!(format!("{}", GridSize::COMPACT), "60x80");
    }

    #[test]
    fn test_rotation_degrees_roundtrip() {
        for rotation in [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::from_degrees(0), None);
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::default(), Rotation::Deg90);
    }

    #[test]
    fn test_rotation_swaps_axes() {
        assert!(Rotation::Deg90.swaps_axes());
        assert!(!Rotation::Deg180.swaps_axes());
        assert!(Rotation::Deg270.swaps_axes());
    }

    #[test]
    fn test_pixel_grid_from_rgb_checks_length() {
        assert!(PixelGrid::from_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).is_some());
        assert!(PixelGrid::from_rgb(2, 1, vec![1, 2, 3]).is_none());
        assert!(PixelGrid::from_rgb(0, 0, vec![]).is_some());
    }

    #[test]
    fn test_pixel_grid_pixel_access() {
        let grid = PixelGrid::from_rgb(
            2,
            2,
            vec![
                1, 1, 1, 2, 2, 2, // Row 0
                3, 3, 3, 4, 4, 4, // Row 1
            ],
        )
        .unwrap();
        assert_eq!(grid.pixel(0, 0), Some([1, 1, 1]));
        assert_eq!(grid.pixel(1, 0), Some([2, 2, 2]));
        assert_eq!(grid.pixel(0, 1), Some([3, 3, 3]));
        assert_eq!(grid.pixel(1, 1), Some([4, 4, 4]));
        assert_eq!(grid.pixel(2, 0), None);
        assert_eq!(grid.pixels().count(), 4);
    }

    #[test]
    fn test_pixel_grid_filled() {
        let grid = PixelGrid::filled(3, 2, [128, 128, 128]);
        assert_eq!(grid.data.len(), 18);
        assert!(grid.pixels().all(|p| p == [128, 128, 128]));
        assert_eq!(grid.size(), GridSize::new(3, 2));
    }
}
