//! Error types for the image-to-glyph transform.
//!
//! Every variant is an input-validation failure: the transform is
//! deterministic, so none of these are worth retrying.

/// Errors raised by the normalizer, the luminance quantizer and the glyph mapper.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    /// The byte buffer is not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Requested target grid has a zero side
    #[error("Invalid target size {width}x{height}: both sides must be positive")]
    Dimension { width: u32, height: u32 },

    /// The glyph ramp has no glyphs
    #[error("Glyph ramp is empty")]
    EmptyRamp,

    /// Luminance outside 0..=100 handed to the glyph mapper
    #[error("Luminance {0} is out of range (expected 0-100)")]
    LuminanceOutOfRange(u8),

    /// Decoded image would exceed the configured pixel budget
    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_display() {
        assert_eq!(
            format!("{}", TransformError::Decode("empty buffer".to_string())),
            "Failed to decode image: empty buffer"
        );
        assert_eq!(
            format!("{}", TransformError::Dimension { width: 0, height: 5 }),
            "Invalid target size 0x5: both sides must be positive"
        );
        assert_eq!(format!("{}", TransformError::EmptyRamp), "Glyph ramp is empty");
        assert!(format!("{}", TransformError::LuminanceOutOfRange(101)).contains("101"));
    }
}
