//! Export file formats.

use image::ImageFormat;

/// File format written by an exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Assembled text, UTF-8
    #[default]
    Text,
    /// Grayscale raster, PNG
    Png,
    /// Grayscale raster, JPEG
    Jpeg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Png, ExportFormat::Jpeg];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "txt" | "text" => Some(ExportFormat::Text),
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Image encoder for raster formats, `None` for text.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            ExportFormat::Text => None,
            ExportFormat::Png => Some(ImageFormat::Png),
            ExportFormat::Jpeg => Some(ImageFormat::Jpeg),
        }
    }
}
