//! Image sources that hand encoded image bytes to the pipeline.
//!
//! A source plays the part of the device camera: each call to
//! [`ImageSource::capture`] yields one encoded still image.

use std::path::{Path, PathBuf};

/// Errors that can occur while acquiring an image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Image source '{0}' produced no data")]
    Empty(String),
}

/// Something that can produce one encoded image per capture.
pub trait ImageSource {
    /// Capture a single encoded image (JPEG, PNG, ...).
    fn capture(&mut self) -> Result<Vec<u8>, SourceError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Reads an encoded image file from disk on every capture.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileSource {
    fn capture(&mut self) -> Result<Vec<u8>, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        if bytes.is_empty() {
            return Err(SourceError::Empty(self.describe()));
        }
        Ok(bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Returns the same in-memory bytes on every capture.
///
/// Does not check that the bytes are non-empty; that is left to the
/// normalizer so callers can exercise its decode errors.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bytes: Vec<u8>,
    captures: usize,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, captures: 0 }
    }

    /// How many times `capture` has been called.
    pub fn captures(&self) -> usize {
        self.captures
    }
}

impl ImageSource for MemorySource {
    fn capture(&mut self) -> Result<Vec<u8>, SourceError> {
        self.captures += 1;
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} bytes)", self.bytes.len())
    }
}
