//! Core types for image encoding.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while encoding or writing an output image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output extension does not name a supported format.
    #[error("Unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// The codec rejected the image.
    #[error("{format:?} encoding failed: {message}")]
    EncodingFailed {
        format: OutputFormat,
        message: String,
    },

    /// Writing the encoded bytes to disk failed.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy, no alpha channel; transparent pixels are flattened.
    Jpeg,
    /// Lossless with alpha.
    Png,
}

impl OutputFormat {
    /// Resolve a format from a file extension, with or without leading dot.
    pub fn from_extension(ext: &str) -> Result<Self, EncodeError> {
        let ext = ext.trim_start_matches('.');
        match image::ImageFormat::from_extension(ext) {
            Some(image::ImageFormat::Jpeg) => Ok(OutputFormat::Jpeg),
            Some(image::ImageFormat::Png) => Ok(OutputFormat::Png),
            _ => Err(EncodeError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Resolve a format from the extension of a path.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| EncodeError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// JPEG quality (1-100). Ignored for PNG.
    pub quality: u8,
    /// Color that transparent areas are flattened onto for formats without
    /// an alpha channel.
    pub background: [u8; 3],
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            quality: 90,
            background: [0, 0, 0],
        }
    }
}
