//! Output encoding.
//!
//! This module provides functionality for:
//! - Encoding avatars as PNG (alpha preserved) or JPEG (alpha flattened
//!   onto a background color)
//! - Writing encoded variants to disk

mod jpeg;
mod png;
mod types;

pub use jpeg::{encode_jpeg, flatten_alpha};
pub use png::encode_png;
pub use types::{EncodeError, EncodeOptions, OutputFormat};

use std::path::Path;

use tracing::debug;

use crate::decode::DecodedImage;

/// Encode an RGBA image in the given format.
pub fn encode_image(
    image: &DecodedImage,
    format: OutputFormat,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::Jpeg => {
            let expected = image.pixel_count() * 4;
            if image.pixels.len() != expected {
                return Err(EncodeError::InvalidPixelData {
                    expected,
                    actual: image.pixels.len(),
                });
            }
            let rgb = flatten_alpha(&image.pixels, options.background);
            encode_jpeg(&rgb, image.width, image.height, options.quality)
        }
    }
}

/// Encode an image in the format implied by `path`'s extension and write it.
pub fn write_image(
    image: &DecodedImage,
    path: &Path,
    options: &EncodeOptions,
) -> Result<(), EncodeError> {
    let format = OutputFormat::from_path(path)?;
    let bytes = encode_image(image, format, options)?;

    std::fs::write(path, &bytes).map_err(|source| EncodeError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), ?format, bytes = bytes.len(), "wrote image");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_encode_png_round_trip_keeps_alpha() {
        let mut image = DecodedImage::filled(3, 3, [10, 20, 30]);
        image.pixels[3] = 0;

        let bytes = encode_image(&image, OutputFormat::Png, &EncodeOptions::default()).unwrap();
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_encode_jpeg_flattens_onto_background() {
        let mut image = DecodedImage::filled(16, 16, [0, 0, 0]);
        for px in image.pixels.chunks_exact_mut(4) {
            px[3] = 0;
        }
        let options = EncodeOptions {
            quality: 95,
            background: [255, 255, 255],
        };

        let bytes = encode_image(&image, OutputFormat::Jpeg, &options).unwrap();
        let decoded = decode_image(&bytes).unwrap();
        let px = decoded.pixel(8, 8).unwrap();
        assert!(px[0] > 250 && px[1] > 250 && px[2] > 250, "{px:?}");
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_encode_jpeg_rejects_short_buffer() {
        let image = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            encode_image(&image, OutputFormat::Jpeg, &EncodeOptions::default()),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_write_image_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image = DecodedImage::filled(2, 2, [0, 0, 0]);
        let result = write_image(&image, &dir.path().join("a.gif"), &EncodeOptions::default());
        assert!(matches!(result, Err(EncodeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_write_image_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let image = DecodedImage::filled(2, 2, [0, 0, 0]);
        let path = dir.path().join("missing").join("a.png");
        let result = write_image(&image, &path, &EncodeOptions::default());
        assert!(matches!(result, Err(EncodeError::WriteFailed { .. })));
    }
}
