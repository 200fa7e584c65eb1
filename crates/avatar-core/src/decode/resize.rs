//! Image resizing for canvas generation.
//!
//! Provides exact resizing and center-crop "fill" resizing using the
//! `image` crate's algorithms. All functions return new `DecodedImage`
//! instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions, ignoring aspect ratio.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero, and
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Resize an image to cover `width x height`, then center-crop the excess.
///
/// The image is scaled so that it fully covers the target box while keeping
/// its aspect ratio; the longer axis overflows and is cropped evenly from
/// both sides. The result always has exactly the requested dimensions.
///
/// # Errors
///
/// Same as [`resize`]; an empty source image yields
/// `DecodeError::InvalidFormat`.
pub fn resize_to_fill(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let (scaled_w, scaled_h) = calculate_fill_dimensions(image.width, image.height, width, height);
    let scaled = resize(image, scaled_w, scaled_h, filter)?;

    if scaled_w == width && scaled_h == height {
        return Ok(scaled);
    }

    let rgba_image = scaled
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let left = (scaled_w - width) / 2;
    let top = (scaled_h - height) / 2;
    let cropped = image::imageops::crop_imm(&rgba_image, left, top, width, height).to_image();

    Ok(DecodedImage::from_rgba_image(cropped))
}

/// Calculate the smallest aspect-preserving dimensions that cover the target.
///
/// One returned dimension equals its target exactly; the other is greater
/// than or equal to its target.
fn calculate_fill_dimensions(width: u32, height: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (target_w, target_h);
    }

    let scale_x = target_w as f64 / width as f64;
    let scale_y = target_h as f64 / height as f64;

    if scale_x >= scale_y {
        // Source is relatively taller: constrain by width, crop height
        let new_height = (height as f64 * scale_x).round() as u32;
        (target_w, new_height.max(target_h))
    } else {
        // Source is relatively wider: constrain by height, crop width
        let new_width = (width as f64 * scale_y).round() as u32;
        (new_width.max(target_w), target_h)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
