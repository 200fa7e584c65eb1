//! Destination-out compositing of corner cutouts.

use tiny_skia::{BlendMode, ColorU8, FillRule, Paint, Pixmap, Transform};
use tracing::debug;

use crate::decode::DecodedImage;
use crate::geometry::{build_corners, CornerMask, GeometryError};

/// Erase the four corners of an image with the given corner radius.
///
/// Returns a new image; the input is left untouched. A radius of zero
/// returns an identical copy.
///
/// # Errors
///
/// Returns the `GeometryError` from [`build_corners`] for invalid radii or
/// an empty image.
///
/// # Example
///
/// ```ignore
/// let canvas = DecodedImage::filled(200, 200, [255, 0, 0]);
/// let avatar = apply_rounded_corners(&canvas, 100.0)?;
/// assert_eq!(avatar.pixel(0, 0).unwrap()[3], 0);
/// ```
pub fn apply_rounded_corners(
    image: &DecodedImage,
    radius: f32,
) -> Result<DecodedImage, GeometryError> {
    if radius == 0.0 {
        return Ok(image.clone());
    }

    let mask = build_corners(image.width, image.height, radius)?;
    apply_corner_mask(image, &mask)
}

/// Fill a prepared corner mask onto an image using destination-out.
///
/// Coverage is anti-aliased, so pixels on the arc keep partial alpha.
/// Corners are filled one after another; where cutouts overlap the
/// remaining alpha is erased again.
pub fn apply_corner_mask(
    image: &DecodedImage,
    mask: &CornerMask,
) -> Result<DecodedImage, GeometryError> {
    let mut pixmap = to_pixmap(image)?;

    let mut paint = Paint::default();
    // Only the source alpha matters for destination-out
    paint.set_color_rgba8(255, 0, 0, 255);
    paint.anti_alias = true;
    paint.blend_mode = BlendMode::DestinationOut;

    for path in mask.paths() {
        pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    debug!(
        width = image.width,
        height = image.height,
        "composited corner mask"
    );

    Ok(from_pixmap(&pixmap))
}

/// Copy straight RGBA pixels into a premultiplied pixmap.
fn to_pixmap(image: &DecodedImage) -> Result<Pixmap, GeometryError> {
    let mut pixmap =
        Pixmap::new(image.width, image.height).ok_or(GeometryError::InvalidCanvas {
            width: image.width,
            height: image.height,
        })?;

    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.pixels.chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }

    Ok(pixmap)
}

fn from_pixmap(pixmap: &Pixmap) -> DecodedImage {
    let mut pixels = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    DecodedImage::new(pixmap.width(), pixmap.height(), pixels)
}
