//! Source image decoding and canvas resizing.
//!
//! This module provides functionality for:
//! - Reading and decoding the source image (JPEG or PNG)
//! - Correcting EXIF orientation so camera photos come out upright
//! - Resizing, including center-crop fill to an exact canvas size
//!
//! Decoded images are always straight RGBA8 so that later stages can
//! clear alpha at the rounded corners.

mod load;
mod resize;
mod types;

pub use load::{decode_image, load_image};
pub use resize::{resize, resize_to_fill};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
