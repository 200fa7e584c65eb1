//! Avatar Core - rounded-corner avatar rendering
//!
//! This crate turns one source image into square avatars with rounded
//! corners, one per configured corner radius.
//!
//! # Pipeline
//!
//! 1. [`decode`] - read the source, apply EXIF orientation, convert to RGBA
//! 2. [`decode::resize_to_fill`] - center-crop resize to the canvas
//! 3. [`geometry`] - build the four corner cutouts for a radius
//! 4. [`mask`] - erase the cutouts with a destination-out blend
//! 5. [`encode`] - write PNG or JPEG
//!
//! [`batch::AvatarBatchProcessor`] chains these steps for every radius in an
//! [`AvatarConfig`].

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod mask;

pub use batch::{prepare_output_dir, render_avatar, AvatarBatchProcessor, BatchReport};
pub use config::{AvatarConfig, CanvasSize};
pub use decode::{DecodedImage, FilterType};
pub use encode::OutputFormat;
pub use error::{AvatarError, Result};
