//! Corner cutout geometry.
//!
//! A rounded avatar is produced by erasing four small shapes from the
//! canvas corners. Each shape is the part of an `r x r` square that lies
//! outside the circle of radius `r` inscribed against the canvas edges.
//!
//! ## Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner of the canvas
//! - Positive Y points down, positive rotation angles are clockwise
//! - Pixel `(x, y)` covers the unit square `[x, x+1) x [y, y+1)`
//!
//! The top-left corner is anchored at `(-0.5, -0.5)` rather than the
//! origin so that its anti-aliased edge straddles the canvas border.

mod corner;

pub use corner::{build_corner, build_corners, CornerMask};

use thiserror::Error;

/// Errors raised while constructing corner geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The radius is negative, NaN or infinite.
    #[error("Invalid corner radius: {0}")]
    InvalidRadius(f32),

    /// The radius does not fit inside the canvas.
    #[error("Corner radius {radius} must be smaller than the canvas side ({limit})")]
    RadiusTooLarge { radius: f32, limit: u32 },

    /// Width or height is zero
    #[error("Invalid canvas: width ({width}) and height ({height}) must be non-zero")]
    InvalidCanvas { width: u32, height: u32 },

    /// The path has no area and cannot be filled.
    #[error("Degenerate corner path")]
    DegeneratePath,
}
