//! Rounded-corner masking.
//!
//! The corner cutouts from [`crate::geometry`] are filled onto the canvas
//! with a destination-out blend: wherever a cutout covers a pixel, that
//! pixel's alpha is reduced by the (anti-aliased) coverage. Fully covered
//! pixels become transparent, leaving a rounded-rectangle visible region.

pub mod apply;

pub use apply::{apply_corner_mask, apply_rounded_corners};
