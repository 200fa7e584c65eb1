//! Batch orchestration: setup, load, then render and save each radius.
//!
//! The run is a straight line: prepare the output directory, decode the
//! source once, then for every configured radius render a variant from the
//! untouched source and write it. The first error aborts the run; variants
//! already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{AvatarConfig, CanvasSize};
use crate::decode::{load_image, resize_to_fill, DecodedImage, FilterType};
use crate::encode::write_image;
use crate::error::{AvatarError, Result};
use crate::mask::apply_rounded_corners;

/// Paths written by a successful run, in radius order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outputs: Vec<PathBuf>,
}

/// Delete `dir` recursively if it is a directory, then create it.
///
/// A non-directory entry at `dir` is not removed; creating the directory
/// then fails with `AvatarError::Filesystem`.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        debug!(dir = %dir.display(), "removing previous output");
        fs::remove_dir_all(dir).map_err(|e| AvatarError::filesystem(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| AvatarError::filesystem(dir, e))?;
    Ok(())
}

/// Render one avatar variant: center-crop to the canvas, then cut the corners.
///
/// Pure with respect to `source`, which is only borrowed.
pub fn render_avatar(
    source: &DecodedImage,
    canvas: CanvasSize,
    radius: u32,
    filter: FilterType,
) -> Result<DecodedImage> {
    let resized = resize_to_fill(source, canvas.width, canvas.height, filter)?;
    Ok(apply_rounded_corners(&resized, radius as f32)?)
}

/// Runs the configured batch.
#[derive(Debug, Clone)]
pub struct AvatarBatchProcessor {
    config: AvatarConfig,
}

impl AvatarBatchProcessor {
    /// Create a processor after validating the configuration.
    pub fn new(config: AvatarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    /// Setup, load and write every variant.
    pub fn run(&self) -> Result<BatchReport> {
        let config = &self.config;

        prepare_output_dir(&config.output_dir)?;
        info!(dir = %config.output_dir.display(), "prepared output directory");

        let source = load_image(&config.source)?;
        info!(
            path = %config.source.display(),
            width = source.width,
            height = source.height,
            "loaded source image"
        );

        let options = config.encode_options();
        let mut report = BatchReport::default();

        for &radius in &config.radii {
            let avatar = render_avatar(&source, config.canvas, radius, config.filter)?;
            let path = config.output_path(radius);
            write_image(&avatar, &path, &options)?;

            info!(radius, path = %path.display(), "wrote avatar");
            report.outputs.push(path);
        }

        Ok(report)
    }
}
