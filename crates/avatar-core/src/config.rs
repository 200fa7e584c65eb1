//! Batch configuration.
//!
//! Defaults reproduce the fixed behavior of the avatar generator: read
//! `./image.jpg`, write 200x200 variants with radii 20, 100 and 150 into
//! `output/`, keeping the source extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::encode::{EncodeOptions, OutputFormat};
use crate::error::{AvatarError, Result};
use crate::geometry::GeometryError;

pub const DEFAULT_SOURCE: &str = "./image.jpg";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_RADII: [u32; 3] = [20, 100, 150];

/// Fixed output canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The shorter side, which bounds the usable corner radius.
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(200, 200)
    }
}

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Source image path.
    pub source: PathBuf,
    /// Output directory; deleted and recreated on every run.
    pub output_dir: PathBuf,
    pub canvas: CanvasSize,
    /// One output variant per radius, in order.
    pub radii: Vec<u32>,
    pub filter: FilterType,
    /// Output extension override (e.g. "png"); the source extension if unset.
    pub output_extension: Option<String>,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Color behind the cut corners in formats without alpha.
    pub background: [u8; 3],
}

impl Default for AvatarConfig {
    fn default() -> Self {
        let encode = EncodeOptions::default();
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            canvas: CanvasSize::default(),
            radii: DEFAULT_RADII.to_vec(),
            filter: FilterType::default(),
            output_extension: None,
            jpeg_quality: encode.quality,
            background: encode.background,
        }
    }
}

impl AvatarConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AvatarError::Config(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AvatarError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Check the configuration before any filesystem work.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidCanvas` for a zero canvas side
    /// - `GeometryError::RadiusTooLarge` for a radius reaching the shorter side
    /// - `EncodeError::UnsupportedFormat` if the output extension is unknown
    /// - `AvatarError::Config` for a JPEG quality outside 1-100
    pub fn validate(&self) -> Result<()> {
        let CanvasSize { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidCanvas { width, height }.into());
        }

        let limit = self.canvas.min_side();
        if let Some(&radius) = self.radii.iter().find(|&&r| r >= limit) {
            return Err(GeometryError::RadiusTooLarge {
                radius: radius as f32,
                limit,
            }
            .into());
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AvatarError::Config(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }

        OutputFormat::from_extension(&self.output_extension())?;
        Ok(())
    }

    /// Output extension including the leading dot, e.g. `".jpg"`.
    ///
    /// Empty when neither an override nor a source extension exists.
    pub fn output_extension(&self) -> String {
        let ext = match &self.output_extension {
            Some(ext) => ext.trim_start_matches('.').to_string(),
            None => self
                .source
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        if ext.is_empty() {
            ext
        } else {
            format!(".{ext}")
        }
    }

    /// File name for one variant: `{source-stem}-{radius}{ext}`.
    pub fn output_file_name(&self, radius: u32) -> String {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());
        format!("{stem}-{radius}{}", self.output_extension())
    }

    pub fn output_path(&self, radius: u32) -> PathBuf {
        self.output_dir.join(self.output_file_name(radius))
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            quality: self.jpeg_quality,
            background: self.background,
        }
    }
}
