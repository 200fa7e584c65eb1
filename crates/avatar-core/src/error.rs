//! Crate-level error type and `Result` alias.
//!
//! Every stage error converts into [`AvatarError`] so the orchestrator can
//! propagate with `?` and abort the run at the first failure.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::geometry::GeometryError;

pub type Result<T> = std::result::Result<T, AvatarError>;

#[derive(Debug, Error)]
pub enum AvatarError {
    /// Deleting or creating the output directory failed.
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl AvatarError {
    pub fn filesystem(path: &std::path::Path, source: std::io::Error) -> Self {
        AvatarError::Filesystem {
            path: path.display().to_string(),
            source,
        }
    }
}
