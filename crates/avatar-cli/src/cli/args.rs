use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use avatar_core::FilterType;

#[derive(Parser, Debug)]
#[command(
    name = "avatar",
    version,
    about = "Generate rounded-corner avatars from one image"
)]
pub struct CliArgs {
    /// JSON configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source image [default: ./image.jpg]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory, deleted and recreated on every run [default: output]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Canvas width in pixels [default: 200]
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels [default: 200]
    #[arg(long)]
    pub height: Option<u32>,

    /// Corner radii, comma separated [default: 20,100,150]
    #[arg(short, long, value_delimiter = ',')]
    pub radii: Vec<u32>,

    /// Resize filter
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Output extension, e.g. png to keep transparency [default: source extension]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// JPEG quality (1-100) [default: 90]
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Bilinear => FilterType::Bilinear,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
