use tracing::info;
use tracing_subscriber::EnvFilter;

use avatar_core::{AvatarBatchProcessor, AvatarConfig, BatchReport};

use super::args::CliArgs;

/// Install the fmt subscriber. `--log` forces DEBUG, otherwise `RUST_LOG`
/// applies with INFO as the fallback.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // A subscriber may already be installed (tests run several times per process)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Assemble the configuration: defaults, then the config file, then flags.
pub fn build_config(args: &CliArgs) -> avatar_core::Result<AvatarConfig> {
    let mut config = match &args.config {
        Some(path) => AvatarConfig::from_json_file(path)?,
        None => AvatarConfig::default(),
    };

    if let Some(input) = &args.input {
        config.source = input.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if !args.radii.is_empty() {
        config.radii = args.radii.clone();
    }
    if let Some(filter) = args.filter {
        config.filter = filter.into();
    }
    if let Some(ext) = &args.extension {
        config.output_extension = Some(ext.clone());
    }
    if let Some(quality) = args.quality {
        config.jpeg_quality = quality;
    }

    Ok(config)
}

fn execute(args: &CliArgs) -> avatar_core::Result<BatchReport> {
    let config = build_config(args)?;
    let processor = AvatarBatchProcessor::new(config)?;
    let config = processor.config();
    info!(
        source = %config.source.display(),
        radii = ?config.radii,
        width = config.canvas.width,
        height = config.canvas.height,
        "starting avatar batch"
    );
    processor.run()
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let report = execute(&args)?;
    info!(count = report.outputs.len(), "all avatars written");

    Ok(())
}
