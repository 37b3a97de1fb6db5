use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use goalfinder::io::{ImageFileSource, LogSink};
use goalfinder::pipeline::DEFAULT_SIGNAL_KEY;
use goalfinder::{DetectionConfig, DetectionPipeline, FrameLoop};

#[derive(Parser)]
#[command(name = "goalfinder")]
#[command(about = "Locate a retroreflective tape goal in camera frames and report a steering hint")]
struct Cli {
    /// Frame image files, or directories of them (processed in order)
    #[arg(value_name = "FRAMES", required = true)]
    frames: Vec<PathBuf>,

    /// JSON file overriding the detection constants
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Key the steering value is published under
    #[arg(long, default_value = DEFAULT_SIGNAL_KEY)]
    signal_key: String,

    /// Flip frames horizontally before detection
    #[arg(long)]
    mirror: bool,

    /// Save annotated frames to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => DetectionConfig::from_json_file(path)?,
        None => DetectionConfig::default(),
    };

    let mut source = ImageFileSource::from_args(&args.frames)?;
    if args.verbose {
        println!("Processing {} frames\n", source.remaining());
    }

    let mut frame_loop = FrameLoop::new(DetectionPipeline::new(config))
        .with_verbose(args.verbose)
        .with_mirror(args.mirror)
        .with_signal_key(args.signal_key);

    if let Some(debug_dir) = args.debug_out {
        frame_loop = frame_loop.with_debug(debug_dir)?;
    }

    let summary = frame_loop.run(&mut source, &mut LogSink)?;

    println!("\n=== Goal Detection Summary ===");
    println!("Frames processed: {}", summary.frames);
    println!("Frames with a goal: {}", summary.goals);
    println!("Frames skipped: {}", summary.skipped);

    Ok(())
}
