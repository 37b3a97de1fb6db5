use crate::annotate::annotate;
use crate::detection::DetectionPipeline;
use crate::error::FrameError;
use anyhow::Result;
use image::RgbImage;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default key the steering value is published under
pub const DEFAULT_SIGNAL_KEY: &str = "LeftRightValue";

/// Supplies frames to the loop. `None` means the source is exhausted.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Result<RgbImage, FrameError>>;
}

/// Receives one steering value per processed frame. Publishing is fire-and-forget.
pub trait SteeringSink {
    fn publish(&mut self, key: &str, value: i32);
}

/// Debug configuration for loop execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory annotated frames are written to
    pub output_dir: PathBuf,
}

/// Settings shared by every frame of a run
#[derive(Clone, Debug)]
pub struct LoopContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
    pub signal_key: String,
    /// Flip frames horizontally before detection
    pub mirror: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Frames that produced a steering value
    pub frames: usize,
    /// Frames where a goal was located
    pub goals: usize,
    /// Ticks skipped because no usable frame arrived
    pub skipped: usize,
}

/// Frame loop: acquire, detect, publish, repeat until the source runs dry.
pub struct FrameLoop {
    detector: DetectionPipeline,
    context: LoopContext,
}

impl FrameLoop {
    pub fn new(detector: DetectionPipeline) -> Self {
        Self {
            detector,
            context: LoopContext {
                verbose: false,
                debug: None,
                signal_key: DEFAULT_SIGNAL_KEY.to_string(),
                mirror: false,
            },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.context.mirror = mirror;
        self
    }

    pub fn with_signal_key(mut self, key: impl Into<String>) -> Self {
        self.context.signal_key = key.into();
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    pub fn context(&self) -> &LoopContext {
        &self.context
    }

    /// Process frames until the source is exhausted.
    ///
    /// Every successfully acquired frame publishes exactly one value. Failed
    /// acquisitions and empty frames publish nothing for that tick, and debug
    /// overlays that cannot be written are logged and skipped.
    pub fn run(&self, source: &mut dyn FrameSource, sink: &mut dyn SteeringSink) -> Result<LoopSummary> {
        let mut summary = LoopSummary::default();
        let mut tick = 0usize;

        while let Some(next) = source.next_frame() {
            tick += 1;

            let frame = match next {
                Ok(frame) if self.context.mirror => image::imageops::flip_horizontal(&frame),
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Frame {}: {}", tick, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let report = match self.detector.process(&frame) {
                Ok(report) => report,
                Err(e) => {
                    warn!("Frame {}: {}", tick, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let value = report.steering.value();
            sink.publish(&self.context.signal_key, value);
            summary.frames += 1;
            if report.has_goal() {
                summary.goals += 1;
            }

            if self.context.verbose {
                println!(
                    "Frame {}: {} contours, {} shapes, {} candidates, {} pairs → {:?} ({})",
                    tick,
                    report.contour_count,
                    report.shapes.len(),
                    report.candidates.len(),
                    report.pairs.len(),
                    report.steering,
                    value
                );
            }

            // A failed save is logged and the loop moves on
            if let Some(debug_config) = &self.context.debug {
                let path = debug_config.output_dir.join(format!("{:06}.png", tick));
                match annotate(&frame, &report).save(&path) {
                    Ok(()) => debug!("Saved annotated frame {}", path.display()),
                    Err(e) => warn!("Failed to save debug image {}: {}", path.display(), e),
                }
            }
        }

        Ok(summary)
    }
}
