pub mod preprocessing;
pub mod contours;
pub mod shapes;
pub mod orientation;
pub mod pairing;
pub mod aggregate;

use crate::config::DetectionConfig;
use crate::error::FrameError;
use crate::models::{Candidate, Contour, FrameReport, Shape};
use image::RgbImage;
use tracing::{debug, info};

/// Goal detection orchestrator. Holds only immutable configuration, so every
/// call is a pure function of the frame.
#[derive(Debug, Clone, Default)]
pub struct DetectionPipeline {
    config: DetectionConfig,
}

impl DetectionPipeline {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run the full detection pipeline on one frame
    pub fn process(&self, frame: &RgbImage) -> Result<FrameReport, FrameError> {
        let (width, height) = frame.dimensions();
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame { width, height });
        }

        // Step 1: Color segmentation
        let contours = contours::segment(frame, &self.config.color);

        // Step 2: Tape silhouettes
        let shapes = shapes::filter_shapes(&contours, &self.config.shape);
        debug!("{} of {} contours are tape-shaped", shapes.len(), contours.len());

        // Step 3: Tilt and proportions
        let candidates = orientation::filter_orientation(&shapes, &self.config.orientation);
        debug!("{} shapes have a tape orientation", candidates.len());

        // Step 4: Mirrored pairs
        let pairs = pairing::pair_candidates(&candidates, &self.config.pairing);

        // Step 5: One goal, one steering value
        let goal = aggregate::merge_goals(&pairs);
        let steering = aggregate::steer(goal.as_ref(), width, &self.config.steering);

        match &goal {
            Some(g) => info!(
                "Goal located: {} pair(s), center x {:.1} of {}, steering {:?}",
                pairs.len(),
                g.center_x,
                width,
                steering
            ),
            None => info!("No goal in frame"),
        }

        Ok(FrameReport {
            frame_width: width,
            frame_height: height,
            contour_count: contours.len(),
            shapes,
            candidates,
            pairs,
            goal,
            steering,
        })
    }

    /// Get all tape-colored contours from a frame (for debugging)
    pub fn contours(&self, frame: &RgbImage) -> Vec<Contour> {
        contours::segment(frame, &self.config.color)
    }

    /// Get tape-shaped contours from a frame (for debugging)
    pub fn shapes(&self, frame: &RgbImage) -> Vec<Shape> {
        shapes::filter_shapes(&self.contours(frame), &self.config.shape)
    }

    /// Get orientation-filtered candidates from a frame (for debugging)
    pub fn candidates(&self, frame: &RgbImage) -> Vec<Candidate> {
        orientation::filter_orientation(&self.shapes(frame), &self.config.orientation)
    }
}
