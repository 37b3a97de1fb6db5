use crate::config::ColorConfig;
use crate::detection::preprocessing;
use crate::geometry::simplify_chain;
use crate::models::Contour;
use image::{GrayImage, RgbImage};
use tracing::debug;

/// Trace outer and hole borders of every foreground region in a binary mask.
///
/// Each border keeps only its direction-change vertices.
pub fn find_contours(mask: &GrayImage) -> Vec<Contour> {
    imageproc::contours::find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| !c.points.is_empty())
        .map(|c| Contour::new(simplify_chain(&c.points)))
        .collect()
}

/// Segment a frame into raw tape-colored contours
pub fn segment(frame: &RgbImage, config: &ColorConfig) -> Vec<Contour> {
    let mask = preprocessing::color_mask(frame, config);
    let contours = find_contours(&mask);
    debug!("Segmented {} contours from {}x{} frame", contours.len(), frame.width(), frame.height());
    contours
}
