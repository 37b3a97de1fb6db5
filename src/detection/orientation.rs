use crate::config::{OrientationConfig, TapeBand};
use crate::geometry::OrientedRect;
use crate::models::{Candidate, Shape, TapeOrientation};

/// Strict band membership: edges are outside.
fn within(value: f64, center: f64, tolerance: f64) -> bool {
    value > center - tolerance && value < center + tolerance
}

fn angle_matches(rect: &OrientedRect, band: &TapeBand, config: &OrientationConfig) -> bool {
    within(rect.angle.abs(), band.angle_deg, config.angle_tolerance)
}

fn ratio_matches(ratio: f64, band: &TapeBand, config: &OrientationConfig) -> bool {
    within(ratio, band.aspect_ratio, config.ratio_tolerance)
}

/// Classify a rect by tilt, then require its height/width ratio to fall in a tape ratio band.
///
/// The tilt decides the orientation; the ratio may match either band.
pub fn classify(rect: &OrientedRect, config: &OrientationConfig) -> Option<TapeOrientation> {
    let orientation = [TapeOrientation::RightTilt, TapeOrientation::LeftTilt]
        .into_iter()
        .find(|o| angle_matches(rect, &config.band(*o), config))?;

    let ratio = rect.aspect_ratio()?;
    let ratio_ok = ratio_matches(ratio, &config.right_tilt, config)
        || ratio_matches(ratio, &config.left_tilt, config);

    ratio_ok.then_some(orientation)
}

/// Turn shapes into candidates, dropping those with the wrong tilt or proportions.
pub fn filter_orientation(shapes: &[Shape], config: &OrientationConfig) -> Vec<Candidate> {
    shapes
        .iter()
        .filter_map(|shape| {
            let rect = shape.contour.oriented_rect();
            classify(&rect, config).map(|orientation| (shape, rect, orientation))
        })
        .enumerate()
        .map(|(index, (shape, rect, orientation))| Candidate {
            index,
            contour: shape.contour.clone(),
            rect,
            orientation,
        })
        .collect()
}
