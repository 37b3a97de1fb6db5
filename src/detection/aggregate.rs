use crate::config::SteeringConfig;
use crate::models::{Goal, GoalPair, Steering};

/// Merge every pair's bounding box into one goal region.
pub fn merge_goals(pairs: &[GoalPair]) -> Option<Goal> {
    let bounds = pairs
        .iter()
        .filter_map(GoalPair::bounding_box)
        .reduce(|acc, b| acc.union(&b))?;
    let center_x = bounds.x as f32 + (bounds.right() - bounds.x) as f32 / 2.0;
    Some(Goal { bounds, center_x })
}

/// One steering decision for the frame; no goal means `NoTarget`.
pub fn steer(goal: Option<&Goal>, frame_width: u32, config: &SteeringConfig) -> Steering {
    match goal {
        Some(goal) => Steering::from_center(goal.center_x, frame_width, config),
        None => Steering::NoTarget,
    }
}
