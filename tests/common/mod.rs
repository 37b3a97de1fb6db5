mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from goalfinder for tests
pub use goalfinder::{
    BoundingBox, Candidate, Contour, DetectionConfig, DetectionPipeline, FrameReport, GoalPair,
    OrientedRect, Steering, TapeOrientation,
};
