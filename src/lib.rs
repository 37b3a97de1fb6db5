pub mod annotate;
pub mod config;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod io;
pub mod models;
pub mod pipeline;

pub use config::DetectionConfig;
pub use detection::DetectionPipeline;
pub use error::{ConfigError, FrameError};
pub use geometry::{BoundingBox, OrientedRect};
pub use models::{Candidate, Contour, FrameReport, Goal, GoalPair, Shape, Steering, TapeOrientation};
pub use pipeline::{FrameLoop, FrameSource, LoopSummary, SteeringSink};
