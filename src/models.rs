use crate::config::SteeringConfig;
use crate::geometry::{self, BoundingBox, OrientedRect};
use imageproc::point::Point;

/// One traced shape outline from the color mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.points)
    }

    pub fn perimeter(&self) -> f64 {
        geometry::perimeter(&self.points)
    }

    /// Polygon approximation with a tolerance proportional to the perimeter.
    pub fn approximate(&self, epsilon_fraction: f64) -> Vec<Point<i32>> {
        geometry::approximate_polygon(&self.points, epsilon_fraction * self.perimeter())
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(&self.points)
    }

    pub fn oriented_rect(&self) -> OrientedRect {
        OrientedRect::from_points(&self.points)
    }
}

/// A contour that passed the shape filter, with the polygon that qualified it.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub contour: Contour,
    pub polygon: Vec<Point<i32>>,
}

/// The two ways a tape strip is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapeOrientation {
    /// Long side leaning right ("/"), rect angle near 14.5 degrees.
    RightTilt,
    /// Long side leaning left ("\"), rect angle near 75.5 degrees.
    LeftTilt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position in the orientation filter's output; stable for one frame.
    pub index: usize,
    pub contour: Contour,
    pub rect: OrientedRect,
    pub orientation: TapeOrientation,
}

impl Candidate {
    /// Approximate slant height: norm of the y coordinates of two opposite rect corners.
    pub fn slant_height(&self) -> f64 {
        let corners = self.rect.corners();
        corners[0].1.hypot(corners[2].1)
    }
}

/// Two candidates judged to be the mirrored halves of one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalPair {
    pub first: Candidate,
    pub second: Candidate,
}

impl GoalPair {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let a = self.first.contour.bounding_box();
        let b = self.second.contour.bounding_box();
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        }
    }
}

/// Union of every goal pair found in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub bounds: BoundingBox,
    pub center_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Left,
    Centered,
    Right,
    NoTarget,
}

impl Steering {
    /// Steering for a goal centered at `center_x`.
    ///
    /// A zero `frame_width` yields `NoTarget`. `DetectionPipeline::process`
    /// rejects empty frames before this point, so the guard only matters for
    /// direct callers.
    pub fn from_center(center_x: f32, frame_width: u32, thresholds: &SteeringConfig) -> Self {
        if frame_width == 0 {
            return Steering::NoTarget;
        }
        let position = center_x / frame_width as f32;
        if position > thresholds.right_threshold {
            Steering::Right
        } else if position < thresholds.left_threshold {
            Steering::Left
        } else {
            Steering::Centered
        }
    }

    /// Value published on the reporting channel.
    pub fn value(&self) -> i32 {
        match self {
            Steering::Left => -1,
            Steering::Right => 1,
            Steering::Centered | Steering::NoTarget => 0,
        }
    }
}

/// Everything the detection pipeline derived from one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame_width: u32,
    pub frame_height: u32,
    pub contour_count: usize,
    pub shapes: Vec<Shape>,
    pub candidates: Vec<Candidate>,
    pub pairs: Vec<GoalPair>,
    pub goal: Option<Goal>,
    pub steering: Steering,
}

impl FrameReport {
    pub fn has_goal(&self) -> bool {
        self.goal.is_some()
    }
}
