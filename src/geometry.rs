//! Planar geometry on integer contours: areas, polygon approximation and
//! minimum-area rotated rectangles.

use imageproc::geometry::{approximate_polygon_dp, arc_length, contour_area, convex_hull};
use imageproc::point::Point;

/// Absolute area enclosed by a closed polygon; zero below three points.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    contour_area(points)
}

/// Length of the closed curve through `points`.
pub fn perimeter(points: &[Point<i32>]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    arc_length(points, true)
}

/// Keep only the boundary pixels where the step direction changes.
///
/// Boundary tracing yields one point per pixel; interior points of a straight
/// run carry no shape information.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let step = |from: Point<i32>, to: Point<i32>| (to.x - from.x, to.y - from.y);
    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();
    if kept.is_empty() { points.to_vec() } else { kept }
}

/// Douglas-Peucker approximation of a closed curve.
///
/// The curve is cut at two mutually distant vertices and each half is
/// simplified as an open chain. The output never repeats its first vertex.
pub fn approximate_polygon(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let a = farthest_from(points, 0);
    let b = farthest_from(points, a);
    if a == b {
        return vec![points[a]];
    }

    let chain = |from: usize, to: usize| -> Vec<Point<i32>> {
        let steps = (to + n - from) % n;
        (0..=steps).map(|k| points[(from + k) % n]).collect()
    };

    let mut out = simplify_open(&chain(a, b), epsilon);
    out.extend(simplify_open(&chain(b, a), epsilon));
    out
}

fn farthest_from(points: &[Point<i32>], origin: usize) -> usize {
    let o = points[origin];
    let mut best = origin;
    let mut best_dist = 0i64;
    for (i, p) in points.iter().enumerate() {
        let dx = (p.x - o.x) as i64;
        let dy = (p.y - o.y) as i64;
        let dist = dx * dx + dy * dy;
        if dist > best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Simplified open chain without its final endpoint, which starts the next half.
fn simplify_open(chain: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let mut kept = if epsilon > 0.0 {
        approximate_polygon_dp(chain, epsilon, false)
    } else {
        chain.to_vec()
    };
    kept.pop();
    kept
}

/// Minimum-area rotated bounding rectangle.
///
/// `angle` lies in `[0, 90)` degrees, measured clockwise in image
/// coordinates from the +x axis to the `width` side. `height` is the
/// perpendicular side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: (f64, f64),
    pub size: (f64, f64),
    pub angle: f64,
}

impl OrientedRect {
    pub fn from_points(points: &[Point<i32>]) -> Self {
        let Some(first) = points.first() else {
            return Self::degenerate(0.0, 0.0);
        };
        let hull = convex_hull(points);
        if hull.len() < 2 {
            return Self::degenerate(first.x as f64, first.y as f64);
        }

        let pts: Vec<(f64, f64)> = hull.iter().map(|p| (p.x as f64, p.y as f64)).collect();
        let mut best: Option<(f64, Self)> = None;

        for i in 0..pts.len() {
            let (ax, ay) = pts[i];
            let (bx, by) = pts[(i + 1) % pts.len()];
            let len = (bx - ax).hypot(by - ay);
            if len == 0.0 {
                continue;
            }
            let e = ((bx - ax) / len, (by - ay) / len);
            let nrm = (-e.1, e.0);

            let (mut s_min, mut s_max) = (f64::MAX, f64::MIN);
            let (mut t_min, mut t_max) = (f64::MAX, f64::MIN);
            for &(x, y) in &pts {
                let s = x * e.0 + y * e.1;
                let t = x * nrm.0 + y * nrm.1;
                s_min = s_min.min(s);
                s_max = s_max.max(s);
                t_min = t_min.min(t);
                t_max = t_max.max(t);
            }

            let along = s_max - s_min;
            let across = t_max - t_min;
            let area = along * across;
            if best.as_ref().is_some_and(|(a, _)| area >= *a) {
                continue;
            }

            let s_mid = (s_min + s_max) / 2.0;
            let t_mid = (t_min + t_max) / 2.0;
            let center = (
                e.0 * s_mid + nrm.0 * t_mid,
                e.1 * s_mid + nrm.1 * t_mid,
            );

            let mut theta = e.1.atan2(e.0).to_degrees();
            if theta < 0.0 {
                theta += 180.0;
            }
            if theta >= 180.0 {
                theta -= 180.0;
            }
            let rect = if theta >= 90.0 {
                Self {
                    center,
                    size: (across, along),
                    angle: theta - 90.0,
                }
            } else {
                Self {
                    center,
                    size: (along, across),
                    angle: theta,
                }
            };
            best = Some((area, rect));
        }

        best.map(|(_, rect)| rect)
            .unwrap_or_else(|| Self::degenerate(first.x as f64, first.y as f64))
    }

    fn degenerate(x: f64, y: f64) -> Self {
        Self {
            center: (x, y),
            size: (0.0, 0.0),
            angle: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.0
    }

    pub fn height(&self) -> f64 {
        self.size.1
    }

    /// Height over width, or `None` when the rectangle has no width.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.size.0 > 0.0 {
            Some(self.size.1 / self.size.0)
        } else {
            None
        }
    }

    /// Corners in cyclic order. Corners 0 and 2 are diagonally opposite.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let rad = self.angle.to_radians();
        let e = (rad.cos(), rad.sin());
        let n = (-e.1, e.0);
        let (hw, hh) = (self.size.0 / 2.0, self.size.1 / 2.0);
        let (cx, cy) = self.center;
        let corner = |sw: f64, sh: f64| {
            (
                cx + sw * hw * e.0 + sh * hh * n.0,
                cy + sw * hw * e.1 + sh * hh * n.1,
            )
        };
        [
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ]
    }
}

/// Axis-aligned integer rectangle; `x + width` and `y + height` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn of_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}
