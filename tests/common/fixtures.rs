use goalfinder::{Candidate, Contour, OrientedRect, TapeOrientation};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;

/// Color constants for tests
pub const TAPE_GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const TAPE_RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Tape strip size in pixels (short side, long side)
pub const TAPE_WIDTH: f64 = 40.0;
pub const TAPE_HEIGHT: f64 = 110.0;

/// Tilt of a tape whose long side leans right; the mirrored strip uses the negation
pub const TAPE_TILT: f64 = 14.5;

/// Corners of a `width` x `height` rectangle whose width side points along `angle_deg`
/// (clockwise, image coordinates), rounded to pixels.
pub fn tape_corners(center: (f64, f64), width: f64, height: f64, angle_deg: f64) -> Vec<Point<i32>> {
    let rad = angle_deg.to_radians();
    let e = (rad.cos(), rad.sin());
    let n = (-e.1, e.0);
    [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
        .iter()
        .map(|(sw, sh)| {
            Point::new(
                (center.0 + sw * width / 2.0 * e.0 + sh * height / 2.0 * n.0).round() as i32,
                (center.1 + sw * width / 2.0 * e.1 + sh * height / 2.0 * n.1).round() as i32,
            )
        })
        .collect()
}

/// Creates a black 640x480 frame
pub fn blank_frame() -> RgbImage {
    RgbImage::new(FRAME_WIDTH, FRAME_HEIGHT)
}

pub fn draw_tape(frame: &mut RgbImage, center: (f64, f64), angle_deg: f64, color: Rgb<u8>) {
    let corners = tape_corners(center, TAPE_WIDTH, TAPE_HEIGHT, angle_deg);
    draw_polygon_mut(frame, &corners, color);
}

/// A frame with one goal right of center: a "/" strip at x=380 and a "\" strip at x=580
pub fn goal_frame() -> RgbImage {
    let mut frame = blank_frame();
    draw_tape(&mut frame, (380.0, 100.0), TAPE_TILT, TAPE_GREEN);
    draw_tape(&mut frame, (580.0, 100.0), -TAPE_TILT, TAPE_GREEN);
    frame
}

/// Builds a candidate from an ideal tape polygon
pub fn make_candidate(index: usize, center: (f64, f64), angle_deg: f64) -> Candidate {
    let contour = Contour::new(tape_corners(center, TAPE_WIDTH, TAPE_HEIGHT, angle_deg));
    let rect = contour.oriented_rect();
    let orientation = if rect.angle < 45.0 {
        TapeOrientation::RightTilt
    } else {
        TapeOrientation::LeftTilt
    };
    Candidate {
        index,
        contour,
        rect,
        orientation,
    }
}

/// Builds a candidate whose contour is the axis-aligned box `[x0, x1] x [y0, y1]`
pub fn boxed_candidate(index: usize, x0: i32, y0: i32, x1: i32, y1: i32) -> Candidate {
    let contour = Contour::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]);
    Candidate {
        index,
        rect: contour.oriented_rect(),
        contour,
        orientation: TapeOrientation::RightTilt,
    }
}

pub fn rect(angle: f64, width: f64, height: f64) -> OrientedRect {
    OrientedRect {
        center: (100.0, 100.0),
        size: (width, height),
        angle,
    }
}

pub fn points(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
