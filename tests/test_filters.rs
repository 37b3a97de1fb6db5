//! Tests for the shape filter and the orientation/size filter.

mod common;

use goalfinder::config::{OrientationConfig, ShapeConfig};
use goalfinder::detection::orientation::{classify, filter_orientation};
use goalfinder::detection::shapes::filter_shapes;

use common::*;

const U_SHAPE: &[(i32, i32)] = &[
    (0, 0), (60, 0), (60, 240), (240, 240), (240, 0), (300, 0), (300, 300), (0, 300),
];

#[test]
fn test_shape_filter_keeps_large_quadrilaterals() {
    let square = Contour::new(points(&[(0, 0), (100, 0), (100, 100), (0, 100)]));
    let shapes = filter_shapes(&[square.clone()], &ShapeConfig::default());

    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].contour, square);
    assert_eq!(shapes[0].polygon.len(), 4);
}

#[test]
fn test_shape_filter_rejects_wrong_vertex_count_regardless_of_area() {
    let triangle = Contour::new(points(&[(0, 0), (400, 0), (200, 300)]));
    let u_shape = Contour::new(points(U_SHAPE));
    assert!(triangle.area() > 1000.0 && u_shape.area() > 1000.0);

    let shapes = filter_shapes(&[triangle, u_shape], &ShapeConfig::default());
    assert!(shapes.is_empty());
}

#[test]
fn test_shape_filter_min_area_is_exclusive() {
    let exact = Contour::new(points(&[(0, 0), (25, 0), (25, 40), (0, 40)]));
    assert_eq!(exact.area(), 1000.0);
    let small = Contour::new(points(&[(0, 0), (20, 0), (20, 20), (0, 20)]));

    assert!(filter_shapes(&[exact, small], &ShapeConfig::default()).is_empty());
}

#[test]
fn test_shape_filter_empty_input() {
    assert!(filter_shapes(&[], &ShapeConfig::default()).is_empty());
}

#[test]
fn test_classify_both_orientations() {
    let config = OrientationConfig::default();
    assert_eq!(classify(&rect(14.5, 40.0, 110.0), &config), Some(TapeOrientation::RightTilt));
    assert_eq!(classify(&rect(75.5, 110.0, 40.0), &config), Some(TapeOrientation::LeftTilt));
}

#[test]
fn test_classify_rejects_wrong_angle() {
    let config = OrientationConfig::default();
    assert_eq!(classify(&rect(45.0, 40.0, 110.0), &config), None);
    assert_eq!(classify(&rect(0.0, 40.0, 110.0), &config), None);
    assert_eq!(classify(&rect(89.0, 110.0, 40.0), &config), None);
}

#[test]
fn test_classify_rejects_wrong_ratio() {
    let config = OrientationConfig::default();
    // Right tilt but square
    assert_eq!(classify(&rect(14.5, 50.0, 50.0), &config), None);
    // Right tilt but far too long
    assert_eq!(classify(&rect(14.5, 20.0, 100.0), &config), None);
    // No width
    assert_eq!(classify(&rect(14.5, 0.0, 100.0), &config), None);
}

#[test]
fn test_classify_band_edges_are_exclusive() {
    let config = OrientationConfig::default();

    // Angle band 14.5 +/- 8
    assert_eq!(classify(&rect(22.5, 40.0, 110.0), &config), None);
    assert_eq!(classify(&rect(6.5, 40.0, 110.0), &config), None);
    assert_eq!(classify(&rect(22.4, 40.0, 110.0), &config), Some(TapeOrientation::RightTilt));
    assert_eq!(classify(&rect(6.6, 40.0, 110.0), &config), Some(TapeOrientation::RightTilt));

    // Ratio band 2.75 +/- 0.5
    assert_eq!(classify(&rect(14.5, 40.0, 130.0), &config), None);
    assert_eq!(classify(&rect(14.5, 40.0, 129.0), &config), Some(TapeOrientation::RightTilt));
    assert_eq!(classify(&rect(14.5, 40.0, 90.0), &config), None);
    assert_eq!(classify(&rect(14.5, 40.0, 91.0), &config), Some(TapeOrientation::RightTilt));
}

#[test]
fn test_classify_ratio_may_match_either_band() {
    let config = OrientationConfig::default();
    // Left-tilt angle with a right-tilt ratio is still a tape
    assert_eq!(classify(&rect(75.5, 40.0, 110.0), &config), Some(TapeOrientation::LeftTilt));
}

#[test]
fn test_filter_orientation_indexes_survivors() {
    let shapes: Vec<goalfinder::Shape> = [
        tape_corners((100.0, 100.0), 40.0, 110.0, 14.5),
        tape_corners((300.0, 100.0), 60.0, 60.0, 14.5),
        tape_corners((500.0, 100.0), 40.0, 110.0, -14.5),
    ]
    .into_iter()
    .map(|corners| goalfinder::Shape {
        polygon: corners.clone(),
        contour: Contour::new(corners),
    })
    .collect();

    let candidates = filter_orientation(&shapes, &OrientationConfig::default());
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].index, 0);
    assert_eq!(candidates[0].orientation, TapeOrientation::RightTilt);
    assert_eq!(candidates[1].index, 1);
    assert_eq!(candidates[1].orientation, TapeOrientation::LeftTilt);
    assert!((candidates[1].rect.center.0 - 500.0).abs() < 1.0);
}
