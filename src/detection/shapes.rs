use crate::config::ShapeConfig;
use crate::models::{Contour, Shape};

/// Keep contours that enclose enough area and approximate to the expected polygon.
pub fn filter_shapes(contours: &[Contour], config: &ShapeConfig) -> Vec<Shape> {
    contours
        .iter()
        .filter(|c| c.area() > config.min_area)
        .filter_map(|c| {
            let polygon = c.approximate(config.epsilon_fraction);
            (polygon.len() == config.vertex_count).then(|| Shape {
                contour: c.clone(),
                polygon,
            })
        })
        .collect()
}
