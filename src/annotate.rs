use crate::models::FrameReport;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

const SHAPE_COLOR: Rgb<u8> = Rgb([255, 0, 255]);
const GOAL_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Overlay the tape polygons and the goal box on a copy of the frame.
pub fn annotate(frame: &RgbImage, report: &FrameReport) -> RgbImage {
    let mut canvas = frame.clone();

    for shape in &report.shapes {
        let poly = &shape.polygon;
        for (i, p) in poly.iter().enumerate() {
            let q = poly[(i + 1) % poly.len()];
            draw_line_segment_mut(
                &mut canvas,
                (p.x as f32, p.y as f32),
                (q.x as f32, q.y as f32),
                SHAPE_COLOR,
            );
        }
    }

    if let Some(goal) = &report.goal {
        let b = goal.bounds;
        if b.width > 0 && b.height > 0 {
            // Two nested boxes for a 2px outline
            draw_hollow_rect_mut(&mut canvas, Rect::at(b.x, b.y).of_size(b.width as u32, b.height as u32), GOAL_COLOR);
            if b.width > 2 && b.height > 2 {
                draw_hollow_rect_mut(
                    &mut canvas,
                    Rect::at(b.x + 1, b.y + 1).of_size(b.width as u32 - 2, b.height as u32 - 2),
                    GOAL_COLOR,
                );
            }
        }
    }

    canvas
}
