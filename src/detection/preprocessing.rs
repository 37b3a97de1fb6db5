use crate::config::{ColorConfig, HsvRange};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Apply Gaussian blur to suppress sensor noise
pub fn apply_blur(img: &RgbImage, sigma: f32) -> RgbImage {
    if sigma <= 0.0 {
        return img.clone();
    }
    gaussian_blur_f32(img, sigma)
}

/// Convert one pixel to 8-bit HSV: hue in 0..180 (degrees halved), saturation and value in 0..=255.
pub fn rgb_to_hsv(pixel: &Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = pixel.0.map(|c| c as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let half_hue = (hue / 2.0).round() as u32 % 180;
    [half_hue as u8, saturation.round() as u8, max as u8]
}

/// Binary mask: 255 where the pixel's HSV value lies inside `range`, 0 elsewhere
pub fn threshold_hsv(img: &RgbImage, range: &HsvRange) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let hsv = rgb_to_hsv(img.get_pixel(x, y));
        if range.contains(hsv) { Luma([255u8]) } else { Luma([0u8]) }
    })
}

/// Blur then threshold a frame into the tape color mask
pub fn color_mask(frame: &RgbImage, config: &ColorConfig) -> GrayImage {
    let blurred = apply_blur(frame, config.blur_sigma);
    threshold_hsv(&blurred, &config.range)
}
