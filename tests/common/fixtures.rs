//! Test images, encoded the way a user would hand them to the pipeline.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const RED: [u8; 4] = [255, 0, 0, 255];

/// Encode an image as PNG bytes
pub fn to_png(image: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("encode test PNG");
    buf.into_inner()
}

/// A single-color PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    to_png(&RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// A left-to-right black-to-white ramp
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        Rgba([v, v, v, 255])
    });
    to_png(&image)
}
