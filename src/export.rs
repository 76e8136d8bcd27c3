use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use crate::grid::Grid;

/// Quantize a normalized elevation to an 8-bit gray level.
/// Values are clamped to 0.0-1.0 and then truncated.
pub fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// Convert a heightmap into a single-channel 8-bit image of the same size.
pub fn heightmap_to_image(heightmap: &Grid<f64>) -> GrayImage {
    ImageBuffer::from_fn(heightmap.width as u32, heightmap.height as u32, |x, y| {
        Luma([quantize(*heightmap.get(x as usize, y as usize))])
    })
}

/// Write a grayscale heightmap image; the format follows the file extension.
/// Any existing file at `path` is overwritten.
pub fn export_heightmap(img: &GrayImage, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    img.save(path)
}
