//! Side-by-side composition of the per-variant summary images.
use std::path::Path;

use best_candidate::prelude::{Error, Result};
use image::{imageops, GrayImage, Luma};

pub const ROW_PADDING: u32 = 15;
pub const ROW_BACKGROUND: Luma<u8> = Luma([64]);

/// Pastes `images` left to right, `ROW_PADDING` pixels apart, on a canvas as tall as
/// the tallest image.
pub fn image_row(images: &[GrayImage]) -> GrayImage {
    let gaps = images.len().saturating_sub(1) as u32 * ROW_PADDING;
    let width = images.iter().map(GrayImage::width).sum::<u32>() + gaps;
    let height = images.iter().map(GrayImage::height).max().unwrap_or(0);

    let mut row = GrayImage::from_pixel(width, height, ROW_BACKGROUND);
    let mut x = 0i64;
    for img in images {
        imageops::replace(&mut row, img, x, 0);
        x += (img.width() + ROW_PADDING) as i64;
    }
    row
}

/// Loads `inputs` as grayscale and writes their [`image_row`] to `output`.
pub fn write_image_row(inputs: &[&Path], output: &Path) -> Result<()> {
    let images = inputs
        .iter()
        .map(|path| {
            image::open(path)
                .map(|img| img.into_luma8())
                .map_err(|e| Error::Analysis(format!("reading '{}': {e}", path.display())))
        })
        .collect::<Result<Vec<_>>>()?;

    image_row(&images)
        .save(output)
        .map_err(|e| Error::persist(output, e))
}
