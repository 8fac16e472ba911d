//! PNG output for point sets, plus the tracing setup shared by the binaries.
use std::path::Path;

use best_candidate::prelude::{Error, PointSetSink, Result};
use glam::Vec2;
use image::{GrayImage, Luma};
use mint::Vector2;
use tracing_subscriber::EnvFilter;

const BACKGROUND: Luma<u8> = Luma([255]);
const POINT: Luma<u8> = Luma([0]);

/// Installs a fmt subscriber on stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Maps a unit-square coordinate to its pixel index, clamped to the last pixel.
/// A `size` of 0 maps everything to 0.
#[inline]
pub fn pixel_index(coordinate: f32, size: u32) -> u32 {
    ((coordinate * size as f32) as u32).min(size.saturating_sub(1))
}

/// Rasterizes points onto a white `size x size` image, one black pixel per point.
/// A `size` of 0 yields an empty image.
pub fn rasterize_points(points: &[Vector2<f32>], size: u32) -> GrayImage {
    let mut img = GrayImage::from_pixel(size, size, BACKGROUND);
    if size == 0 {
        return img;
    }
    for &p in points {
        let p = Vec2::from(p);
        img.put_pixel(pixel_index(p.x, size), pixel_index(p.y, size), POINT);
    }
    img
}

/// [`PointSetSink`] writing each point set as a grayscale PNG.
#[derive(Debug, Clone)]
pub struct PngPointSink {
    pub image_size: u32,
}

impl PngPointSink {
    pub fn new(image_size: u32) -> Self {
        Self { image_size }
    }
}

impl PointSetSink for PngPointSink {
    fn persist(&mut self, points: &[Vector2<f32>], path: &Path) -> Result<()> {
        rasterize_points(points, self.image_size)
            .save(path)
            .map_err(|e| Error::persist(path, e))
    }
}
