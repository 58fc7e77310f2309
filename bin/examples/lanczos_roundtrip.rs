//! Downsamples a synthetic test pattern and upsamples it again, saving every
//! stage as JPEG so the Lanczos reconstruction can be inspected.
//!
//! Run with `cargo run -p lanczos-rs --example lanczos_roundtrip [OUTPUT_DIR]`.

#[macro_use]
extern crate log;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use lanczos_core::image_io::write_image;
use lanczos_core::raster::*;
use lanczos_core::resize;
use lanczos_filters::LanczosFilter;
use std::path::Path;

const PATTERN_SIZE: u32 = 400;
const QUALITY: u8 = 90;

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    if let Err(e) = run(Path::new(&dir)) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(dir: &Path) -> Result<(), String> {
    let filter = LanczosFilter::default();

    let original = test_pattern(PATTERN_SIZE);
    save(dir, "original.jpg", DynamicImage::ImageRgba8(original.clone()))?;

    let small: Rgba8Buffer = resize(Some(&original), 100, 100, &filter)
        .map_err(|e| e.to_string())?;
    let restored: Rgba8Buffer = resize(Some(&small), 200, 200, &filter)
        .map_err(|e| e.to_string())?;

    save(dir, "downsampled.jpg", DynamicImage::ImageRgba8(small.into_image()))?;
    save(dir, "upsampled.jpg", DynamicImage::ImageRgba8(restored.into_image()))?;

    Ok(())
}

fn save(dir: &Path, name: &str, img: DynamicImage) -> Result<(), String> {
    let path = dir.join(name);
    let path = path.to_str().ok_or(format!("Invalid output directory {dir:?}"))?;
    write_image(path, &img, ImageFormat::Jpeg, QUALITY)
        .map_err(|e| e.to_string())?;
    info!("Saved {path}");
    Ok(())
}

/// Diagonal stripes over a radial gradient, with a one-pixel checkerboard in
/// the top-left corner to show aliasing.
fn test_pattern(size: u32) -> RgbaImage {
    let center = size as f64 / 2.0;
    let max_dist = center * std::f64::consts::SQRT_2;

    RgbaImage::from_fn(size, size, |x, y| {
        if x < size / 4 && y < size / 4 {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            return Rgba([v, v, v, 255]);
        }

        let (dx, dy) = (x as f64 - center, y as f64 - center);
        let radial = 1.0 - (dx * dx + dy * dy).sqrt() / max_dist;
        let stripe = if ((x + y) / 10) % 2 == 0 { 1.0 } else { 0.6 };

        let r = (255.0 * radial * stripe) as u8;
        let g = (255.0 * (x as f64 / size as f64) * stripe) as u8;
        let b = (255.0 * (y as f64 / size as f64) * stripe) as u8;
        Rgba([r, g, b, 255])
    })
}
