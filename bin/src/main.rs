#[macro_use]
extern crate log;

use clap::Parser;
use image::DynamicImage;
use lanczos_core::app::*;
use lanczos_core::image_io::*;
use lanczos_core::raster::*;
use lanczos_core::resize;
use lanczos_filters::LanczosFilter;
use std::process::exit;

fn main() {
    let options = Options::parse();

    // Initialize `env_logger`. `RUST_LOG` wins over `--verbose`.
    let default_filter = if options.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&options) {
        error!("{e}");
        exit(1);
    }
}

fn run(options: &Options) -> Result<(), String> {
    options.validate()?;

    let output = options.output_path();
    info!("Input: {}", options.input);
    info!("Output: {output}");

    let (img, input_format) = read_image(&options.input).map_err(|e| e.to_string())?;
    info!(
        "Resizing {}x{} to {}x{} with Lanczos radius {}",
        img.width(),
        img.height(),
        options.width,
        options.height,
        options.radius
    );

    let filter = LanczosFilter::new(options.radius);
    let (width, height) = (options.width, options.height);
    let src = img.to_rgba16();
    let format = output_format(&output, input_format);

    let resized = if keeps_sixteen_bit(&img, format) {
        let buf: Rgba16Buffer = resize(Some(&src), width, height, &filter)
            .map_err(|e| e.to_string())?;
        DynamicImage::ImageRgba16(buf.into_image())
    } else {
        let buf: Rgba8Buffer = resize(Some(&src), width, height, &filter)
            .map_err(|e| e.to_string())?;
        DynamicImage::ImageRgba8(buf.into_image())
    };

    write_image(&output, &resized, format, options.quality)
        .map_err(|e| e.to_string())?;

    info!("Done");
    Ok(())
}
