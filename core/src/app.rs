//! Application related stuff

use crate::common::Int;
use crate::image_io::get_extension_from_filename;
use clap::Parser;
use std::path::Path;

/// Lanczos radius used when none is given.
pub const DEFAULT_RADIUS: u32 = 3;

/// JPEG quality used when none is given.
pub const DEFAULT_QUALITY: u8 = 95;

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "Resize an image with a Lanczos filter.", long_about = None)]
pub struct Options {
    /// Path to the input image.
    #[clap(
        long = "input",
        short = 'i',
        value_name = "FILE",
        help = "Path to input image file."
    )]
    pub input: String,

    /// Path to the output image.
    #[clap(
        long = "output",
        short = 'o',
        value_name = "FILE",
        help = "Path to output image file (default: input file with _resized suffix)."
    )]
    pub output: Option<String>,

    /// Target width.
    #[clap(
        long = "width",
        short = 'W',
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Target width in pixels."
    )]
    pub width: Int,

    /// Target height.
    #[clap(
        long = "height",
        short = 'H',
        value_name = "NUM",
        allow_negative_numbers = true,
        help = "Target height in pixels."
    )]
    pub height: Int,

    /// Lanczos filter radius.
    #[clap(
        long = "radius",
        short = 'r',
        value_name = "NUM",
        default_value_t = DEFAULT_RADIUS,
        help = "Lanczos filter radius; 2 is softer, 3 is sharper."
    )]
    pub radius: u32,

    /// JPEG output quality.
    #[clap(
        long = "quality",
        short = 'q',
        value_name = "NUM",
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (1-100)."
    )]
    pub quality: u8,

    /// Report progress.
    #[clap(long, short = 'v', help = "Enable verbose output.")]
    pub verbose: bool,
}

impl Options {
    /// Checks the options that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), String> {
        if !Path::new(&self.input).exists() {
            return Err(format!("Input file does not exist: {}", self.input));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "Both width and height must be greater than 0 (got {}x{})",
                self.width, self.height
            ));
        }
        if self.radius == 0 {
            return Err("Filter radius must be at least 1".to_string());
        }
        if !(1..=100).contains(&self.quality) {
            return Err(format!(
                "JPEG quality must be in 1..=100 (got {})",
                self.quality
            ));
        }
        Ok(())
    }

    /// Returns the output path, deriving one from the input if none was given.
    pub fn output_path(&self) -> String {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.input),
        }
    }
}

/// Inserts `_resized` before the extension of a path.
///
/// * `input` - Input file path.
pub fn default_output_path(input: &str) -> String {
    match get_extension_from_filename(input) {
        Some(ext) => format!("{}_resized{ext}", &input[..input.len() - ext.len()]),
        None => format!("{input}_resized"),
    }
}
