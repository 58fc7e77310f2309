//! Image I/O

use image::codecs::jpeg::JpegEncoder;
use image::io::Reader;
use image::{ColorType, DynamicImage, ImageError, ImageFormat};
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while reading or writing image files.
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// File could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File could not be decoded.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: ImageError,
    },

    /// Image could not be encoded.
    #[error("failed to encode image {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: ImageError,
    },
}

/// Read an image in any format the `image` crate can decode. The format is
/// guessed from the file contents and returned alongside the image.
///
/// * `path` - Input file path.
pub fn read_image(path: &str) -> Result<(DynamicImage, Option<ImageFormat>), ImageIoError> {
    let decode_error = |source| ImageIoError::Decode {
        path: path.to_string(),
        source,
    };

    let reader = Reader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(decode_error)?;

    info!(
        "Read image {path} ({} x {}, {:?}, {:?})",
        img.width(),
        img.height(),
        img.color(),
        format
    );

    Ok((img, format))
}

/// Chooses the encoder for an output file. A `.png`, `.jpg` or `.jpeg`
/// extension decides; otherwise a PNG or JPEG input format is kept, and
/// anything else falls back to JPEG.
///
/// * `path`         - Output file path.
/// * `input_format` - Format the source image was decoded from, if known.
pub fn output_format(path: &str, input_format: Option<ImageFormat>) -> ImageFormat {
    let extension = get_extension_from_filename(path).map(|ext| ext.to_ascii_lowercase());
    match (extension.as_deref(), input_format) {
        (Some(".png"), _) => ImageFormat::Png,
        (Some(".jpg") | Some(".jpeg"), _) => ImageFormat::Jpeg,
        (_, Some(ImageFormat::Png)) => ImageFormat::Png,
        (_, Some(ImageFormat::Jpeg)) => ImageFormat::Jpeg,
        (Some(extension), _) => {
            warn!("Extension {extension} is not supported, writing {path} as JPEG");
            ImageFormat::Jpeg
        }
        (None, _) => {
            warn!("Can't determine file type from suffix of filename {path}, writing JPEG");
            ImageFormat::Jpeg
        }
    }
}

/// Write an image to the given path with the given encoder. Formats other
/// than PNG are written as JPEG.
///
/// * `path`    - Output file path.
/// * `img`     - Image to write.
/// * `format`  - Encoder, usually from `output_format()`.
/// * `quality` - JPEG quality in [1, 100]; ignored for PNG.
pub fn write_image(
    path: &str,
    img: &DynamicImage,
    format: ImageFormat,
    quality: u8,
) -> Result<(), ImageIoError> {
    match format {
        ImageFormat::Png => write_png(path, img),
        _ => write_jpeg(path, img, quality),
    }
}

/// Returns true if the image stores more than 8 bits per channel.
///
/// * `img` - The image.
pub fn is_sixteen_bit(img: &DynamicImage) -> bool {
    let color = img.color();
    color.bytes_per_pixel() > color.channel_count()
}

/// Returns true if a resize of `img` written with `format` should keep 16
/// bits per channel. Only PNG output can hold them.
///
/// * `img`    - The source image.
/// * `format` - Output encoder.
pub fn keeps_sixteen_bit(img: &DynamicImage, format: ImageFormat) -> bool {
    format == ImageFormat::Png && is_sixteen_bit(img)
}

/// Returns regular expression for extracting the file extension. This will
/// match the last occurrence of a period followed by no periods or slashes.
fn regex_file_ext() -> &'static Regex {
    static DATA: OnceLock<Regex> = OnceLock::new();
    DATA.get_or_init(|| Regex::new(r"(\.[^./\\]+)$").unwrap())
}

/// Retrieve the extension, including the leading period, from a file path.
///
/// * `path` - The file path.
pub fn get_extension_from_filename(path: &str) -> Option<&str> {
    regex_file_ext()
        .captures(path)
        .and_then(|c| c.get(1).map(|m| m.as_str()))
}

/// Writes the image in PNG format, keeping 16-bit channels.
///
/// * `path` - Output file path.
/// * `img`  - Image to write.
fn write_png(path: &str, img: &DynamicImage) -> Result<(), ImageIoError> {
    info!(
        "Writing PNG image {path} with resolution {}x{}",
        img.width(),
        img.height()
    );

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| ImageIoError::Encode {
            path: path.to_string(),
            source,
        })
}

/// Writes the image in JPEG format. Alpha is dropped and channels are
/// reduced to 8 bits.
///
/// * `path`    - Output file path.
/// * `img`     - Image to write.
/// * `quality` - JPEG quality.
fn write_jpeg(path: &str, img: &DynamicImage, quality: u8) -> Result<(), ImageIoError> {
    info!(
        "Writing JPEG image {path} with resolution {}x{} (quality {quality})",
        img.width(),
        img.height()
    );

    let rgb = img.to_rgb8();
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
        .map_err(|source| ImageIoError::Encode {
            path: path.to_string(),
            source,
        })?;
    writer.flush()?;

    Ok(())
}
