//! Pixel buffer

use super::{Channel, Raster, Rgba16};
use image::{ImageBuffer, Pixel, Rgba};

/// Owned RGBA raster stored row-major with `P` bits per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<P: Channel> {
    /// The pixels, row by row.
    pixels: Vec<[P; 4]>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

/// Raster with 8 bits per channel.
pub type Rgba8Buffer = PixelBuffer<u8>;

/// Raster with 16 bits per channel.
pub type Rgba16Buffer = PixelBuffer<u16>;

impl<P: Channel> PixelBuffer<P> {
    /// Creates a new buffer with all channels set to zero.
    ///
    /// * `width`  - Width of image.
    /// * `height` - Height of image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![[P::zero(); 4]; width * height],
            width,
            height,
        }
    }

    /// Creates a new buffer from pixel data.
    ///
    /// * `pixels` - Row-major pixel data.
    /// * `width`  - Width of image.
    /// * `height` - Height of image.
    pub fn from_pixels(pixels: Vec<[P; 4]>, width: usize, height: usize) -> Self {
        assert_eq!(width * height, pixels.len());
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Copies every pixel of a raster, narrowing channels to `P`.
    ///
    /// * `src` - Source raster.
    pub fn from_raster(src: &dyn Raster) -> Self {
        let (width, height) = src.dimensions();
        let mut dst = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                dst.set_channels(x, y, src.channels_at(x, y));
            }
        }
        dst
    }

    /// Returns the stored pixel at `(x, y)`.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    pub fn pixel(&self, x: usize, y: usize) -> [P; 4] {
        self.pixels[self.offset(x, y)]
    }

    /// Stores a pixel at `(x, y)` without any conversion.
    ///
    /// * `x`     - Column.
    /// * `y`     - Row.
    /// * `pixel` - Pixel in storage depth.
    pub fn put_pixel(&mut self, x: usize, y: usize, pixel: [P; 4]) {
        let offset = self.offset(x, y);
        self.pixels[offset] = pixel;
    }

    /// Stores 16-bit channel values at `(x, y)`, narrowing them to the
    /// storage depth.
    ///
    /// * `x`        - Column.
    /// * `y`        - Row.
    /// * `channels` - 16-bit RGBA values.
    pub fn set_channels(&mut self, x: usize, y: usize, channels: Rgba16) {
        self.put_pixel(x, y, channels.map(P::narrow));
    }

    /// Returns the pixels in row-major order.
    pub fn pixels(&self) -> &[[P; 4]] {
        &self.pixels
    }

    /// Converts the buffer into an `image` crate buffer for encoding.
    pub fn into_image(self) -> ImageBuffer<Rgba<P>, Vec<P>>
    where
        Rgba<P>: Pixel<Subpixel = P>,
    {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgba(self.pixel(x as usize, y as usize))
        })
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height);
        y * self.width + x
    }
}

impl<P: Channel> Raster for PixelBuffer<P> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channels_at(&self, x: usize, y: usize) -> Rgba16 {
        self.pixel(x, y).map(P::widen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent_black() {
        let b = Rgba8Buffer::new(3, 2);
        assert_eq!(b.dimensions(), (3, 2));
        assert!(b.pixels().iter().all(|p| *p == [0, 0, 0, 0]));
    }

    #[test]
    #[should_panic]
    fn from_pixels_with_wrong_length() {
        Rgba8Buffer::from_pixels(vec![[0; 4]; 5], 3, 2);
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_bounds() {
        Rgba8Buffer::new(2, 2).pixel(2, 0);
    }

    #[test]
    fn set_channels_narrows_to_storage_depth() {
        let mut b = Rgba8Buffer::new(1, 1);
        b.set_channels(0, 0, [0xffff, 0x8000, 0x00ff, 0x1234]);
        assert_eq!(b.pixel(0, 0), [0xff, 0x80, 0x00, 0x12]);
        assert_eq!(b.channels_at(0, 0), [0xffff, 0x8080, 0x0000, 0x1212]);
    }

    #[test]
    fn sixteen_bit_buffer_keeps_exact_channels() {
        let mut b = Rgba16Buffer::new(2, 1);
        b.set_channels(1, 0, [1, 2, 3, 65535]);
        assert_eq!(b.channels_at(1, 0), [1, 2, 3, 65535]);
        assert_eq!(b.channels_at(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn from_raster_copies_every_pixel() {
        let pixels = (0..6).map(|i| [i as u16 * 1000, 7, 8, 9]).collect();
        let src = Rgba16Buffer::from_pixels(pixels, 3, 2);
        let dst = Rgba16Buffer::from_raster(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn into_image_preserves_layout() {
        let mut b = Rgba8Buffer::new(2, 3);
        b.put_pixel(1, 2, [10, 20, 30, 40]);
        let img = b.into_image();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.get_pixel(1, 2).0, [10, 20, 30, 40]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn sixteen_bit_into_image_keeps_exact_channels() {
        let mut b = Rgba16Buffer::new(1, 2);
        b.set_channels(0, 1, [1, 258, 40000, 65535]);
        let img = b.into_image();
        assert_eq!(img.get_pixel(0, 1).0, [1, 258, 40000, 65535]);
    }
}
