//! `Raster` for decoded `image` crate buffers.

use super::{Channel, Raster, Rgba16};
use image::{ImageBuffer, Pixel, Rgba};

impl<P: Channel> Raster for ImageBuffer<Rgba<P>, Vec<P>>
where
    Rgba<P>: Pixel<Subpixel = P>,
{
    fn width(&self) -> usize {
        ImageBuffer::width(self) as usize
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as usize
    }

    fn channels_at(&self, x: usize, y: usize) -> Rgba16 {
        self.get_pixel(x as u32, y as u32).0.map(P::widen)
    }
}
