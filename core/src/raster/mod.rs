//! Raster

mod buffer;
mod channel;
mod external;

// Re-export
pub use buffer::*;
pub use channel::*;

/// Channel values of one pixel as (red, green, blue, alpha), each widened to
/// the 16-bit range [0, 65535].
pub type Rgba16 = [u16; 4];

/// Read access to a 2-D grid of RGBA pixels.
///
/// Implementations report channel values in 16-bit precision regardless of
/// their storage depth.
pub trait Raster {
    /// Returns the width in pixels.
    fn width(&self) -> usize;

    /// Returns the height in pixels.
    fn height(&self) -> usize;

    /// Returns the widened channels of the pixel at `(x, y)`.
    ///
    /// * `x` - Column; must be less than `width()`.
    /// * `y` - Row; must be less than `height()`.
    fn channels_at(&self, x: usize, y: usize) -> Rgba16;

    /// Returns the dimensions as `(width, height)`.
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}
