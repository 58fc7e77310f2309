//! Separable image resampling.
//!
//! A 2-D resize is decomposed into a horizontal pass followed by a vertical
//! pass. Each pass precomputes a [`WeightTable`] for its axis and convolves
//! every row (or column) with it. Passes whose axis keeps its length are
//! skipped, and a resize to the source dimensions is a plain copy.

mod axis;
mod weights;

// Re-export
pub use axis::*;
pub use weights::*;

use crate::common::*;
use crate::error::{ResizeError, Result};
use crate::kernel::Kernel;
use crate::raster::*;

/// Resizes a raster to `width` x `height` pixels.
///
/// The result is always a newly allocated raster; the source is never
/// modified. Channels are carried at 16-bit precision between the two passes
/// and narrowed to `P` only on the final write.
///
/// * `src`    - Source raster; `None` is reported as `NilSource`.
/// * `width`  - Target width; must be positive.
/// * `height` - Target height; must be positive.
/// * `kernel` - Reconstruction kernel used on both axes.
pub fn resize<P: Channel>(
    src: Option<&dyn Raster>,
    width: Int,
    height: Int,
    kernel: &dyn Kernel,
) -> Result<PixelBuffer<P>> {
    let src = src.ok_or(ResizeError::NilSource)?;
    if width <= 0 || height <= 0 {
        return Err(ResizeError::InvalidDimension(format!(
            "width={width}, height={height}"
        )));
    }
    let (width, height) = (width as usize, height as usize);
    let (src_width, src_height) = src.dimensions();

    debug!(
        "Resizing {src_width}x{src_height} to {width}x{height} ({}-bit output, kernel radius {})",
        P::BITS,
        kernel.radius(),
    );

    if src_width != width && src_height != height {
        let intermediate: Rgba16Buffer = resample_axis(src, width, Axis::X, kernel)?;
        return resample_axis(&intermediate, height, Axis::Y, kernel);
    }

    if src_width != width {
        return resample_axis(src, width, Axis::X, kernel);
    }

    resample_axis(src, height, Axis::Y, kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelData;
    use proptest::prelude::*;

    struct Tent {
        data: KernelData,
    }

    impl Kernel for Tent {
        fn get_data(&self) -> &KernelData {
            &self.data
        }

        fn evaluate(&self, x: Float) -> Float {
            (1.0 - abs(x) * self.data.inv_radius).max(0.0)
        }
    }

    fn tent() -> Tent {
        Tent {
            data: KernelData::new(1.0),
        }
    }

    fn gradient(width: usize, height: usize) -> Rgba8Buffer {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| [(x * 37) as u8, (y * 53) as u8, 128, 255])
            })
            .collect();
        Rgba8Buffer::from_pixels(pixels, width, height)
    }

    #[test]
    fn nil_source_is_rejected() {
        let err = resize::<u8>(None, 10, 10, &tent()).unwrap_err();
        assert!(matches!(err, ResizeError::NilSource));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let src = gradient(4, 4);
        for (w, h) in [(0, 5), (5, -1), (-1, -1), (2, 0)] {
            let err = resize::<u8>(Some(&src), w, h, &tent()).unwrap_err();
            assert!(matches!(err, ResizeError::InvalidDimension(_)), "{w}x{h}");
        }
    }

    #[test]
    fn same_size_returns_identical_copy() {
        let src = gradient(5, 3);
        let dst: Rgba8Buffer = resize(Some(&src), 5, 3, &tent()).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn sixteen_bit_source_is_copied_exactly() {
        let pixels = (0..6u16).map(|i| [i * 10007, 1, 2, 65535]).collect();
        let src = Rgba16Buffer::from_pixels(pixels, 3, 2);
        let dst: Rgba16Buffer = resize(Some(&src), 3, 2, &tent()).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn width_only_change_keeps_rows() {
        let src = gradient(4, 2);
        let dst: Rgba8Buffer = resize(Some(&src), 8, 2, &tent()).unwrap();
        assert_eq!(dst.dimensions(), (8, 2));

        // Rows are filtered independently; the green channel encodes the row.
        for x in 0..8 {
            assert_eq!(dst.pixel(x, 0)[1], 0);
            assert_eq!(dst.pixel(x, 1)[1], 53);
        }
    }

    #[test]
    fn height_only_change_keeps_columns() {
        let src = gradient(2, 4);
        let dst: Rgba8Buffer = resize(Some(&src), 2, 7, &tent()).unwrap();
        assert_eq!(dst.dimensions(), (2, 7));
        for y in 0..7 {
            assert_eq!(dst.pixel(0, y)[0], 0);
            assert_eq!(dst.pixel(1, y)[0], 37);
        }
    }

    #[test]
    fn source_is_left_untouched() {
        let src = gradient(6, 6);
        let before = src.clone();
        let _: Rgba8Buffer = resize(Some(&src), 3, 9, &tent()).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn empty_source_fails_to_build_weights() {
        let src = Rgba8Buffer::new(0, 0);
        let err = resize::<u8>(Some(&src), 4, 4, &tent()).unwrap_err();
        assert!(matches!(
            err,
            ResizeError::WeightTableUnavailable { axis: Axis::X, .. }
        ));
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let src = Rgba8Buffer::from_pixels(vec![[200, 100, 50, 255]; 35], 7, 5);
        let dst: Rgba8Buffer = resize(Some(&src), 3, 11, &tent()).unwrap();
        assert!(dst.pixels().iter().all(|p| *p == [200, 100, 50, 255]));
    }

    proptest! {
        #[test]
        fn output_has_requested_dimensions(
            src_w in 1..12usize, src_h in 1..12usize, w in 1..24i32, h in 1..24i32,
        ) {
            let src = gradient(src_w, src_h);
            let dst: Rgba8Buffer = resize(Some(&src), w, h, &tent()).unwrap();
            prop_assert_eq!(dst.dimensions(), (w as usize, h as usize));
        }
    }
}
