//! Single-axis resampling pass

use super::WeightTable;
use crate::common::*;
use crate::error::{ResizeError, Result};
use crate::kernel::Kernel;
use crate::raster::*;

/// Resamples a raster along one axis to `dest_len` pixels, leaving the other
/// axis unchanged.
///
/// If the axis already has `dest_len` pixels the raster is copied without
/// filtering.
///
/// * `src`      - Source raster.
/// * `dest_len` - New length of `axis`.
/// * `axis`     - Axis to resample.
/// * `kernel`   - Reconstruction kernel.
pub fn resample_axis<P: Channel>(
    src: &dyn Raster,
    dest_len: usize,
    axis: Axis,
    kernel: &dyn Kernel,
) -> Result<PixelBuffer<P>> {
    let (width, height) = src.dimensions();
    let source_len = axis_len(width, height, axis);

    if source_len == dest_len {
        // No resize needed, just copy.
        trace!("No {axis} resize needed, copying {width}x{height} raster");
        return Ok(PixelBuffer::from_raster(src));
    }

    let table = WeightTable::new(source_len, dest_len, kernel).map_err(|e| {
        ResizeError::WeightTableUnavailable {
            axis,
            source: Box::new(e),
        }
    })?;

    debug!(
        "Resampling {axis} axis from {source_len} to {dest_len} (scale {:.4}, support {:.4})",
        table.scale(),
        table.support(),
    );

    Ok(apply_weights(src, &table, axis))
}

/// Applies a weight table along one axis of a raster.
///
/// Channels are accumulated in floating point, clamped to the 16-bit range
/// and narrowed to `P` on write.
///
/// * `src`   - Source raster. Its length along `axis` must match the table.
/// * `table` - Weights for `axis`.
/// * `axis`  - Axis to resample.
pub fn apply_weights<P: Channel>(
    src: &dyn Raster,
    table: &WeightTable,
    axis: Axis,
) -> PixelBuffer<P> {
    let (width, height) = src.dimensions();
    assert_eq!(axis_len(width, height, axis), table.source_len());

    let (dst_width, dst_height) = match axis {
        Axis::X => (table.dest_len(), height),
        Axis::Y => (width, table.dest_len()),
    };
    let mut dst = PixelBuffer::new(dst_width, dst_height);

    // Process each row (X) or column (Y).
    for fixed in 0..axis_len(width, height, axis.other()) {
        for (d, entry) in table.iter().enumerate() {
            let mut sum: [Float; 4] = [0.0; 4];
            for (s, weight) in entry.contributions() {
                if weight == 0.0 {
                    continue;
                }
                let channels = match axis {
                    Axis::X => src.channels_at(s, fixed),
                    Axis::Y => src.channels_at(fixed, s),
                };
                for (acc, c) in sum.iter_mut().zip(channels) {
                    *acc += c as Float * weight;
                }
            }

            let channels = sum.map(clamp_channel);
            match axis {
                Axis::X => dst.set_channels(d, fixed, channels),
                Axis::Y => dst.set_channels(fixed, d, channels),
            }
        }
    }

    dst
}

/// Returns the length of a raster along an axis.
#[inline]
fn axis_len(width: usize, height: usize, axis: Axis) -> usize {
    match axis {
        Axis::X => width,
        Axis::Y => height,
    }
}
