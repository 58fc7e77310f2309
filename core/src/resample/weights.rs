//! Weight tables

use crate::common::*;
use crate::error::{ResizeError, Result};
use crate::kernel::Kernel;

/// Holds details for reconstructing one destination pixel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResampleWeight {
    /// Offset to the first contributing source pixel.
    pub first: usize,

    /// Weights of consecutive source pixels starting at `first`.
    pub weights: Vec<Float>,
}

impl ResampleWeight {
    /// Returns the `(source index, weight)` pairs in source order.
    pub fn contributions(&self) -> impl Iterator<Item = (usize, Float)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(move |(i, w)| (self.first + i, *w))
    }

    /// Returns the index of the last contributing source pixel.
    pub fn last(&self) -> usize {
        self.first + self.weights.len().saturating_sub(1)
    }

    /// Returns the sum of the weights.
    pub fn sum(&self) -> Float {
        self.weights.iter().sum()
    }
}

/// Per-axis resampling weights for every destination index.
///
/// The table depends only on the two lengths and the kernel, so one table
/// serves every row (or column) of a pass.
#[derive(Clone, Debug)]
pub struct WeightTable {
    /// Length of the axis in the source.
    source_len: usize,

    /// Source length divided by destination length.
    scale: Float,

    /// Half-width of the footprint in source pixels.
    support: Float,

    /// One entry per destination index.
    entries: Vec<ResampleWeight>,
}

impl WeightTable {
    /// Computes the weights for resampling an axis of `source_len` pixels to
    /// `dest_len` pixels.
    ///
    /// When downsampling, the kernel is stretched by the scale factor so every
    /// source pixel still contributes.
    ///
    /// * `source_len` - Length of the axis in the source.
    /// * `dest_len`   - Length of the axis in the destination.
    /// * `kernel`     - Reconstruction kernel.
    pub fn new(source_len: usize, dest_len: usize, kernel: &dyn Kernel) -> Result<Self> {
        if source_len == 0 || dest_len == 0 {
            return Err(ResizeError::InvalidDimension(format!(
                "source length={source_len}, destination length={dest_len}"
            )));
        }

        let scale = source_len as Float / dest_len as Float;
        let downsampling = scale > 1.0;
        let support = if downsampling {
            kernel.radius() * scale
        } else {
            kernel.radius()
        };

        let last = (source_len - 1) as Float;
        let entries = (0..dest_len)
            .map(|d| {
                // Destination pixel center in source coordinates.
                let center = (d as Float + 0.5) * scale - 0.5;

                let left = clamp((center - support).floor(), 0.0, last) as usize;
                let right = clamp((center + support).floor(), 0.0, last) as usize;

                let mut weights: Vec<Float> = (left..=right)
                    .map(|s| {
                        let distance = s as Float - center;
                        if downsampling {
                            kernel.evaluate(distance / scale)
                        } else {
                            kernel.evaluate(distance)
                        }
                    })
                    .collect();

                // Normalize filter weights; a zero sum leaves a zero row.
                let sum: Float = weights.iter().sum();
                if sum > 0.0 {
                    let inv_sum = 1.0 / sum;
                    weights.iter_mut().for_each(|w| *w *= inv_sum);
                }

                ResampleWeight {
                    first: left,
                    weights,
                }
            })
            .collect();

        Ok(Self {
            source_len,
            scale,
            support,
            entries,
        })
    }

    /// Returns the source length.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Returns the destination length.
    pub fn dest_len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the ratio of source length to destination length.
    pub fn scale(&self) -> Float {
        self.scale
    }

    /// Returns the half-width of the kernel footprint in source pixels.
    pub fn support(&self) -> Float {
        self.support
    }

    /// Returns the weights for a destination index.
    ///
    /// * `d` - Destination index.
    pub fn get(&self, d: usize) -> &ResampleWeight {
        &self.entries[d]
    }

    /// Returns an iterator over the entries in destination order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResampleWeight> {
        self.entries.iter()
    }
}
