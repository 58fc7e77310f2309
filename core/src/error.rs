//! Error types for resizing

use crate::common::Axis;
use thiserror::Error;

/// Errors that can occur while resizing a raster.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// No source raster was supplied.
    #[error("source image is nil")]
    NilSource,

    /// A requested dimension or an axis length is not positive.
    #[error("invalid dimensions: {0}")]
    InvalidDimension(String),

    /// The weight table for a pass could not be built.
    #[error("failed to calculate weights for {axis} resize")]
    WeightTableUnavailable {
        /// Axis of the failed pass.
        axis: Axis,

        /// Why the table could not be built.
        #[source]
        source: Box<ResizeError>,
    },
}

/// Result type for resize operations
pub type Result<T> = std::result::Result<T, ResizeError>;
