//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod common;
pub mod error;
pub mod image_io;
pub mod kernel;
pub mod raster;
pub mod resample;

pub use error::{ResizeError, Result};
pub use kernel::{ArcKernel, Kernel, KernelData};
pub use raster::{Channel, PixelBuffer, Raster, Rgba16, Rgba16Buffer, Rgba8Buffer};
pub use resample::resize;
