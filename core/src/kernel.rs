//! Kernel

use crate::common::*;
use std::sync::Arc;

/// Resampling kernel interface. A kernel is a 1-D function centered at the
/// origin that is zero beyond its radius.
pub trait Kernel {
    /// Return the kernel parameters.
    fn get_data(&self) -> &KernelData;

    /// Returns value of the kernel at a given offset.
    ///
    /// * `x` - Offset of the sample from the center of the kernel.
    fn evaluate(&self, x: Float) -> Float;

    /// Returns the radius beyond which the kernel is 0.
    fn radius(&self) -> Float {
        self.get_data().radius
    }
}

/// Atomic reference counted `Kernel`.
pub type ArcKernel = Arc<dyn Kernel + Send + Sync>;

/// Data for kernels centered at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KernelData {
    /// Radius of the kernel; beyond this kernel is 0.
    pub radius: Float,

    /// Reciprocal of kernel radius.
    pub inv_radius: Float,
}

impl KernelData {
    /// Returns a new instance of `KernelData`.
    ///
    /// * `radius` - Radius of the kernel; beyond this kernel is 0.
    pub fn new(radius: Float) -> Self {
        Self {
            radius,
            inv_radius: 1.0 / radius,
        }
    }
}
