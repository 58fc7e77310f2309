//! Lanczos Filter

use lanczos_core::common::*;
use lanczos_core::kernel::*;

/// Radius used by `LanczosFilter::default()`.
pub const DEFAULT_LANCZOS_RADIUS: u32 = 3;

/// Implements the Lanczos windowed sinc filter. The sinc function is windowed
/// by a second, wider sinc lobe so that it falls to 0 at the radius.
///
/// Radius 2 rings less and looks softer; radius 3 is sharper.
#[derive(Clone, Debug)]
pub struct LanczosFilter {
    /// Filter data.
    pub data: KernelData,
}

impl LanczosFilter {
    /// Returns a new instance of `LanczosFilter`.
    ///
    /// * `radius` - Number of sinc lobes on each side of the center; beyond
    ///              this filter is 0.
    pub fn new(radius: u32) -> Self {
        assert!(radius > 0, "Lanczos radius must be positive");
        Self {
            data: KernelData::new(radius as Float),
        }
    }

    /// Calculates the windowed sinc function for a given distance.
    ///
    /// * `x` - Distance from center of filter.
    fn windowed_sinc(&self, x: Float) -> Float {
        let x = abs(x);
        if x < self.data.radius {
            sinc(x) * sinc(x * self.data.inv_radius)
        } else {
            0.0
        }
    }
}

impl Default for LanczosFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LANCZOS_RADIUS)
    }
}

impl Kernel for LanczosFilter {
    /// Return the filter parameters.
    fn get_data(&self) -> &KernelData {
        &self.data
    }

    /// Returns value of the filter at a given offset.
    ///
    /// * `x` - Offset of the sample from the center of the filter.
    fn evaluate(&self, x: Float) -> Float {
        self.windowed_sinc(x)
    }
}

/// Evaluates the normalized sinc function.
///
/// `x` - Point to evaluate sinc function at.
pub fn sinc(x: Float) -> Float {
    if x == 0.0 {
        1.0
    } else {
        sin(PI * x) / (PI * x)
    }
}
