//! Common numeric stuff

mod axis;
mod math;

// Re-export
pub use axis::*;
pub use math::*;
