//! Filters

mod lanczos;

// Re-export.
pub use lanczos::*;
