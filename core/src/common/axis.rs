//! Axis

use std::fmt;

/// Image axis along which a resampling pass runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal; a pass along X changes the width.
    X = 0,
    /// Vertical; a pass along Y changes the height.
    Y = 1,
}

impl Axis {
    /// Returns the other axis.
    pub fn other(&self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "horizontal"),
            Axis::Y => write!(f, "vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_axis_swaps() {
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
    }

    #[test]
    fn display_names_pass_direction() {
        assert_eq!(Axis::X.to_string(), "horizontal");
        assert_eq!(Axis::Y.to_string(), "vertical");
    }
}
