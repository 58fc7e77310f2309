//! Math helpers

use num_traits::Num;
use std::ops::Neg;

/// Use 64-bit precision for floating point numbers. Channel sums are
/// accumulated at this precision.
pub type Float = f64;

/// Default signed integer used for requested image dimensions.
pub type Int = i32;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// Largest value of a 16-bit channel.
pub const CHANNEL_MAX: Float = u16::MAX as Float;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Clamps a value to the range [low, high].
///
/// * `val`  - The value.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Return the sine of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn sin(theta: Float) -> Float {
    theta.sin()
}

/// Clamps an accumulated channel sum into the 16-bit range and rounds it to
/// the nearest integer.
///
/// * `v` - Accumulated channel value.
#[inline]
pub fn clamp_channel(v: Float) -> u16 {
    (clamp(v, 0.0, CHANNEL_MAX) + 0.5).floor().min(CHANNEL_MAX) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn abs_of_negative_returns_positive() {
        assert_eq!(abs(-3), 3);
        assert_eq!(abs(2.5), 2.5);
    }

    #[test]
    fn clamp_keeps_value_in_range() {
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(5, 0, 10), 5);
    }

    #[test]
    fn clamp_channel_clips_ringing_overshoot() {
        assert_eq!(clamp_channel(-120.25), 0);
        assert_eq!(clamp_channel(70000.0), u16::MAX);
        assert_eq!(clamp_channel(65534.9999), u16::MAX);
        assert_eq!(clamp_channel(127.4), 127);
        assert_eq!(clamp_channel(127.5), 128);
    }

    proptest! {
        #[test]
        fn clamp_channel_never_leaves_channel_range(v in -1.0e6..1.0e6f64) {
            let c = clamp_channel(v) as Float;
            prop_assert!((0.0..=CHANNEL_MAX).contains(&c));
        }
    }
}
