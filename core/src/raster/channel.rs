//! Channel storage

use image::Primitive;

/// Storage type for one channel of a pixel. Values are widened to 16 bits on
/// read and narrowed back on write.
pub trait Channel: Primitive + Send + Sync + 'static {
    /// Number of bits stored per channel.
    const BITS: u32;

    /// Widens a stored value to the 16-bit range.
    fn widen(self) -> u16;

    /// Narrows a 16-bit value to the storage depth.
    ///
    /// * `v` - 16-bit channel value.
    fn narrow(v: u16) -> Self;
}

impl Channel for u8 {
    const BITS: u32 = 8;

    /// Replicates the byte so 0xff widens to 0xffff.
    #[inline]
    fn widen(self) -> u16 {
        self as u16 * 257
    }

    /// Keeps the high byte.
    #[inline]
    fn narrow(v: u16) -> Self {
        (v >> 8) as u8
    }
}

impl Channel for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn widen(self) -> u16 {
        self
    }

    #[inline]
    fn narrow(v: u16) -> Self {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn u8_widens_to_full_range() {
        assert_eq!(0u8.widen(), 0);
        assert_eq!(128u8.widen(), 0x8080);
        assert_eq!(255u8.widen(), u16::MAX);
    }

    #[test]
    fn u8_narrows_to_high_byte() {
        assert_eq!(u8::narrow(0x00ff), 0);
        assert_eq!(u8::narrow(0x8000), 0x80);
        assert_eq!(u8::narrow(u16::MAX), 255);
    }

    fn round_trip<P: Channel>(v: P) -> P {
        P::narrow(v.widen())
    }

    #[test]
    fn generic_round_trip_uses_channel_conversions() {
        assert_eq!(round_trip(0x7fu8), 0x7f);
        assert_eq!(round_trip(0x1234u16), 0x1234);
    }

    proptest! {
        #[test]
        fn u8_survives_widening_and_narrowing(v in any::<u8>()) {
            prop_assert_eq!(u8::narrow(v.widen()), v);
        }
    }
}
