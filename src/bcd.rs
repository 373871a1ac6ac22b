//! Packed binary-coded-decimal conversions used by decimal-mode
//! arithmetic. A packed BCD byte stores one decimal digit per nibble,
//! so `$42` represents forty-two.

/// Converts a packed BCD byte to its binary value.
///
/// No validation is performed; nibbles above 9 produce the same
/// out-of-range results the hardware would.
pub fn from_bcd(v: u8) -> u8 {
    let low = v & 0x0f;
    let high = v >> 4;
    high * 10 + low
}

/// Converts a binary value to packed BCD.
///
/// Inputs of 100 or more keep only the low two decimal digits, which is
/// what decimal-mode carry-out relies on.
pub fn to_bcd(v: u8) -> u8 {
    let low = v % 10;
    let high = (v / 10) % 10;
    high << 4 | low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bcd_digits() {
        assert_eq!(from_bcd(0x42), 42);
        assert_eq!(from_bcd(0x00), 0);
        assert_eq!(from_bcd(0x99), 99);
    }

    #[test]
    fn to_bcd_digits() {
        assert_eq!(to_bcd(42), 0x42);
        assert_eq!(to_bcd(0), 0x00);
        assert_eq!(to_bcd(99), 0x99);
    }

    #[test]
    fn to_bcd_overflow_keeps_low_digits() {
        assert_eq!(to_bcd(112), 0x12);
        assert_eq!(to_bcd(100), 0x00);
    }

    #[test]
    fn round_trip() {
        for n in 0..=99u8 {
            assert_eq!(from_bcd(to_bcd(n)), n);
        }
    }
}
