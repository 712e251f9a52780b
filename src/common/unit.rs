//! Unit conversion utilities.
//!
//! Callers describe geometry in inches and font sizes in points. DrawingML wants
//! integer EMUs (English Metric Units) for lengths and hundredths of a point for
//! font sizes.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs, rounding to the nearest integer.
///
/// Rounding (not truncation) keeps repeated small offsets such as 0.02" from
/// drifting by one EMU each.
///
/// # Examples
///
/// ```
/// use slidepress::common::unit::inches_to_emu;
/// assert_eq!(inches_to_emu(1.0), 914_400);
/// assert_eq!(inches_to_emu(0.5), 457_200);
/// ```
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert a font size in points to the `sz` attribute value (hundredths of a point).
///
/// # Examples
///
/// ```
/// use slidepress::common::unit::pt_to_hundredths;
/// assert_eq!(pt_to_hundredths(18.0), 1800);
/// assert_eq!(pt_to_hundredths(10.5), 1050);
/// ```
#[inline]
pub fn pt_to_hundredths(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(0.0), 0);
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
    }

    #[test]
    fn test_rounds_instead_of_truncating() {
        // 0.02" is 18288 EMU exactly, 1e-6" is 0.9144 EMU
        assert_eq!(inches_to_emu(0.02), 18_288);
        assert_eq!(inches_to_emu(0.000_001), 1);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_hundredths(28.0), 2800);
        assert_eq!(pt_to_hundredths(0.0), 0);
    }

    proptest! {
        #[test]
        fn inches_to_emu_is_monotonic(a in 0.0f64..1000.0, b in 0.0f64..1000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(inches_to_emu(lo) <= inches_to_emu(hi));
        }

        #[test]
        fn inches_to_emu_is_non_negative(a in 0.0f64..1000.0) {
            prop_assert!(inches_to_emu(a) >= 0);
        }
    }
}
