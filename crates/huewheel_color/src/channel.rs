//! Conversions between normalized channel values and integer scales.
//!
//! Every float-to-integer conversion rounds half up and then saturates, so an
//! 8-bit channel, a hue angle in degrees and a slider position all share the
//! same rounding rule.

use crate::math::{clamp, clamp_f32};

/// Largest 8-bit channel value.
pub const CHANNEL_MAX: u8 = u8::MAX;

/// Full circle in integer degrees.
pub const DEGREES_MAX: i32 = 360;

/// Convert a `[0, 1]` float to an 8-bit channel value (round half up, clamped).
pub fn to_8bit(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    let scaled = (value * 255.0 + 0.5) as i32;
    clamp(scaled, 0, i32::from(CHANNEL_MAX)) as u8
}

/// Convert an 8-bit channel value to a float in `[0, 1]`.
pub fn to_float(value: u8) -> f32 {
    clamp_f32(f32::from(value) / 255.0, 0.0, 1.0)
}

/// Map a normalized value onto the integer range `[min, max]`.
pub fn to_range(value: f32, min: i32, max: i32) -> i32 {
    let span = (max - min) as f32;
    let scaled = (value * span + min as f32 + 0.5).floor() as i32;
    clamp(scaled, min, max)
}

/// Map an integer position in `[min, max]` back to `[0, 1]`.
///
/// Positions outside the range are saturated first. A degenerate range maps
/// everything to 0.
pub fn from_range(position: i32, min: i32, max: i32) -> f32 {
    if max <= min {
        return 0.0;
    }
    let position = clamp(position, min, max);
    (position - min) as f32 / (max - min) as f32
}

/// Hue in `[0, 1]` to an integer angle in `[0, 360]`.
pub fn hue_to_degrees(hue: f32) -> i32 {
    to_range(hue, 0, DEGREES_MAX)
}

/// Integer angle in `[0, 360]` to a hue in `[0, 1]`.
pub fn degrees_to_hue(degrees: i32) -> f32 {
    from_range(degrees, 0, DEGREES_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_8bit_rounds_half_up() {
        assert_eq!(to_8bit(0.0), 0);
        assert_eq!(to_8bit(1.0), 255);
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(to_8bit(0.5), 128);
        assert_eq!(to_8bit(1.0 / 255.0), 1);
    }

    #[test]
    fn test_to_8bit_clamps() {
        assert_eq!(to_8bit(-0.5), 0);
        assert_eq!(to_8bit(2.0), 255);
        assert_eq!(to_8bit(f32::NAN), 0);
    }

    #[test]
    fn test_8bit_float_roundtrip() {
        for value in 0..=255u8 {
            assert_eq!(to_8bit(to_float(value)), value);
        }
    }

    #[test]
    fn test_range_mapping() {
        assert_eq!(to_range(0.0, 0, 255), 0);
        assert_eq!(to_range(1.0, 0, 255), 255);
        assert_eq!(to_range(2.0, 0, 255), 255);
        assert_eq!(from_range(255, 0, 255), 1.0);
        assert_eq!(from_range(-3, 0, 255), 0.0);
        assert_eq!(from_range(5, 3, 3), 0.0);
    }

    #[test]
    fn test_degrees() {
        assert_eq!(hue_to_degrees(0.0), 0);
        assert_eq!(hue_to_degrees(0.5), 180);
        assert_eq!(hue_to_degrees(1.0), 360);
        assert_eq!(degrees_to_hue(90), 0.25);
        for degrees in 0..=360 {
            assert_eq!(hue_to_degrees(degrees_to_hue(degrees)), degrees);
        }
    }
}
