//! Saturating arithmetic helpers shared by the conversion routines.

/// Saturate `value` into `[min, max]`.
///
/// Unlike [`Ord::clamp`] and [`f32::clamp`] this never panics when the bounds
/// are inverted; `min` wins in that case. Works for both integer and floating
/// point operands.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Saturate a float into `[min, max]`, mapping NaN to `min`.
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    clamp(value, min, max)
}

/// Clamp into the unit interval.
pub fn unit(value: f32) -> f32 {
    clamp_f32(value, 0.0, 1.0)
}

/// Fractional part of `value` (value minus its integer part).
///
/// Used to wrap palette hues past 1.0. Negative inputs keep their sign, the
/// same as truncating toward zero.
pub fn fractional(value: f32) -> f32 {
    value - value.trunc()
}

/// Wrap a hue into `[0, 1)`.
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_integer() {
        assert_eq!(clamp(-5, 0, 255), 0);
        assert_eq!(clamp(300, 0, 255), 255);
        assert_eq!(clamp(42, 0, 255), 42);
    }

    #[test]
    fn test_clamp_float() {
        assert_eq!(clamp(1.5_f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.1_f32, 0.0, 1.0), 0.0);
        assert_eq!(clamp_f32(f32::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(5, 10, 0), 10);
    }

    #[test]
    fn test_fractional() {
        assert!((fractional(1.25) - 0.25).abs() < 1e-6);
        assert_eq!(fractional(0.5), 0.5);
        assert_eq!(fractional(2.0), 0.0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(1.0), 0.0);
        assert!((wrap_hue(1.25) - 0.25).abs() < 1e-6);
        assert!((wrap_hue(-0.25) - 0.75).abs() < 1e-6);
        assert_eq!(wrap_hue(-1e-9), 0.0);
        assert_eq!(wrap_hue(f32::NAN), 0.0);
    }
}
