//! HSV and float RGB color models and the conversions between them.

use serde::{Deserialize, Serialize};

use crate::math::{clamp_f32, unit, wrap_hue};

/// A color in the HSV cylinder.
///
/// `hue` is cyclic in `[0, 1)`, `saturation` and `value` are clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue as a fraction of a full turn
    pub hue: f32,
    /// Distance from the neutral axis
    pub saturation: f32,
    /// Brightness
    pub value: f32,
}

impl Hsv {
    /// Create a color, wrapping the hue and clamping saturation and value.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: unit(saturation),
            value: unit(value),
        }
    }

    /// Same hue and saturation with a different value.
    pub fn with_value(self, value: f32) -> Self {
        Self::new(self.hue, self.saturation, value)
    }

    /// Same value with a different hue and saturation.
    pub fn with_hue_saturation(self, hue: f32, saturation: f32) -> Self {
        Self::new(hue, saturation, self.value)
    }

    /// Same hue with a different saturation and value.
    pub fn with_saturation_value(self, saturation: f32, value: f32) -> Self {
        Self::new(self.hue, saturation, value)
    }

    /// Convert to float RGB.
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl Default for Hsv {
    /// Pure red: hue 0, full saturation and value.
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            value: 1.0,
        }
    }
}

/// A color as three float channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    /// Create a color, clamping every channel to `[0, 1]`.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
        }
    }

    /// Channels as an array in R, G, B order.
    pub fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.red, self.green, self.blue)
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([red, green, blue]: [f32; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// Convert HSV to RGB with the piecewise-linear six sector unrolling of the
/// HSV cone.
///
/// The hue is split into six 60° sectors; inside a sector one channel stays at
/// `v` and the other two are attenuated by the saturation and the fractional
/// position within the sector.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s <= 0.0 {
        return Rgb::new(v, v, v);
    }
    let hue = h * 6.0;
    let sector_floor = hue.floor();
    let f = hue - sector_floor;
    let sector = (sector_floor as i32).rem_euclid(6);

    let (mut r, mut g, mut b) = (v, v, v);
    match sector {
        0 => {
            g *= 1.0 - s * (1.0 - f);
            b *= 1.0 - s;
        }
        1 => {
            r *= 1.0 - s * f;
            b *= 1.0 - s;
        }
        2 => {
            r *= 1.0 - s;
            b *= 1.0 - s * (1.0 - f);
        }
        3 => {
            r *= 1.0 - s;
            g *= 1.0 - s * f;
        }
        4 => {
            r *= 1.0 - s * (1.0 - f);
            g *= 1.0 - s;
        }
        _ => {
            g *= 1.0 - s;
            b *= 1.0 - s * f;
        }
    }
    Rgb::new(r, g, b)
}

/// Convert RGB to HSV.
///
/// `v` is the largest channel and `s` the spread relative to it (0 for black).
/// The hue of an achromatic color is 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max != 0.0 { chroma / max } else { chroma };

    Hsv {
        hue: hue_of(r, g, b, max, chroma),
        saturation: unit(saturation),
        value: unit(max),
    }
}

fn hue_of(r: f32, g: f32, b: f32, max: f32, chroma: f32) -> f32 {
    if chroma <= 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        let h = (g - b) / chroma;
        if h < 0.0 {
            h + 6.0
        } else {
            h
        }
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    clamp_f32(sector / 6.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn rgb_approx(rgb: Rgb, expected: [f32; 3]) -> bool {
        rgb.to_array()
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert!(rgb_approx(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
        assert!(rgb_approx(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(rgb_approx(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsv_to_rgb_secondaries() {
        assert!(rgb_approx(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), [1.0, 1.0, 0.0]));
        assert!(rgb_approx(hsv_to_rgb(0.5, 1.0, 1.0), [0.0, 1.0, 1.0]));
        assert!(rgb_approx(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), [1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsv_to_rgb_hue_one_is_red() {
        assert!(rgb_approx(hsv_to_rgb(1.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsv_to_rgb_achromatic() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 0.5), Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(hsv_to_rgb(0.7, -1.0, 0.25), Rgb::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_hsv_to_rgb_clamps_output() {
        let rgb = hsv_to_rgb(0.1, 1.0, 3.0);
        assert!(rgb.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_rgb_to_hsv_black_and_white() {
        let black = rgb_to_hsv(0.0, 0.0, 0.0);
        assert_eq!(black.saturation, 0.0);
        assert_eq!(black.value, 0.0);

        let white = rgb_to_hsv(1.0, 1.0, 1.0);
        assert_eq!(white.saturation, 0.0);
        assert_eq!(white.value, 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_magenta_wraps() {
        // max is red with blue > green, the raw sector is negative
        let hsv = rgb_to_hsv(1.0, 0.0, 0.5);
        assert!(approx_eq(hsv.hue, 11.0 / 12.0));
        assert!(approx_eq(hsv.saturation, 1.0));
    }

    #[test]
    fn test_hsv_rgb_hsv_roundtrip() {
        let steps = 24;
        for hi in 0..steps {
            for si in 1..=steps {
                for vi in 1..=steps {
                    let h = hi as f32 / steps as f32;
                    let s = si as f32 / steps as f32;
                    let v = vi as f32 / steps as f32;
                    let back = hsv_to_rgb(h, s, v).to_hsv();
                    assert!(approx_eq(back.saturation, s), "s at {h} {s} {v}");
                    assert!(approx_eq(back.value, v), "v at {h} {s} {v}");
                    let dh = (back.hue - h).abs();
                    assert!(dh < 1e-4 || (1.0 - dh) < 1e-4, "h at {h} {s} {v}");
                }
            }
        }
    }

    #[test]
    fn test_hsv_new_normalizes() {
        let hsv = Hsv::new(1.25, 1.5, -0.5);
        assert!(approx_eq(hsv.hue, 0.25));
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 0.0);
    }
}
