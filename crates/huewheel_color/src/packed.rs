//! Packed 32-bit `0xAARRGGBB` colors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::{to_8bit, to_float};
use crate::hsv::{Hsv, Rgb, hsv_to_rgb};

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(u32);

impl Argb {
    /// Fully transparent black, used outside rasterized shapes.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    const ALPHA_MASK: u32 = 0xff00_0000;
    const RGB_MASK: u32 = 0x00ff_ffff;

    /// Wrap a raw packed value as is.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw packed value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack 8-bit channels with full alpha.
    pub const fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self(Self::ALPHA_MASK | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Pack float channels with full alpha, rounding half up.
    pub fn pack(rgb: Rgb) -> Self {
        Self::from_rgb8([to_8bit(rgb.red), to_8bit(rgb.green), to_8bit(rgb.blue)])
    }

    /// Convert HSV straight to a packed opaque color.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::pack(hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value))
    }

    /// The 8-bit channels, alpha discarded.
    pub const fn to_rgb8(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// The float channels, alpha discarded.
    pub fn unpack(self) -> Rgb {
        Rgb {
            red: to_float(self.red()),
            green: to_float(self.green()),
            blue: to_float(self.blue()),
        }
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Replace the alpha byte.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & Self::RGB_MASK) | ((alpha as u32) << 24))
    }

    /// Replace the alpha byte from a `[0, 1]` opacity (clamped, round half up).
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        self.with_alpha(to_8bit(alpha))
    }

    /// Channels as `[r, g, b, a]`, the byte order image encoders expect.
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({:#010x})", self.0)
    }
}

impl From<[u8; 3]> for Argb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb8(rgb)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let color = Argb::from_rgb8([0x1a, 0x2b, 0x3c]);
        assert_eq!(color.raw(), 0xff1a_2b3c);
        assert_eq!(color.alpha(), 0xff);
    }

    #[test]
    fn test_pack_unpack_all_8bit_triples() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let packed = Argb::from_rgb8([r, g, b]);
                    assert_eq!(packed.to_rgb8(), [r, g, b]);
                    assert_eq!(Argb::pack(packed.unpack()), packed);
                }
            }
        }
    }

    #[test]
    fn test_pack_rounds_and_clamps() {
        let color = Argb::pack(Rgb {
            red: 0.5,
            green: 1.5,
            blue: -0.2,
        });
        assert_eq!(color.to_rgb8(), [128, 255, 0]);
    }

    #[test]
    fn test_unpack_ignores_alpha() {
        let color = Argb::from_raw(0x0011_2233);
        let opaque = Argb::from_raw(0xff11_2233);
        assert_eq!(color.unpack(), opaque.unpack());
        assert_eq!(color.to_rgb8(), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_with_alpha() {
        let color = Argb::from_rgb8([1, 2, 3]);
        assert_eq!(color.with_alpha(0x80).raw(), 0x8001_0203);
        assert_eq!(color.with_alpha_f32(0.5).alpha(), 128);
        assert_eq!(color.with_alpha_f32(2.0).alpha(), 255);
        assert_eq!(color.with_alpha_f32(-1.0).alpha(), 0);
    }

    #[test]
    fn test_from_hsv() {
        assert_eq!(Argb::from_hsv(Hsv::default()).raw(), 0xffff_0000);
        assert_eq!(Argb::from_hsv(Hsv::new(0.0, 0.0, 0.0)), Argb::BLACK);
    }
}
