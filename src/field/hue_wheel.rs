//! Circular hue/saturation field.
//!
//! Polar angle encodes hue (0 at 3 o'clock, increasing counter-clockwise) and
//! distance from the center encodes saturation, all at one fixed value. The
//! outermost pixel ring is anti-aliased by fading its alpha.

use std::f64::consts::PI;

use huewheel_color::math::{clamp_f32, fractional, wrap_hue};
use huewheel_color::{Argb, hsv_to_rgb};
use web_time::Instant;

use super::RasterBuffer;

/// A selection marker drawn over the wheel, in raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub x: i32,
    pub y: i32,
    /// The operation point (palette element 0) is drawn larger
    pub primary: bool,
}

/// The hue wheel raster, regenerated only when its value changes.
#[derive(Debug, Clone)]
pub struct HueWheelField {
    radius: u32,
    value: f32,
    raster: RasterBuffer,
    generation: u64,
}

impl HueWheelField {
    /// Build a wheel of the given radius at `value`.
    pub fn new(radius: u32, value: f32) -> Self {
        Self {
            radius,
            value,
            raster: render(radius, value),
            generation: 1,
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Raster side length, `2 * radius + 1`.
    pub fn diameter(&self) -> u32 {
        self.radius * 2 + 1
    }

    /// The value the current raster was built for.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    /// Number of rasters built so far, including the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Update the governing value, rebuilding only if it differs from the
    /// last one. Returns whether a rebuild happened.
    pub fn set_value(&mut self, value: f32) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        let started = Instant::now();
        self.raster = render(self.radius, value);
        self.generation += 1;
        log::debug!(
            "Rebuilt hue wheel (radius {}) for value {:.4} in {:?}",
            self.radius,
            value,
            started.elapsed()
        );
        true
    }

    /// Hue and saturation under the raster pixel `(x, y)`.
    ///
    /// Points on or beyond the rim select saturation 1, so every position
    /// resolves to a valid color.
    pub fn point_to_hue_saturation(&self, x: i32, y: i32) -> (f32, f32) {
        let radius = f64::from(self.radius);
        let dx = f64::from(x) - radius;
        let dy = radius - f64::from(y);
        let distance = (dx * dx + dy * dy).sqrt();
        let hue = wrap_hue((polar_angle(dx, dy) / (PI * 2.0)) as f32);
        let saturation = if distance < radius {
            (distance / radius) as f32
        } else {
            1.0
        };
        (hue, saturation)
    }

    /// Markers for every palette hue at the current selection.
    ///
    /// Markers sit on the circle of radius `saturation * radius`, one per
    /// division, starting at `hue`.
    pub fn markers(&self, hue: f32, saturation: f32, division_count: usize) -> Vec<Marker> {
        let r = f64::from(self.radius);
        let ring = f64::from(saturation) * r;
        (0..division_count)
            .map(|i| {
                let angle = f64::from(fractional(hue + i as f32 / division_count as f32)) * 2.0 * PI;
                Marker {
                    x: (r + round_half_up(angle.cos() * ring)) as i32,
                    y: (r - round_half_up(angle.sin() * ring)) as i32,
                    primary: i == 0,
                }
            })
            .collect()
    }
}

/// Angle between the positive x axis and `(x, y)`, in `[0, 2π)`.
///
/// The vertical axis is handled explicitly so no division by zero occurs.
pub fn polar_angle(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        return if y > 0.0 { PI / 2.0 } else { PI * 3.0 / 2.0 };
    }
    let base = (y / x).atan();
    if x < 0.0 {
        base + PI
    } else if y < 0.0 {
        base + PI * 2.0
    } else {
        base
    }
}

/// Color of the wheel at offset `(dx, dy)` from the center, y pointing up.
///
/// Fully transparent at or beyond `radius + 1`; the ring between `radius`
/// and `radius + 1` fades out linearly.
pub fn shade(radius: u32, value: f32, dx: f32, dy: f32) -> Argb {
    let r = radius as f32;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= r + 1.0 {
        return Argb::TRANSPARENT;
    }
    let hue = (polar_angle(f64::from(dx), f64::from(dy)) / (PI * 2.0)) as f32;
    let saturation = clamp_f32(distance / r, 0.0, 1.0);
    let color = Argb::pack(hsv_to_rgb(hue, saturation, value));
    let alpha = r + 1.0 - distance;
    if alpha < 1.0 {
        color.with_alpha_f32(alpha)
    } else {
        color
    }
}

/// Rasterize a complete wheel. Pure; the field caches the result.
pub fn render(radius: u32, value: f32) -> RasterBuffer {
    let mut raster = RasterBuffer::new(radius * 2 + 1);
    let r = radius as i64;
    raster.fill_with(|x, y| {
        let dx = (i64::from(x) - r) as f32;
        let dy = (r - i64::from(y)) as f32;
        shade(radius, value, dx, dy)
    });
    raster
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
