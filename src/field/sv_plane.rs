//! Square saturation/value field for a fixed hue.
//!
//! Saturation grows to the right and value grows upwards: the top-left pixel
//! is white, the top-right one the pure hue, the bottom row black.

use huewheel_color::math::clamp;
use huewheel_color::{Argb, Hsv, hsv_to_rgb};
use web_time::Instant;

use super::RasterBuffer;

/// The saturation/value raster, regenerated only when its hue changes.
#[derive(Debug, Clone)]
pub struct SvPlaneField {
    range: u32,
    hue: f32,
    hue_color: Argb,
    raster: RasterBuffer,
    generation: u64,
}

impl SvPlaneField {
    /// Build a plane whose coordinates run from 0 to `range` at `hue`.
    pub fn new(range: u32, hue: f32) -> Self {
        Self {
            range,
            hue,
            hue_color: Argb::from_hsv(Hsv::new(hue, 1.0, 1.0)),
            raster: render(range, hue),
            generation: 1,
        }
    }

    /// Largest coordinate on either axis.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Raster side length, `range + 1`.
    pub fn size(&self) -> u32 {
        self.range + 1
    }

    /// The hue the current raster was built for.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Fully saturated, full value color of the current hue.
    pub fn hue_color(&self) -> Argb {
        self.hue_color
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    /// Number of rasters built so far, including the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Update the governing hue, rebuilding only if it differs from the last
    /// one. Returns whether a rebuild happened.
    pub fn set_hue(&mut self, hue: f32) -> bool {
        if self.hue == hue {
            return false;
        }
        self.hue = hue;
        let started = Instant::now();
        self.hue_color = Argb::from_hsv(Hsv::new(hue, 1.0, 1.0));
        self.raster = render(self.range, hue);
        self.generation += 1;
        log::debug!(
            "Rebuilt SV plane (range {}) for hue {:.4} in {:?}",
            self.range,
            hue,
            started.elapsed()
        );
        true
    }

    /// Saturation and value under `(x, y)`.
    ///
    /// The point is clamped into the plane first, so positions off the plane
    /// resolve to its nearest edge.
    pub fn point_to_sat_value(&self, x: i32, y: i32) -> (f32, f32) {
        let range = self.range as i32;
        if range == 0 {
            return (0.0, 1.0);
        }
        let x = clamp(x, 0, range);
        let y = clamp(y, 0, range);
        let saturation = x as f32 / range as f32;
        let value = (range - y) as f32 / range as f32;
        (saturation, value)
    }

    /// Raster position of the selection marker for `(saturation, value)`.
    pub fn marker(&self, saturation: f32, value: f32) -> (i32, i32) {
        let range = self.range as f32;
        ((saturation * range) as i32, (range - value * range) as i32)
    }
}

/// Rasterize a complete plane. Pure; the field caches the result.
pub fn render(range: u32, hue: f32) -> RasterBuffer {
    let mut raster = RasterBuffer::new(range + 1);
    let span = range.max(1) as f32;
    raster.fill_with(|x, y| {
        let saturation = x as f32 / span;
        let value = (range - y) as f32 / span;
        Argb::pack(hsv_to_rgb(hue, saturation, value))
    });
    raster
}
