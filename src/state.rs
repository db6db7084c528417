//! The single source of truth for the current color.
//!
//! `ColorState` owns the canonical HSV triple and the palette parameters,
//! keeps both color fields in step with them, and fans changes out to its
//! listeners. Every HSV mutator comes in two flavours: a notifying one for
//! input that originates here (pointer on a field) and a silent one for
//! synchronization pushed from another view, which is what keeps the update
//! graph acyclic.

use huewheel_color::math::{clamp, fractional};
use huewheel_color::{Argb, Hsv, hsv_to_rgb};

use crate::callback::{ListenerId, Listeners};
use crate::constants::{
    DEFAULT_DIVISION_COUNT, DEFAULT_PLANE_RANGE, DEFAULT_WHEEL_RADIUS, MAX_DIVISION_COUNT,
    MAX_RASTER_EXTENT, MIN_DIVISION_COUNT, MIN_RASTER_EXTENT,
};
use crate::field::{HueWheelField, Marker, SvPlaneField};

/// How the palette is derived from the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteParams {
    /// Number of evenly spaced hues, in `[2, 360]`
    pub division_count: usize,
    /// Traverse hues clockwise after the anchor
    pub reverse: bool,
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            division_count: DEFAULT_DIVISION_COUNT,
            reverse: false,
        }
    }
}

/// Canonical color state plus the two rasters that depend on it.
#[derive(Debug)]
pub struct ColorState {
    hsv: Hsv,
    params: PaletteParams,
    wheel: HueWheelField,
    plane: SvPlaneField,
    color_listeners: Listeners<Hsv>,
    palette_listeners: Listeners<PaletteParams>,
}

impl ColorState {
    /// Default geometry, pure red, 12 forward divisions.
    pub fn new() -> Self {
        Self::with_geometry(DEFAULT_WHEEL_RADIUS, DEFAULT_PLANE_RANGE)
    }

    /// Default color and palette with custom raster sizes, each clamped to
    /// `[1, 2048]`.
    pub fn with_geometry(wheel_radius: u32, plane_range: u32) -> Self {
        let wheel_radius = clamp(wheel_radius, MIN_RASTER_EXTENT, MAX_RASTER_EXTENT);
        let plane_range = clamp(plane_range, MIN_RASTER_EXTENT, MAX_RASTER_EXTENT);
        let hsv = Hsv::default();
        Self {
            hsv,
            params: PaletteParams::default(),
            wheel: HueWheelField::new(wheel_radius, hsv.value),
            plane: SvPlaneField::new(plane_range, hsv.hue),
            color_listeners: Listeners::new(),
            palette_listeners: Listeners::new(),
        }
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn params(&self) -> PaletteParams {
        self.params
    }

    pub fn division_count(&self) -> usize {
        self.params.division_count
    }

    pub fn reverse(&self) -> bool {
        self.params.reverse
    }

    pub fn wheel(&self) -> &HueWheelField {
        &self.wheel
    }

    pub fn plane(&self) -> &SvPlaneField {
        &self.plane
    }

    /// Register a "color changed" listener.
    pub fn on_color_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Hsv) + 'static,
    {
        self.color_listeners.add(listener)
    }

    /// Register a "palette parameters changed" listener.
    pub fn on_palette_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PaletteParams) + 'static,
    {
        self.palette_listeners.add(listener)
    }

    pub fn remove_color_listener(&mut self, id: ListenerId) -> bool {
        self.color_listeners.remove(id)
    }

    pub fn remove_palette_listener(&mut self, id: ListenerId) -> bool {
        self.palette_listeners.remove(id)
    }

    /// Set the color and notify color listeners.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.apply_hsv(hsv);
        log::trace!(
            "Color changed to {:?}, notifying {} listener(s)",
            self.hsv,
            self.color_listeners.len()
        );
        self.color_listeners.emit(&self.hsv);
    }

    /// Set the color without notifying anyone.
    pub fn set_hsv_silent(&mut self, hsv: Hsv) {
        self.apply_hsv(hsv);
    }

    /// Pointer input on the hue wheel: keeps the value, takes hue and
    /// saturation from the point. Notifies.
    pub fn select_on_wheel(&mut self, x: i32, y: i32) -> Hsv {
        let (hue, saturation) = self.wheel.point_to_hue_saturation(x, y);
        self.set_hsv(self.hsv.with_hue_saturation(hue, saturation));
        self.hsv
    }

    /// Pointer input on the SV plane: keeps the hue, takes saturation and
    /// value from the point. Notifies.
    pub fn select_on_plane(&mut self, x: i32, y: i32) -> Hsv {
        let (saturation, value) = self.plane.point_to_sat_value(x, y);
        self.set_hsv(self.hsv.with_saturation_value(saturation, value));
        self.hsv
    }

    /// Set the palette size, clamped to `[2, 360]`. Returns the stored count.
    pub fn set_division(&mut self, division_count: usize) -> usize {
        let clamped = clamp(division_count, MIN_DIVISION_COUNT, MAX_DIVISION_COUNT);
        if clamped != division_count {
            log::warn!(
                "Division count {} out of range, using {}",
                division_count,
                clamped
            );
        }
        self.params.division_count = clamped;
        self.palette_listeners.emit(&self.params);
        clamped
    }

    /// Set the palette traversal direction.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.params.reverse = reverse;
        self.palette_listeners.emit(&self.params);
    }

    /// The current color, packed.
    pub fn anchor_color(&self) -> Argb {
        Argb::from_hsv(self.hsv)
    }

    /// The derived palette, `division_count` packed colors.
    ///
    /// Element `i` has hue `fract(hue + i / n)`. When reversed, element 0
    /// stays the anchor and the remaining elements run the other way round
    /// the wheel.
    pub fn palette(&self) -> Vec<Argb> {
        let n = self.params.division_count;
        let mut colors = vec![Argb::TRANSPARENT; n];
        for i in 0..n {
            let hue = fractional(self.hsv.hue + i as f32 / n as f32);
            let color = Argb::pack(hsv_to_rgb(hue, self.hsv.saturation, self.hsv.value));
            let index = if self.params.reverse { (n - i) % n } else { i };
            colors[index] = color;
        }
        colors
    }

    /// Wheel markers for every palette hue.
    pub fn wheel_markers(&self) -> Vec<Marker> {
        self.wheel.markers(self.hsv.hue, self.hsv.saturation, self.params.division_count)
    }

    /// SV plane marker for the current color.
    pub fn plane_marker(&self) -> (i32, i32) {
        self.plane.marker(self.hsv.saturation, self.hsv.value)
    }

    fn apply_hsv(&mut self, hsv: Hsv) {
        self.hsv = Hsv::new(hsv.hue, hsv.saturation, hsv.value);
        self.wheel.set_value(self.hsv.value);
        self.plane.set_hue(self.hsv.hue);
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}
