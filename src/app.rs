//! huewheel application - routes messages between the picker views.
//!
//! The picker is made of four views over one color:
//! - Hue wheel (hue and saturation) and SV plane (saturation and value),
//!   both owned by [`ColorState`]
//! - Dual slider bank (HSV and RGB channels)
//! - Hex input field
//! - Palette swatches derived from the current color
//!
//! Each message originates in exactly one view. That view is updated through
//! its notifying entry point, every other view is synchronized silently, and
//! the derived outputs are refreshed once at the end. No view ever hears
//! about a change it caused, so updates cannot cycle.

use huewheel_color::{Argb, Hsv, hex_digits, parse_hex6};

use crate::callback::ListenerId;
use crate::config::{ConfigError, Preferences};
use crate::message::Message;
use crate::slider_bank::{Channel, DualSliderBank};
use crate::state::{ColorState, PaletteParams};
use crate::swatch::{SwatchEntry, swatches};

/// Whether the hex field currently holds a usable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexInputStatus {
    #[default]
    Valid,
    /// Shown highlighted; nothing else changes until the text parses.
    Invalid,
}

/// The color picker.
#[derive(Debug)]
pub struct PickerApp {
    state: ColorState,
    sliders: DualSliderBank,
    hex_input: String,
    hex_status: HexInputStatus,
    /// Palette element 0, the color the hex field compares against
    current_color: Argb,
    swatches: Vec<SwatchEntry>,
}

impl PickerApp {
    /// Picker with default geometry, pure red and 12 divisions.
    pub fn new() -> Self {
        let mut app = Self {
            state: ColorState::new(),
            sliders: DualSliderBank::new(),
            hex_input: String::new(),
            hex_status: HexInputStatus::Valid,
            current_color: Argb::TRANSPARENT,
            swatches: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Picker configured from saved preferences.
    pub fn from_preferences(preferences: &Preferences) -> Result<Self, ConfigError> {
        let color = preferences.initial_color()?;
        let rgb = color.unpack();

        let mut state = ColorState::with_geometry(preferences.wheel_radius, preferences.plane_range);
        state.set_hsv_silent(rgb.to_hsv());
        state.set_division(preferences.division_count);
        state.set_reverse(preferences.reverse);

        let mut sliders = DualSliderBank::new();
        sliders.set_rgb_silent(rgb);

        let mut app = Self {
            state,
            sliders,
            hex_input: String::new(),
            hex_status: HexInputStatus::Valid,
            current_color: Argb::TRANSPARENT,
            swatches: Vec::new(),
        };
        app.refresh();
        log::info!(
            "Picker ready: {} with {} division(s){}",
            app.hex_input,
            app.state.division_count(),
            if app.state.reverse() { ", reversed" } else { "" }
        );
        Ok(app)
    }

    /// Handle one message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::WheelPressed { x, y } => {
                let hsv = self.state.select_on_wheel(x, y);
                self.sliders.set_hsv_silent(hsv);
            }
            Message::PlanePressed { x, y } => {
                let hsv = self.state.select_on_plane(x, y);
                self.sliders.set_hsv_silent(hsv);
            }
            Message::SliderEdited { channel, position } => {
                match self.sliders.edit(channel, position) {
                    Some(hsv) => self.state.set_hsv(hsv),
                    None => return,
                }
            }
            Message::HexInputChanged(text) => {
                if !self.handle_hex_input(text) {
                    return;
                }
            }
            Message::DivisionChanged(division_count) => {
                self.state.set_division(division_count);
            }
            Message::ReverseToggled(reverse) => {
                self.state.set_reverse(reverse);
            }
        }
        self.refresh();
    }

    /// Returns `true` if the color changed.
    fn handle_hex_input(&mut self, text: String) -> bool {
        let parsed = parse_hex6(&text);
        self.hex_input = text;

        let color = match parsed {
            Ok(color) => color,
            Err(e) => {
                log::debug!("Hex input {:?} rejected: {}", self.hex_input, e);
                self.hex_status = HexInputStatus::Invalid;
                return false;
            }
        };
        self.hex_status = HexInputStatus::Valid;

        if color == self.current_color {
            return false;
        }

        let hsv = self.sliders.set_rgb(color.unpack());
        self.state.set_hsv(hsv);
        true
    }

    /// Recompute everything derived from the color and palette parameters.
    fn refresh(&mut self) {
        let palette = self.state.palette();
        self.current_color = palette
            .first()
            .copied()
            .unwrap_or_else(|| self.state.anchor_color());

        let digits = hex_digits(self.current_color);
        if !self.hex_input.eq_ignore_ascii_case(&digits) {
            self.hex_input = digits;
            self.hex_status = HexInputStatus::Valid;
        }

        self.swatches = swatches(&palette);
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn sliders(&self) -> &DualSliderBank {
        &self.sliders
    }

    pub fn hsv(&self) -> Hsv {
        self.state.hsv()
    }

    pub fn current_color(&self) -> Argb {
        self.current_color
    }

    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    pub fn hex_status(&self) -> HexInputStatus {
        self.hex_status
    }

    pub fn swatches(&self) -> &[SwatchEntry] {
        &self.swatches
    }

    /// Position of one slider, as its spinner shows it.
    pub fn slider_position(&self, channel: Channel) -> i32 {
        self.sliders.channel(channel).position()
    }

    /// Subscribe to color changes of the canonical state.
    pub fn on_color_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Hsv) + 'static,
    {
        self.state.on_color_changed(listener)
    }

    /// Subscribe to palette parameter changes.
    pub fn on_palette_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PaletteParams) + 'static,
    {
        self.state.on_palette_changed(listener)
    }

    /// Subscribe to the slider bank's combined value-changed event.
    pub fn on_slider_value_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Hsv) + 'static,
    {
        self.sliders.on_value_changed(listener)
    }

    pub fn remove_color_listener(&mut self, id: ListenerId) -> bool {
        self.state.remove_color_listener(id)
    }

    pub fn remove_palette_listener(&mut self, id: ListenerId) -> bool {
        self.state.remove_palette_listener(id)
    }

    pub fn remove_slider_listener(&mut self, id: ListenerId) -> bool {
        self.sliders.remove_listener(id)
    }
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}
