//! Linked HSV and RGB numeric channels.
//!
//! The bank keeps two groups of three channels that always describe the same
//! color. A user edit in one group recomputes the other group silently and
//! then fires a single combined "value changed" event carrying the HSV
//! triple. Pushes from outside (another view changed the color) update both
//! groups and fire nothing, unless the notifying variant is used.

use huewheel_color::channel::{from_range, to_range};
use huewheel_color::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};

use crate::callback::{ListenerId, Listeners};

/// One of the six channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 6] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Value,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
    ];

    /// Single letter label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Value => "V",
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Whether the channel belongs to the HSV group.
    pub fn is_hsv(&self) -> bool {
        matches!(self, Channel::Hue | Channel::Saturation | Channel::Value)
    }

    fn slot(&self) -> usize {
        match self {
            Channel::Hue | Channel::Red => 0,
            Channel::Saturation | Channel::Green => 1,
            Channel::Value | Channel::Blue => 2,
        }
    }
}

/// A numeric channel stored both as a normalized float and as an integer
/// position within `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderChannel {
    channel: Channel,
    min: i32,
    max: i32,
    position: i32,
    normalized: f32,
}

impl SliderChannel {
    /// Create a channel at `position`, clamped into `[min, max]`.
    pub fn new(channel: Channel, position: i32, min: i32, max: i32) -> Self {
        let normalized = from_range(position, min, max);
        Self {
            channel,
            min,
            max,
            position: to_range(normalized, min, max),
            normalized,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn label(&self) -> &'static str {
        self.channel.label()
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Integer position shown on the slider.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Normalized value in `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        self.normalized
    }

    /// Externally driven update: keeps the float exactly, moves the position
    /// to match.
    pub fn set_normalized(&mut self, value: f32) {
        self.normalized = value;
        self.position = to_range(value, self.min, self.max);
    }

    /// User edit of the integer position. Returns `false` when the clamped
    /// position equals the current one, in which case nothing changes.
    pub fn edit(&mut self, position: i32) -> bool {
        let normalized = from_range(position, self.min, self.max);
        let position = to_range(normalized, self.min, self.max);
        if position == self.position {
            return false;
        }
        self.position = position;
        self.normalized = normalized;
        true
    }
}

/// Six linked channels: H `[0, 360]`, S, V, R, G, B `[0, 255]`.
#[derive(Debug)]
pub struct DualSliderBank {
    hsv: [SliderChannel; 3],
    rgb: [SliderChannel; 3],
    listeners: Listeners<Hsv>,
}

impl DualSliderBank {
    /// A bank showing pure red.
    pub fn new() -> Self {
        Self {
            hsv: [
                SliderChannel::new(Channel::Hue, 0, 0, 360),
                SliderChannel::new(Channel::Saturation, 255, 0, 255),
                SliderChannel::new(Channel::Value, 255, 0, 255),
            ],
            rgb: [
                SliderChannel::new(Channel::Red, 255, 0, 255),
                SliderChannel::new(Channel::Green, 0, 0, 255),
                SliderChannel::new(Channel::Blue, 0, 0, 255),
            ],
            listeners: Listeners::new(),
        }
    }

    pub fn channel(&self, channel: Channel) -> &SliderChannel {
        if channel.is_hsv() {
            &self.hsv[channel.slot()]
        } else {
            &self.rgb[channel.slot()]
        }
    }

    /// All channels in display order.
    pub fn channels(&self) -> impl Iterator<Item = &SliderChannel> {
        self.hsv.iter().chain(self.rgb.iter())
    }

    /// The HSV group as a color.
    pub fn hsv(&self) -> Hsv {
        let [h, s, v] = &self.hsv;
        Hsv::new(h.normalized(), s.normalized(), v.normalized())
    }

    /// The RGB group as a color.
    pub fn rgb(&self) -> Rgb {
        let [r, g, b] = &self.rgb;
        Rgb::new(r.normalized(), g.normalized(), b.normalized())
    }

    /// Register a "value changed" listener.
    pub fn on_value_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Hsv) + 'static,
    {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// User edit of one channel.
    ///
    /// The other group is recomputed without notification, then one combined
    /// event is fired. Returns the new color, or `None` if the position did
    /// not change.
    pub fn edit(&mut self, channel: Channel, position: i32) -> Option<Hsv> {
        let slot = channel.slot();
        if channel.is_hsv() {
            if !self.hsv[slot].edit(position) {
                return None;
            }
            let [h, s, v] = self.normalized_hsv();
            self.push_rgb(hsv_to_rgb(h, s, v));
        } else {
            if !self.rgb[slot].edit(position) {
                return None;
            }
            let rgb = self.rgb();
            self.push_hsv(rgb_to_hsv(rgb.red, rgb.green, rgb.blue));
        }
        log::debug!("Slider {} edited to {}", channel.label(), position);
        Some(self.notify())
    }

    /// Synchronize from another view without firing the bank's event.
    pub fn set_hsv_silent(&mut self, hsv: Hsv) {
        self.push_hsv(hsv);
        self.push_rgb(hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value));
    }

    /// Synchronize from another view without firing the bank's event.
    pub fn set_rgb_silent(&mut self, rgb: Rgb) {
        self.push_rgb(rgb);
        self.push_hsv(rgb_to_hsv(rgb.red, rgb.green, rgb.blue));
    }

    /// Set both groups from HSV and fire the bank's event.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Hsv {
        self.set_hsv_silent(hsv);
        self.notify()
    }

    /// Set both groups from RGB and fire the bank's event.
    pub fn set_rgb(&mut self, rgb: Rgb) -> Hsv {
        self.set_rgb_silent(rgb);
        self.notify()
    }

    fn normalized_hsv(&self) -> [f32; 3] {
        let [h, s, v] = &self.hsv;
        [h.normalized(), s.normalized(), v.normalized()]
    }

    fn push_hsv(&mut self, hsv: Hsv) {
        let [h, s, v] = &mut self.hsv;
        h.set_normalized(hsv.hue);
        s.set_normalized(hsv.saturation);
        v.set_normalized(hsv.value);
    }

    fn push_rgb(&mut self, rgb: Rgb) {
        let [r, g, b] = &mut self.rgb;
        r.set_normalized(rgb.red);
        g.set_normalized(rgb.green);
        b.set_normalized(rgb.blue);
    }

    fn notify(&mut self) -> Hsv {
        let hsv = self.hsv();
        self.listeners.emit(&hsv);
        hsv
    }
}

impl Default for DualSliderBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_color::to_8bit;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn positions(bank: &DualSliderBank) -> Vec<i32> {
        bank.channels().map(SliderChannel::position).collect()
    }

    fn counting(bank: &mut DualSliderBank) -> Rc<RefCell<usize>> {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        bank.on_value_changed(move |_| *counter.borrow_mut() += 1);
        count
    }

    #[test]
    fn test_initial_state_is_red() {
        let bank = DualSliderBank::new();
        assert_eq!(positions(&bank), vec![0, 255, 255, 255, 0, 0]);
        assert_eq!(bank.hsv(), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(bank.channel(Channel::Hue).max(), 360);
        assert_eq!(bank.channel(Channel::Blue).label(), "B");
    }

    #[test]
    fn test_hsv_edit_updates_rgb_and_fires_once() {
        let mut bank = DualSliderBank::new();
        let count = counting(&mut bank);

        let hsv = bank.edit(Channel::Hue, 120).unwrap();
        assert!((hsv.hue - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(&positions(&bank)[3..], &[0, 255, 0]);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_rgb_edit_updates_hsv() {
        let mut bank = DualSliderBank::new();
        let count = counting(&mut bank);

        // red -> magenta
        let hsv = bank.edit(Channel::Blue, 255).unwrap();
        assert!((hsv.hue - 5.0 / 6.0).abs() < 1e-6);
        assert_eq!(bank.channel(Channel::Hue).position(), 300);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unchanged_edit_is_ignored() {
        let mut bank = DualSliderBank::new();
        let count = counting(&mut bank);
        assert_eq!(bank.edit(Channel::Red, 255), None);
        // clamped to the same position
        assert_eq!(bank.edit(Channel::Red, 900), None);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_edit_clamps_position() {
        let mut bank = DualSliderBank::new();
        assert_eq!(bank.edit(Channel::Green, -40), None);
        assert_eq!(bank.channel(Channel::Green).position(), 0);
        bank.edit(Channel::Hue, 400);
        assert_eq!(bank.channel(Channel::Hue).position(), 360);
    }

    #[test]
    fn test_silent_sync_fires_nothing() {
        let mut bank = DualSliderBank::new();
        let count = counting(&mut bank);

        bank.set_hsv_silent(Hsv::new(0.5, 1.0, 1.0));
        assert_eq!(positions(&bank), vec![180, 255, 255, 0, 255, 255]);
        bank.set_rgb_silent(Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(bank.channel(Channel::Hue).position(), 240);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_notifying_set_rgb() {
        let mut bank = DualSliderBank::new();
        let count = counting(&mut bank);
        let hsv = bank.set_rgb(Rgb::new(0.0, 1.0, 0.0));
        assert!((hsv.hue - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(*count.borrow(), 1);
        bank.set_hsv(Hsv::default());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_rgb_edit_roundtrips_within_one_step() {
        let mut bank = DualSliderBank::new();
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            for position in (0..=255).step_by(5) {
                if bank.edit(channel, position).is_none() {
                    continue;
                }
                let hsv = bank.hsv();
                let rgb = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
                let expected = [Channel::Red, Channel::Green, Channel::Blue]
                    .map(|c| bank.channel(c).position());
                let actual = rgb.to_array().map(to_8bit);
                for (a, e) in actual.iter().zip(expected.iter()) {
                    assert!((i32::from(*a) - e).abs() <= 1, "{actual:?} vs {expected:?}");
                }
            }
        }
    }

    #[test]
    fn test_channel_keeps_exact_float() {
        let mut channel = SliderChannel::new(Channel::Saturation, 0, 0, 255);
        channel.set_normalized(0.3);
        assert_eq!(channel.normalized(), 0.3);
        assert_eq!(channel.position(), 77);
        assert!(channel.edit(100));
        assert_eq!(channel.normalized(), 100.0 / 255.0);
    }
}
