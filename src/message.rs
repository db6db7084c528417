//! Application message types for huewheel.
//!
//! All user input reaches the picker as a message in the Elm architecture
//! style; [`crate::app::PickerApp::update`] routes each one.

use crate::slider_bank::Channel;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Fields
    /// Pointer pressed or dragged on the hue wheel, in raster pixels
    WheelPressed { x: i32, y: i32 },
    /// Pointer pressed or dragged on the SV plane, in raster pixels
    PlanePressed { x: i32, y: i32 },

    // Sliders
    /// A slider or spinner was moved to an integer position
    SliderEdited { channel: Channel, position: i32 },

    // Hex input
    /// The hex text field was edited
    HexInputChanged(String),

    // Palette
    /// Division count selector changed
    DivisionChanged(usize),
    /// Reverse checkbox toggled
    ReverseToggled(bool),
}

impl Message {
    /// Create a slider edit message.
    pub fn slider(channel: Channel, position: i32) -> Self {
        Self::SliderEdited { channel, position }
    }

    /// Create a hex input message.
    pub fn hex(text: impl Into<String>) -> Self {
        Self::HexInputChanged(text.into())
    }
}
