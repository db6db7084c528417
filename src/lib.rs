//! huewheel - a headless HSV color picker and harmonic palette generator.
//!
//! The picker keeps one canonical color and derives everything else from it:
//! a hue/saturation wheel raster, a saturation/value plane raster, linked
//! HSV and RGB sliders, a hex input field, and a palette of evenly spaced
//! hues. Input arrives as [`Message`]s routed by [`PickerApp::update`].

pub mod app;
pub mod callback;
pub mod config;
pub mod constants;
pub mod export;
pub mod field;
pub mod message;
pub mod slider_bank;
pub mod state;
pub mod swatch;

pub use app::{HexInputStatus, PickerApp};
pub use callback::{ListenerId, Listeners};
pub use config::{AppConfig, ConfigError, LogLevel, Preferences};
pub use export::{ExportError, ExportedFiles, export_all};
pub use message::Message;
pub use slider_bank::{Channel, DualSliderBank};
pub use state::{ColorState, PaletteParams};
pub use swatch::SwatchEntry;
