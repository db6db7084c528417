//! Procedural color fields.
//!
//! Each field owns one square raster and remembers the scalar it was built
//! for: the hue wheel depends only on value, the SV plane only on hue. Moving
//! the selection never touches a raster.

pub mod hue_wheel;
mod raster;
pub mod sv_plane;

pub use hue_wheel::{HueWheelField, Marker};
pub use raster::RasterBuffer;
pub use sv_plane::SvPlaneField;
