//! Global constants for the huewheel picker

/// Radius of the hue wheel in pixels; the raster is `2 * radius + 1` wide
pub const DEFAULT_WHEEL_RADIUS: u32 = 255;

/// Largest pixel coordinate of the saturation/value plane; the raster is
/// `range + 1` pixels per side
pub const DEFAULT_PLANE_RANGE: u32 = 255;

/// Smallest allowed wheel radius or plane range
pub const MIN_RASTER_EXTENT: u32 = 1;

/// Largest allowed wheel radius or plane range
pub const MAX_RASTER_EXTENT: u32 = 2048;

/// Number of hues in the palette at startup
pub const DEFAULT_DIVISION_COUNT: usize = 12;

/// Smallest allowed palette size
pub const MIN_DIVISION_COUNT: usize = 2;

/// Largest allowed palette size
pub const MAX_DIVISION_COUNT: usize = 360;

/// Color shown at startup, as the hex input field displays it
pub const DEFAULT_COLOR_HEX: &str = "FF0000";

/// File names written by the exporter
pub mod export_files {
    /// Hue/saturation wheel raster
    pub const WHEEL: &str = "hue-wheel.png";
    /// Saturation/value plane raster
    pub const PLANE: &str = "sv-plane.png";
    /// Palette listing, one color per line
    pub const PALETTE: &str = "palette.txt";
}
