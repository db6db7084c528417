//! huewheel_color - HSV/RGB conversion and packing for the hue wheel picker
//!
//! Pure, stateless routines: every function is total over its inputs and
//! clamps its output. The only fallible operation is [`parse_hex6`].

pub mod channel;
pub mod error;
pub mod hex;
pub mod hsv;
pub mod math;
pub mod packed;

pub use channel::{degrees_to_hue, hue_to_degrees, to_8bit, to_float};
pub use error::HexParseError;
pub use hex::{format_decimal, format_decimal_columns, format_hex, hex_digits, parse_hex6};
pub use hsv::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};
pub use math::{clamp, fractional};
pub use packed::Argb;
