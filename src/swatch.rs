//! Text renditions of the palette for display and copying.

use huewheel_color::{Argb, format_decimal, format_decimal_columns, format_hex};

/// One palette color with its text forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchEntry {
    pub color: Argb,
    /// `#RRGGBB`
    pub hex: String,
    /// `rgb(r, g, b)`
    pub decimal: String,
}

impl SwatchEntry {
    pub fn new(color: Argb) -> Self {
        Self {
            color,
            hex: format_hex(color),
            decimal: format_decimal(color),
        }
    }

    /// Fixed-width `rrr, ggg, bbb` form for aligned listings.
    pub fn decimal_columns(&self) -> String {
        format_decimal_columns(self.color)
    }
}

/// Build the swatch list for a palette, keeping its order.
pub fn swatches(palette: &[Argb]) -> Vec<SwatchEntry> {
    palette.iter().copied().map(SwatchEntry::new).collect()
}

/// The palette as text, one `#RRGGBB<TAB>rgb(r, g, b)` line per color.
pub fn palette_listing(entries: &[SwatchEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\t{}\n", entry.hex, entry.decimal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_color::parse_hex6;

    #[test]
    fn test_swatch_entry() {
        let entry = SwatchEntry::new(Argb::from_rgb8([255, 8, 0]));
        assert_eq!(entry.hex, "#FF0800");
        assert_eq!(entry.decimal, "rgb(255, 8, 0)");
        assert_eq!(entry.decimal_columns(), "255,   8,   0");
    }

    #[test]
    fn test_hex_text_parses_back() {
        let palette = [Argb::from_rgb8([1, 2, 3]), Argb::from_rgb8([250, 128, 64])];
        for entry in swatches(&palette) {
            assert_eq!(parse_hex6(&entry.hex[1..]), Ok(entry.color));
        }
    }

    #[test]
    fn test_palette_listing() {
        let entries = swatches(&[Argb::from_rgb8([255, 0, 0]), Argb::from_rgb8([0, 0, 255])]);
        assert_eq!(
            palette_listing(&entries),
            "#FF0000\trgb(255, 0, 0)\n#0000FF\trgb(0, 0, 255)\n"
        );
    }
}
