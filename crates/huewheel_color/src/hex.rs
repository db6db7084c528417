//! Hex and decimal text forms of packed colors.
//!
//! Parsing accepts exactly six hex digits in either case, without a `#`
//! prefix. Formatting always produces uppercase digits, so
//! `parse_hex6(&hex_digits(c))` returns `c` for every opaque color.

use crate::error::HexParseError;
use crate::packed::Argb;

/// Parse `RRGGBB` into an opaque packed color.
pub fn parse_hex6(text: &str) -> Result<Argb, HexParseError> {
    let len = text.chars().count();
    if len != 6 {
        return Err(HexParseError::WrongLength { len });
    }
    let mut raw = 0u32;
    for (position, digit) in text.chars().enumerate() {
        let nibble = digit
            .to_digit(16)
            .ok_or(HexParseError::InvalidDigit { digit, position })?;
        raw = (raw << 4) | nibble;
    }
    Ok(Argb::from_raw(raw).with_alpha(u8::MAX))
}

/// `RRGGBB`, the form shown in the hex input field.
pub fn hex_digits(color: Argb) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("{r:02X}{g:02X}{b:02X}")
}

/// `#RRGGBB`.
pub fn format_hex(color: Argb) -> String {
    format!("#{}", hex_digits(color))
}

/// `rgb(r, g, b)`.
pub fn format_decimal(color: Argb) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("rgb({r}, {g}, {b})")
}

/// Right-aligned `rrr, ggg, bbb` for fixed-width columns.
pub fn format_decimal_columns(color: Argb) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("{r:3}, {g:3}, {b:3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex6() {
        let color = parse_hex6("1A2B3C").unwrap();
        assert_eq!(color.raw(), 0xff1a_2b3c);
        assert_eq!(parse_hex6("1a2b3c").unwrap(), color);
    }

    #[test]
    fn test_parse_hex6_wrong_length() {
        assert_eq!(
            parse_hex6("1A2B3"),
            Err(HexParseError::WrongLength { len: 5 })
        );
        assert!(parse_hex6("").is_err());
        assert!(parse_hex6("#1A2B3C").is_err());
    }

    #[test]
    fn test_parse_hex6_invalid_digit() {
        assert_eq!(
            parse_hex6("1A2B3G"),
            Err(HexParseError::InvalidDigit {
                digit: 'G',
                position: 5
            })
        );
        // multi-byte characters count as one character
        assert!(matches!(
            parse_hex6("1A2B3é"),
            Err(HexParseError::InvalidDigit { position: 5, .. })
        ));
    }

    #[test]
    fn test_format() {
        let color = Argb::from_rgb8([0x1a, 0x2b, 0x3c]);
        assert_eq!(format_hex(color), "#1A2B3C");
        assert_eq!(format_decimal(color), "rgb(26, 43, 60)");
        assert_eq!(format_decimal_columns(color), " 26,  43,  60");
    }

    #[test]
    fn test_hex_text_roundtrip() {
        for value in (0..=0xff_ffffu32).step_by(0x1_0101) {
            let color = Argb::from_raw(value).with_alpha(u8::MAX);
            assert_eq!(parse_hex6(&hex_digits(color)), Ok(color));
        }
    }
}
