//! Display code ↔ internal code conversion
//!
//! Display codes are what text and keyboard input are written in. Internal
//! codes are glyph indices into the character ROM, which is what screen
//! memory holds. The two differ only in how the low 96 codes are banked:
//!
//! | display   | internal  |
//! |-----------|-----------|
//! | 0x00–0x1F | 0x40–0x5F |
//! | 0x20–0x5F | 0x00–0x3F |
//! | 0x60–0x7F | 0x60–0x7F |
//!
//! The same banking applies to the inverse half (bit 7 set).

/// Bit that selects inverse video in both encodings
pub const INVERSE_BIT: u8 = 0x80;

/// Convert one display code to its internal code
pub const fn internal_of(code: u8) -> u8 {
    let inverse = code & INVERSE_BIT;
    let base = code & !INVERSE_BIT;
    let mapped = match base {
        0x00..=0x1F => base + 0x40,
        0x20..=0x5F => base - 0x20,
        _ => base,
    };
    mapped | inverse
}

/// Convert one internal code to its display code
pub const fn display_of(code: u8) -> u8 {
    let inverse = code & INVERSE_BIT;
    let base = code & !INVERSE_BIT;
    let mapped = match base {
        0x00..=0x3F => base + 0x20,
        0x40..=0x5F => base - 0x40,
        _ => base,
    };
    mapped | inverse
}

/// Convert display codes to internal codes in place
pub fn to_internal(bytes: &mut [u8]) {
    for byte in bytes {
        *byte = internal_of(*byte);
    }
}

/// Convert internal codes to display codes in place
pub fn to_display(bytes: &mut [u8]) {
    for byte in bytes {
        *byte = display_of(*byte);
    }
}

/// Flip the inverse-video bit of every byte
pub fn invert(bytes: &mut [u8]) {
    for byte in bytes {
        *byte ^= INVERSE_BIT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_internal_zero() {
        assert_eq!(internal_of(b' '), 0);
        assert_eq!(display_of(0), b' ');
    }

    #[test]
    fn test_letters() {
        assert_eq!(internal_of(b'A'), 33);
        assert_eq!(internal_of(b'a'), b'a');
        assert_eq!(internal_of(b'0'), 16);
    }

    #[test]
    fn test_control_glyphs_bank_high() {
        // Ball glyph
        assert_eq!(internal_of(20), 84);
        // Inverse space
        assert_eq!(internal_of(160), 128);
    }

    #[test]
    fn test_every_code_survives_conversion() {
        for code in 0..=u8::MAX {
            assert_eq!(display_of(internal_of(code)), code);
        }
    }

    #[test]
    fn test_invert_preserves_glyph() {
        let mut text = *b"OK";
        to_internal(&mut text);
        let plain = text;
        invert(&mut text);
        assert_eq!(text[0], plain[0] | INVERSE_BIT);
        to_display(&mut text);
        assert_eq!(text, [b'O' | INVERSE_BIT, b'K' | INVERSE_BIT]);
    }
}
