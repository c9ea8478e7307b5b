//! Character classes for text entry
//!
//! Each class decides whether a display-code character may enter the edit
//! buffer and, for the case-folding classes, what it is stored as.

use casement_codes::glyphs::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT};

/// Accepted character set of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharClass {
    /// Everything but the left, right and down arrow glyphs
    #[default]
    Any,
    /// Letters, digits and space
    Alphanumeric,
    /// Letters and space
    Alphabetic,
    /// Digits, `.` and `-`
    Numeric,
    /// A-Z, lower case folded up
    Upper,
    /// a-z, upper case folded down
    Lower,
    /// DOS file spec: A-Z (folded up), `0`-`8`, `*`, `:`, `.` and space
    ///
    /// `9` is rejected, as it always has been.
    Filename,
}

impl CharClass {
    /// Filter one display code
    ///
    /// Returns the character to store, or `None` if the class rejects it.
    pub const fn admit(self, c: u8) -> Option<u8> {
        let stored = match self {
            CharClass::Upper | CharClass::Filename => c.to_ascii_uppercase(),
            CharClass::Lower => c.to_ascii_lowercase(),
            _ => c,
        };
        let ok = match self {
            CharClass::Any => !matches!(c, ARROW_DOWN | ARROW_LEFT | ARROW_RIGHT),
            CharClass::Alphanumeric => c == b' ' || c.is_ascii_alphanumeric(),
            CharClass::Alphabetic => c == b' ' || c.is_ascii_alphabetic(),
            CharClass::Numeric => matches!(c, b'-' | b'.') || c.is_ascii_digit(),
            CharClass::Upper => stored.is_ascii_uppercase(),
            CharClass::Lower => stored.is_ascii_lowercase(),
            CharClass::Filename => matches!(stored, b'A'..=b'Z' | b'0'..=b'8' | b'*' | b':' | b'.' | b' '),
        };
        if ok {
            Some(stored)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_rejects_cursor_glyphs() {
        assert_eq!(CharClass::Any.admit(b'a'), Some(b'a'));
        assert_eq!(CharClass::Any.admit(1), Some(1));
        assert_eq!(CharClass::Any.admit(160), Some(160));
        for c in [ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT] {
            assert_eq!(CharClass::Any.admit(c), None);
        }
        assert_eq!(CharClass::Any.admit(ARROW_DOWN - 1), Some(ARROW_DOWN - 1));
    }

    #[test]
    fn test_alphanumeric_and_alphabetic() {
        assert_eq!(CharClass::Alphanumeric.admit(b'7'), Some(b'7'));
        assert_eq!(CharClass::Alphanumeric.admit(b' '), Some(b' '));
        assert_eq!(CharClass::Alphanumeric.admit(b'_'), None);
        assert_eq!(CharClass::Alphabetic.admit(b'q'), Some(b'q'));
        assert_eq!(CharClass::Alphabetic.admit(b'7'), None);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(CharClass::Numeric.admit(b'-'), Some(b'-'));
        assert_eq!(CharClass::Numeric.admit(b'.'), Some(b'.'));
        assert_eq!(CharClass::Numeric.admit(b'9'), Some(b'9'));
        assert_eq!(CharClass::Numeric.admit(b' '), None);
        assert_eq!(CharClass::Numeric.admit(b'e'), None);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(CharClass::Upper.admit(b'q'), Some(b'Q'));
        assert_eq!(CharClass::Upper.admit(b' '), None);
        assert_eq!(CharClass::Lower.admit(b'Q'), Some(b'q'));
        assert_eq!(CharClass::Lower.admit(b'1'), None);
    }

    #[test]
    fn test_filename_rejects_nine() {
        for c in b'0'..=b'8' {
            assert_eq!(CharClass::Filename.admit(c), Some(c));
        }
        assert_eq!(CharClass::Filename.admit(b'9'), None);
        assert_eq!(CharClass::Filename.admit(b'd'), Some(b'D'));
        assert_eq!(CharClass::Filename.admit(b'*'), Some(b'*'));
        assert_eq!(CharClass::Filename.admit(b':'), Some(b':'));
        assert_eq!(CharClass::Filename.admit(b'_'), None);
    }
}
