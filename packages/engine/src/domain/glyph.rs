//! The glyph currently shown by the toy
//!
//! Letters are purely cosmetic for the engine. A digit `N` means "N bodies
//! in play"; popping one counts the digit down without respawning.

use std::fmt;

use rand::Rng;

use super::constants::GLYPH_ALPHABET;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Uppercase ASCII letter
    Letter(char),
    /// 0..=9
    Digit(u8),
}

impl Glyph {
    /// Classify a single character. Only ASCII alphanumerics are glyphs.
    pub fn from_char(c: char) -> Option<Glyph> {
        if c.is_ascii_digit() {
            Some(Glyph::Digit(c as u8 - b'0'))
        } else if c.is_ascii_alphabetic() {
            Some(Glyph::Letter(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Classify a host key name (`KeyboardEvent.key`). Named keys such as
    /// `"Enter"` are not glyphs.
    pub fn from_key(key: &str) -> Option<Glyph> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Glyph::from_char(c),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Glyph {
        let bytes = GLYPH_ALPHABET.as_bytes();
        let c = bytes[rng.gen_range(0..bytes.len())] as char;
        // Alphabet is alphanumeric only
        Glyph::from_char(c).unwrap_or(Glyph::Letter('A'))
    }

    /// Number of bodies this glyph puts in play
    pub fn body_count(self) -> u32 {
        match self {
            Glyph::Digit(n) => n as u32,
            Glyph::Letter(_) => 0,
        }
    }

    pub fn is_positive_digit(self) -> bool {
        matches!(self, Glyph::Digit(n) if n > 0)
    }

    /// One less, saturating at zero; letters are unchanged
    pub fn decremented(self) -> Glyph {
        match self {
            Glyph::Digit(n) => Glyph::Digit(n.saturating_sub(1)),
            letter => letter,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Letter(c) => c,
            Glyph::Digit(n) => (b'0' + n) as char,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::Letter('A')
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
