//! 8x8 bitmap font for the scoreboard and banner
//!
//! One byte per row, most significant bit leftmost. Only the characters the
//! game prints are present; anything else renders as a blank cell.

/// One 8x8 glyph
pub type Glyph = [u8; 8];

const BLANK: Glyph = [0; 8];

/// Printable characters, in tile order
pub const CHARSET: &str = " 0123456789!INPSW";

const GLYPHS: [Glyph; 17] = [
    BLANK,
    [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00], // 0
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // 1
    [0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00], // 2
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00], // 3
    [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00], // 4
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00], // 5
    [0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00], // 6
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], // 7
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00], // 8
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00], // 9
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00], // I
    [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00], // N
    [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00], // P
    [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00], // S
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
];

/// Position of `ch` in [`CHARSET`]; unknown characters map to the blank
pub fn index_of(ch: char) -> usize {
    CHARSET.find(ch.to_ascii_uppercase()).unwrap_or(0)
}

/// Glyph for `ch`
#[inline]
pub fn glyph(ch: char) -> &'static Glyph {
    &GLYPHS[index_of(ch)]
}

/// Every glyph, in tile order
#[inline]
pub fn glyphs() -> &'static [Glyph] {
    &GLYPHS
}

/// Cells a score occupies on the scoreboard
pub const SCORE_CELLS: usize = 2;

/// Decimal digits of a score, most significant first, without allocating
#[derive(Clone, Copy, Debug)]
pub struct Digits {
    buf: [u8; 5],
    start: usize,
}

impl Digits {
    pub fn new(mut value: u16) -> Self {
        let mut buf = [b' '; 5];
        let mut start = buf.len();
        loop {
            start -= 1;
            buf[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Digits { buf, start }
    }

    /// Right-aligned in at least `width` cells, padded with blanks
    pub fn padded(value: u16, width: usize) -> Self {
        let mut digits = Self::new(value);
        digits.start = digits.start.min(digits.buf.len().saturating_sub(width));
        digits
    }

    /// Scoreboard form: a blank tens cell below 10
    pub fn score(value: u16) -> Self {
        Self::padded(value, SCORE_CELLS)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        core::str::from_utf8(&self.buf[self.start..]).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_matches_table() {
        assert_eq!(CHARSET.len(), GLYPHS.len());
        assert_eq!(index_of(' '), 0);
        assert_eq!(index_of('0'), 1);
        assert_eq!(index_of('w'), 16);
        assert_eq!(index_of('?'), 0);
    }

    #[test]
    fn test_banner_characters_have_ink() {
        for ch in "P1 P2 WINS!".chars().filter(|c| *c != ' ') {
            assert!(glyph(ch).iter().any(|row| *row != 0), "{ch} is blank");
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(Digits::new(0).as_str(), "0");
        assert_eq!(Digits::new(7).as_str(), "7");
        assert_eq!(Digits::new(11).as_str(), "11");
        assert_eq!(Digits::new(120).as_str(), "120");
        assert_eq!(Digits::new(u16::MAX).as_str(), "65535");
    }

    #[test]
    fn test_score_is_right_aligned() {
        assert_eq!(Digits::score(0).as_str(), " 0");
        assert_eq!(Digits::score(9).as_str(), " 9");
        assert_eq!(Digits::score(10).as_str(), "10");
        assert_eq!(Digits::score(120).as_str(), "120");
        assert_eq!(Digits::padded(7, 4).as_str(), "   7");
        assert_eq!(Digits::padded(7, 9).as_str(), "    7");
    }
}
