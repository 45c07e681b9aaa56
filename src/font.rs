//! Seven-segment style glyph set for readout displays.
//!
//! A fixed 16x16 pixel charset covering what a humidity/temperature
//! readout needs: digits, a handful of letters, `%`, `.`, `:`, a minus
//! sign, and two arrows (drawn for `{` and `}`). Each glyph is stored as
//! two 8-pixel-high pages of 16 column bytes, the tile layout used by
//! SSD1306-class display drivers, so a surface can blit pages directly.
//!
//! This module is independent of the sensor driver; the only data
//! crossing the boundary are character codes and tile coordinates.

/// Glyph width in pixels (two display tiles).
pub const GLYPH_WIDTH: u8 = 16;
/// Glyph height in pixels (two display tiles).
pub const GLYPH_HEIGHT: u8 = 16;

/// One 16x16 glyph: two pages of 16 column bytes, top page first.
/// Bit 0 of a column byte is the topmost pixel of its page.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph([u8; 32]);

impl Glyph {
    /// Raw tile data, top page followed by bottom page.
    pub const fn data(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether the pixel at (x, y) is lit. Glyph-local coordinates.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        debug_assert!(x < GLYPH_WIDTH && y < GLYPH_HEIGHT);
        let column = self.0[(y as usize / 8) * 16 + x as usize];
        column & (1 << (y % 8)) != 0
    }
}

/// A tile-oriented surface the glyph helpers can draw on, typically a
/// thin wrapper over an OLED/LCD driver. Coordinates are in tiles, not
/// pixels; a glyph occupies 2x2 tiles (2x4 in 1x2 scale).
pub trait GlyphSurface {
    type Error;

    /// Draws one glyph at its natural size.
    fn draw_glyph(&mut self, x: u8, y: u8, glyph: &'static Glyph) -> Result<(), Self::Error>;

    /// Draws one glyph stretched to double height.
    fn draw_glyph_1x2(&mut self, x: u8, y: u8, glyph: &'static Glyph) -> Result<(), Self::Error>;
}

/// Looks up the glyph for a character code.
///
/// Letters fold case; anything outside the charset renders as the
/// minus-sign placeholder.
pub fn glyph(character: u8) -> &'static Glyph {
    match character {
        b'0'..=b'9' => DIGITS[(character - b'0') as usize],
        b' ' => &SPACE,
        b'%' => &PERCENT,
        b'.' => &DOT,
        b':' => &COLON,
        b'-' => &MINUS,
        b'A' | b'a' => &A,
        b'C' | b'c' => &C,
        b'D' | b'd' => &D,
        b'E' | b'e' => &E,
        b'H' | b'h' => &H,
        b'L' | b'l' => &L,
        b'N' | b'n' => &N,
        b'S' | b's' => &S,
        b'T' | b't' => &T,
        b'Y' | b'y' => &Y,
        b'{' => &ARROW_LEFT,
        b'}' => &ARROW_RIGHT,
        _ => &MINUS,
    }
}

/// Draws a string at natural size, advancing two tiles per character.
pub fn draw_str<S: GlyphSurface>(
    surface: &mut S,
    x: u8,
    y: u8,
    text: &str,
) -> Result<(), S::Error> {
    for (i, ch) in text.bytes().enumerate() {
        surface.draw_glyph(x + 2 * i as u8, y, glyph(ch))?;
    }
    Ok(())
}

/// Draws a string at double height, advancing two tiles per character.
pub fn draw_str_1x2<S: GlyphSurface>(
    surface: &mut S,
    x: u8,
    y: u8,
    text: &str,
) -> Result<(), S::Error> {
    for (i, ch) in text.bytes().enumerate() {
        surface.draw_glyph_1x2(x + 2 * i as u8, y, glyph(ch))?;
    }
    Ok(())
}

/// Digit glyphs, indexed by value.
pub static DIGITS: [&Glyph; 10] = [
    &ZERO, &ONE, &TWO, &THREE, &FOUR, &FIVE, &SIX, &SEVEN, &EIGHT, &NINE,
];

pub static ZERO: Glyph = Glyph([
    0x00, 0x00, 0x7e, 0xfd, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x7e, 0xbf, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static ONE: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x7c, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7f, 0x3e, 0x00, 0x00,
]);

pub static TWO: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x81, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x7f, 0xbe, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0x80, 0x00, 0x00, 0x00,
]);

pub static THREE: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x81, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static FOUR: Glyph = Glyph([
    0x00, 0x00, 0x7e, 0xfc, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xfc, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x3f, 0x7e, 0x00, 0x00,
]);

pub static FIVE: Glyph = Glyph([
    0x00, 0x00, 0xfe, 0x7d, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x81, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static SIX: Glyph = Glyph([
    0x00, 0x00, 0x7e, 0xfd, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x7e, 0xbf, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static SEVEN: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x01, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x7e, 0x00, 0x00,
]);

pub static EIGHT: Glyph = Glyph([
    0x00, 0x00, 0x7e, 0xfd, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x7e, 0xbf, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static NINE: Glyph = Glyph([
    0x00, 0x00, 0x7e, 0xfd, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0x83, 0xfd, 0x7e, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xbf, 0x7e, 0x00, 0x00,
]);

pub static A: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0xc6, 0xc6, 0xc6, 0xc6, 0x39, 0x39, 0x00, 0x00, 0x00, 0x00,
]);

pub static C: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xc0, 0xe0, 0x30, 0x30, 0x30, 0x30, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3f, 0x7f, 0xc0, 0xc0, 0xc0, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static D: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xe0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x7c, 0xba, 0xc6, 0xc6, 0xc6, 0xc6, 0xbf, 0x79, 0x00, 0x00, 0x00, 0x00,
]);

pub static E: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xd0, 0x30, 0x30, 0x30, 0x30, 0xd0, 0xe0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x79, 0xbf, 0xc6, 0xc6, 0xc6, 0xc6, 0x85, 0x03, 0x00, 0x00, 0x00, 0x00,
]);

pub static H: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x79, 0x3f, 0x06, 0x06, 0x06, 0x06, 0x3a, 0x7c, 0x00, 0x00, 0x00, 0x00,
]);

pub static L: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x79, 0xbf, 0xc0, 0xc0, 0xc0, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static N: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3c, 0x7a, 0x06, 0x06, 0x06, 0x06, 0x7a, 0x3c, 0x00, 0x00, 0x00, 0x00,
]);

pub static S: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xd0, 0x30, 0x30, 0x30, 0x30, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x03, 0x85, 0xc6, 0xc6, 0xc6, 0xc6, 0xba, 0x7c, 0x00, 0x00, 0x00, 0x00,
]);

pub static T: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x79, 0xbf, 0xc6, 0xc6, 0xc6, 0xc6, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static Y: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0xe0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xe0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x03, 0x85, 0xc6, 0xc6, 0xc6, 0xc6, 0xbf, 0x79, 0x00, 0x00, 0x00, 0x00,
]);

pub static COLON: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static MINUS: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
]);

pub static PERCENT: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xe0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xfc, 0x7a, 0x06, 0x06, 0x06, 0x06, 0x65, 0x63, 0x00, 0x00, 0x00, 0x00,
]);

pub static DOT: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static SPACE: Glyph = Glyph([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

pub static ARROW_LEFT: Glyph = Glyph([
    0x00, 0x00, 0x80, 0xc0, 0xe0, 0xf0, 0x90, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x03, 0x07, 0x0f, 0x09, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00,
]);

pub static ARROW_RIGHT: Glyph = Glyph([
    0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x90, 0xf0, 0xe0, 0xc0, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x09, 0x0f, 0x07, 0x03, 0x01, 0x00, 0x00,
]);

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSurface {
        calls: Vec<(u8, u8, &'static Glyph, bool)>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            RecordingSurface { calls: Vec::new() }
        }
    }

    impl GlyphSurface for RecordingSurface {
        type Error = core::convert::Infallible;

        fn draw_glyph(&mut self, x: u8, y: u8, glyph: &'static Glyph) -> Result<(), Self::Error> {
            self.calls.push((x, y, glyph, false));
            Ok(())
        }

        fn draw_glyph_1x2(
            &mut self,
            x: u8,
            y: u8,
            glyph: &'static Glyph,
        ) -> Result<(), Self::Error> {
            self.calls.push((x, y, glyph, true));
            Ok(())
        }
    }

    #[test]
    fn digits_map_to_digit_glyphs() {
        for d in 0..10u8 {
            assert!(core::ptr::eq(glyph(b'0' + d), DIGITS[d as usize]));
        }
    }

    #[test]
    fn letters_fold_case() {
        assert!(core::ptr::eq(glyph(b'H'), glyph(b'h')));
        assert!(core::ptr::eq(glyph(b'Y'), glyph(b'y')));
        assert!(core::ptr::eq(glyph(b'h'), &H));
    }

    #[test]
    fn braces_map_to_arrows() {
        assert!(core::ptr::eq(glyph(b'{'), &ARROW_LEFT));
        assert!(core::ptr::eq(glyph(b'}'), &ARROW_RIGHT));
    }

    #[test]
    fn unknown_characters_fall_back_to_placeholder() {
        assert!(core::ptr::eq(glyph(b'Q'), &MINUS));
        assert!(core::ptr::eq(glyph(b'*'), &MINUS));
        assert!(core::ptr::eq(glyph(0xFF), &MINUS));
    }

    #[test]
    fn space_glyph_is_blank() {
        assert!(SPACE.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn pixel_reads_both_pages() {
        // Column 2 of the zero glyph: 0x7e top page, 0x7e bottom page
        assert!(!ZERO.pixel(2, 0));
        assert!(ZERO.pixel(2, 1));
        assert!(ZERO.pixel(2, 6));
        assert!(!ZERO.pixel(2, 7));
        assert!(ZERO.pixel(2, 9));
        assert!(!ZERO.pixel(2, 15));
    }

    #[test]
    fn draw_str_advances_two_tiles_per_character() {
        let mut surface = RecordingSurface::new();
        draw_str(&mut surface, 3, 1, "25.5").unwrap();

        let expected: [(u8, &Glyph); 4] = [(3, &TWO), (5, &FIVE), (7, &DOT), (9, &FIVE)];
        assert_eq!(surface.calls.len(), expected.len());
        for (call, (x, glyph)) in surface.calls.iter().zip(expected) {
            assert_eq!(call.0, x);
            assert_eq!(call.1, 1);
            assert!(core::ptr::eq(call.2, glyph));
            assert!(!call.3);
        }
    }

    #[test]
    fn draw_str_1x2_uses_double_height() {
        let mut surface = RecordingSurface::new();
        draw_str_1x2(&mut surface, 0, 2, "8%").unwrap();

        assert_eq!(surface.calls.len(), 2);
        assert!(core::ptr::eq(surface.calls[0].2, &EIGHT));
        assert!(core::ptr::eq(surface.calls[1].2, &PERCENT));
        assert!(surface.calls.iter().all(|c| c.3 && c.1 == 2));
        assert_eq!(surface.calls[1].0, 2);
    }
}
