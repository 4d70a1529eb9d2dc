//! In-memory display for running the core on a host
//!
//! Two 240x160 indexed pages stand in for the console's buffers. Text and
//! rectangles are rasterized into the page; sprite requests are kept in a
//! per-buffer object table and composited over the page when the visible
//! frame is read back, the way the object layer sits over the background.
//!
//! Drawing into the buffer currently on screen panics.

use pong::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pong::frame::{BufferId, DisplayDriver, TextRenderer};
use pong::palette::Rgb555;
use pong::render::Sprite;
use pong_gba::font::{self, Digits};
use pong_gba::raster;

pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Host stand-in for both console backends
#[derive(Clone, Debug)]
pub struct HostDisplay {
    pages: [Vec<u8>; 2],
    objects: [Vec<Option<Sprite>>; 2],
    palette: [Rgb555; 256],
    visible: BufferId,
    presents: u64,
}

impl HostDisplay {
    /// Page A on screen, both pages at palette index 0
    pub fn new() -> Self {
        HostDisplay {
            pages: [vec![0; WIDTH * HEIGHT], vec![0; WIDTH * HEIGHT]],
            objects: [Vec::new(), Vec::new()],
            palette: [Rgb555::BLACK; 256],
            visible: BufferId::A,
            presents: 0,
        }
    }

    /// Buffer currently on screen
    #[inline]
    pub fn visible(&self) -> BufferId {
        self.visible
    }

    /// Number of completed presents
    #[inline]
    pub fn presents(&self) -> u64 {
        self.presents
    }

    #[inline]
    pub fn palette(&self) -> &[Rgb555; 256] {
        &self.palette
    }

    /// Palette indices of the visible frame, row-major, objects on top
    pub fn frame(&self) -> Vec<u8> {
        let i = self.visible.index();
        let mut pixels = self.pages[i].clone();
        for sprite in self.objects[i].iter().flatten() {
            fill(&mut pixels, sprite.x, sprite.y, sprite.width, sprite.height, sprite.color);
        }
        pixels
    }

    /// Palette index at (`x`, `y`) of the visible frame
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.frame()[y * WIDTH + x]
    }

    fn target(&mut self, buffer: BufferId) -> usize {
        assert_ne!(buffer, self.visible, "render into the presented buffer");
        buffer.index()
    }
}

impl Default for HostDisplay {
    fn default() -> Self {
        Self::new()
    }
}

fn fill(pixels: &mut [u8], x: i32, y: i32, w: i32, h: i32, color: u8) {
    let Some(span) = raster::clip(x, y, w, h) else {
        return;
    };
    for row in span.y0..span.y1 {
        pixels[row * WIDTH + span.x0..row * WIDTH + span.x1].fill(color);
    }
}

fn blit(pixels: &mut [u8], x: i32, y: i32, ch: char, color: u8) {
    for (r, bits) in font::glyph(ch).iter().enumerate() {
        for c in 0..8 {
            if bits & (0x80 >> c) != 0 {
                fill(pixels, x + c, y + r as i32, 1, 1, color);
            }
        }
    }
}

impl DisplayDriver for HostDisplay {
    fn clear(&mut self, buffer: BufferId, color: u8) {
        let i = self.target(buffer);
        self.pages[i].fill(color);
        self.objects[i].clear();
    }

    fn fill_rect(&mut self, buffer: BufferId, x: i32, y: i32, w: i32, h: i32, color: u8) {
        let i = self.target(buffer);
        fill(&mut self.pages[i], x, y, w, h, color);
    }

    fn place_sprite(&mut self, buffer: BufferId, slot: usize, sprite: &Sprite) {
        let i = self.target(buffer);
        let table = &mut self.objects[i];
        if table.len() <= slot {
            table.resize(slot + 1, None);
        }
        table[slot] = Some(*sprite);
    }

    fn present(&mut self) -> BufferId {
        self.visible = self.visible.other();
        self.presents += 1;
        self.visible.other()
    }

    fn set_palette_entry(&mut self, index: u8, color: Rgb555) {
        self.palette[usize::from(index)] = color;
    }
}

impl TextRenderer for HostDisplay {
    fn draw_digits(&mut self, buffer: BufferId, x: i32, y: i32, value: u16, color: u8) {
        self.draw_text(buffer, x, y, Digits::score(value).as_str(), color);
    }

    fn draw_text(&mut self, buffer: BufferId, x: i32, y: i32, text: &str, color: u8) {
        let i = self.target(buffer);
        for (n, ch) in text.chars().enumerate() {
            blit(&mut self.pages[i], x + 8 * n as i32, y, ch, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong::entity::EntityKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_present_flips_and_returns_hidden_buffer() {
        let mut screen = HostDisplay::new();
        assert_eq!(screen.present(), BufferId::A);
        assert_eq!(screen.visible(), BufferId::B);
        assert_eq!(screen.present(), BufferId::B);
        assert_eq!(screen.visible(), BufferId::A);
        assert_eq!(screen.presents(), 2);
    }

    #[test]
    #[should_panic(expected = "presented buffer")]
    fn test_drawing_into_visible_buffer_panics() {
        let mut screen = HostDisplay::new();
        screen.fill_rect(BufferId::A, 0, 0, 1, 1, 1);
    }

    #[test]
    fn test_rects_are_clipped_and_shown_after_present() {
        let mut screen = HostDisplay::new();
        screen.clear(BufferId::B, 5);
        screen.fill_rect(BufferId::B, 236, 156, 8, 8, 2);
        screen.present();
        assert_eq!(screen.pixel(0, 0), 5);
        assert_eq!(screen.pixel(239, 159), 2);
        assert_eq!(screen.pixel(235, 159), 5);
    }

    #[test]
    fn test_sprites_draw_over_page_and_clear_with_it() {
        let mut screen = HostDisplay::new();
        let ball = Sprite {
            kind: EntityKind::Ball,
            x: 116,
            y: 76,
            width: 8,
            height: 8,
            color: 4,
        };
        screen.clear(BufferId::B, 0);
        screen.place_sprite(BufferId::B, 2, &ball);
        screen.present();
        assert_eq!(screen.pixel(116, 76), 4);
        assert_eq!(screen.pixel(124, 76), 0);

        screen.clear(BufferId::A, 0);
        screen.present();
        screen.clear(BufferId::B, 0);
        screen.present();
        assert_eq!(screen.pixel(116, 76), 0);
    }

    #[test]
    fn test_digits_use_font() {
        let mut screen = HostDisplay::new();
        screen.clear(BufferId::B, 0);
        screen.draw_digits(BufferId::B, 0, 0, 1, 1);
        screen.present();
        // Tens cell blank, top row of '1' is 0x18: pixels 3 and 4
        let row: Vec<u8> = (0..16).map(|x| screen.pixel(x, 0)).collect();
        assert_eq!(row, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_ones_digit_stays_put_from_nine_to_ten() {
        // Ink in the (tens, ones) cells of a score drawn at (24, 8)
        let cells = |value: u16| {
            let mut screen = HostDisplay::new();
            screen.clear(BufferId::B, 0);
            screen.draw_digits(BufferId::B, 24, 8, value, 1);
            screen.present();
            let inked = |xs: std::ops::Range<usize>| {
                xs.flat_map(|x| (8..16).map(move |y| (x, y)))
                    .any(|(x, y)| screen.pixel(x, y) == 1)
            };
            (inked(24..32), inked(32..40))
        };
        assert_eq!(cells(9), (false, true));
        assert_eq!(cells(10), (true, true));
    }
}
