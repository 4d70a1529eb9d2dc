//! Display drivers for the console and the entry point that wires them
//! into the frame loop
//!
//! [`BitmapDisplay`] backs the framebuffer backend with the two mode 4
//! pages. [`TiledDisplay`] backs the sprite backend: entities become
//! objects, text goes to BG0, and each of the two buffers is a RAM copy of
//! the object table and text map that is copied to video memory when it is
//! presented.
//!
//! Construct at most one display at a time; both own the video hardware.

use core::slice;

use pong::config::MatchConfig;
use pong::frame::{BufferId, Context, DisplayDriver, FrameLoop, TextRenderer};
use pong::palette::{Rgb555, index};
use pong::render::{Backend, Sprite};

use crate::display::{self, Color};
use crate::dma;
use crate::font::{self, Digits};
use crate::keypad::Keypad;
use crate::oam::ShadowOam;
use crate::raster::{self, PAGE_HALFWORDS};
use crate::tiles::{self, TextMap};

/// Mode 4 page-flipping display
#[derive(Debug)]
pub struct BitmapDisplay {
    back: BufferId,
}

impl BitmapDisplay {
    /// Switch to mode 4, showing page 0
    pub fn new() -> Self {
        display::set_bitmap_mode();
        BitmapDisplay { back: BufferId::B }
    }

    fn page(&mut self, buffer: BufferId) -> &mut [u16] {
        debug_assert_eq!(buffer, self.back, "drawing into the shown page");
        let base = display::page_addr(buffer) as *mut u16;
        unsafe { slice::from_raw_parts_mut(base, PAGE_HALFWORDS) }
    }
}

impl Default for BitmapDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDriver for BitmapDisplay {
    fn clear(&mut self, buffer: BufferId, color: u8) {
        let base = self.page(buffer).as_mut_ptr();
        unsafe {
            dma::fill16(base, raster::pair(color), PAGE_HALFWORDS);
        }
    }

    fn fill_rect(&mut self, buffer: BufferId, x: i32, y: i32, w: i32, h: i32, color: u8) {
        raster::fill_rect(self.page(buffer), x, y, w, h, color);
    }

    fn present(&mut self) -> BufferId {
        display::vsync();
        display::show_page(self.back);
        self.back = self.back.other();
        self.back
    }

    fn set_palette_entry(&mut self, index: u8, color: Rgb555) {
        display::set_bg_color(index, Color::from(color));
    }
}

impl TextRenderer for BitmapDisplay {
    fn draw_digits(&mut self, buffer: BufferId, x: i32, y: i32, value: u16, color: u8) {
        self.draw_text(buffer, x, y, Digits::score(value).as_str(), color);
    }

    fn draw_text(&mut self, buffer: BufferId, x: i32, y: i32, text: &str, color: u8) {
        let page = self.page(buffer);
        for (i, ch) in text.chars().enumerate() {
            raster::blit_glyph(page, x + 8 * i as i32, y, font::glyph(ch), color);
        }
    }
}

/// Mode 0 display: objects for entities, BG0 for text
///
/// The backdrop is always background palette entry 0, so `clear` only
/// blanks the buffer; the color argument has no effect. There is no pixel
/// layer, so `fill_rect` draws nothing.
#[derive(Debug)]
pub struct TiledDisplay {
    objects: [ShadowOam; 2],
    text: [TextMap; 2],
    back: BufferId,
}

impl TiledDisplay {
    /// Switch to mode 0 and load the font and object tiles
    pub fn new() -> Self {
        display::set_tiled_mode();
        tiles::load_font(index::INK);
        tiles::load_objects();

        let objects = [ShadowOam::new(), ShadowOam::new()];
        let text = [TextMap::new(), TextMap::new()];
        objects[0].flush();
        text[0].flush();

        TiledDisplay {
            objects,
            text,
            back: BufferId::B,
        }
    }
}

impl Default for TiledDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDriver for TiledDisplay {
    fn clear(&mut self, buffer: BufferId, _color: u8) {
        self.objects[buffer.index()].hide_all();
        self.text[buffer.index()].clear();
    }

    fn fill_rect(&mut self, _buffer: BufferId, _x: i32, _y: i32, _w: i32, _h: i32, _color: u8) {}

    fn place_sprite(&mut self, buffer: BufferId, slot: usize, sprite: &Sprite) {
        let table = &mut self.objects[buffer.index()];
        match tiles::object_for(sprite) {
            Some(attr) => table.set(slot, attr),
            None => {
                log::warn!("no object shape for {}x{} sprite", sprite.width, sprite.height);
                table.hide(slot);
            }
        }
    }

    fn present(&mut self) -> BufferId {
        display::vsync();
        let shown = self.back;
        self.objects[shown.index()].flush();
        self.text[shown.index()].flush();
        self.back = shown.other();
        self.back
    }

    /// Each palette index doubles as an object palette bank whose entry 1
    /// is the same color, since object tiles are drawn in pixel value 1
    fn set_palette_entry(&mut self, index: u8, color: Rgb555) {
        let color = Color::from(color);
        display::set_bg_color(index, color);
        display::set_obj_color(index, 1, color);
    }
}

impl TextRenderer for TiledDisplay {
    fn draw_digits(&mut self, buffer: BufferId, x: i32, y: i32, value: u16, _color: u8) {
        self.text[buffer.index()].put_str(x, y, Digits::score(value).as_str());
    }

    fn draw_text(&mut self, buffer: BufferId, x: i32, y: i32, text: &str, _color: u8) {
        self.text[buffer.index()].put_str(x, y, text);
    }
}

/// Play one match with the default tuning until power-off
pub fn run(backend: Backend) -> ! {
    run_with(MatchConfig::default(), backend)
}

pub fn run_with(cfg: MatchConfig, backend: Backend) -> ! {
    match backend {
        Backend::Framebuffer => {
            let ctx = Context::new(BitmapDisplay::new(), Keypad);
            FrameLoop::new(ctx, cfg, backend).run()
        }
        Backend::Sprites => {
            let ctx = Context::new(TiledDisplay::new(), Keypad);
            FrameLoop::new(ctx, cfg, backend).run()
        }
    }
}
