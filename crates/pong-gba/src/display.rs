//! LCD controller interface
//!
//! Covers the handful of registers the game needs: display control, the
//! vertical counter, BG0 control and the two palette banks. Two video
//! setups are used:
//! - Mode 4: 240x160, 8 bits per pixel, two pages selected by one bit
//! - Mode 0: tiled BG0 for text plus the object layer for entities
//!
//! # Example
//!
//! ```no_run
//! use pong_gba::display::{self, Color};
//!
//! display::set_bitmap_mode();
//! display::set_bg_color(0, Color::WHITE);
//!
//! loop {
//!     display::vsync();
//!     // Game logic here
//! }
//! ```

use pong::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pong::frame::BufferId;
use pong::palette::Rgb555;

/// Display control register
const REG_DISPCNT: *mut u16 = 0x0400_0000 as *mut u16;
/// Current scanline
const REG_VCOUNT: *const u16 = 0x0400_0006 as *const u16;
/// BG0 control register
const REG_BG0CNT: *mut u16 = 0x0400_0008 as *mut u16;

/// Background palette, 256 entries
const BG_PALETTE: *mut u16 = 0x0500_0000 as *mut u16;
/// Object palette, 16 banks of 16 entries
const OBJ_PALETTE: *mut u16 = 0x0500_0200 as *mut u16;

/// First scanline of vertical blank
pub const VBLANK_LINE: u16 = SCREEN_HEIGHT as u16;

/// Video memory addresses
pub mod vram {
    /// Mode 4 page 0 (also BG charblock 0 in mode 0)
    pub const PAGE0: usize = 0x0600_0000;
    /// Mode 4 page 1
    pub const PAGE1: usize = 0x0600_A000;
    /// BG0 screenblock 31
    pub const BG0_MAP: usize = 0x0600_F800;
    /// Object tiles (charblock 4)
    pub const OBJ_TILES: usize = 0x0601_0000;
    /// Object attribute memory
    pub const OAM: usize = 0x0700_0000;

    /// Bytes in one mode 4 page
    pub const PAGE_BYTES: usize = super::SCREEN_WIDTH as usize * super::SCREEN_HEIGHT as usize;
}

/// Display control bits
pub mod dispcnt {
    pub const MODE0: u16 = 0;
    pub const MODE4: u16 = 4;
    /// Show mode 4 page 1 instead of page 0
    pub const PAGE: u16 = 1 << 4;
    /// One-dimensional object tile mapping
    pub const OBJ_1D: u16 = 1 << 6;
    pub const BG0: u16 = 1 << 8;
    pub const BG2: u16 = 1 << 10;
    pub const OBJ: u16 = 1 << 12;
}

/// Hardware palette entry, `0bbbbbgggggrrrrr`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0x7FFF);
}

impl From<Rgb555> for Color {
    fn from(rgb: Rgb555) -> Self {
        Color(rgb.to_bgr15())
    }
}

/// Display control value for the mode 4 bitmap setup showing `page`
#[inline]
pub const fn bitmap_control(page: BufferId) -> u16 {
    let flip = match page {
        BufferId::A => 0,
        BufferId::B => dispcnt::PAGE,
    };
    dispcnt::MODE4 | dispcnt::BG2 | flip
}

/// Display control value for the mode 0 tile + object setup
#[inline]
pub const fn tiled_control() -> u16 {
    dispcnt::MODE0 | dispcnt::BG0 | dispcnt::OBJ | dispcnt::OBJ_1D
}

/// BG0 control: charblock 0, screenblock 31, 4bpp, 256x256
#[inline]
pub const fn bg0_control() -> u16 {
    31 << 8
}

/// Base address of the mode 4 page backing `buffer`
#[inline]
pub const fn page_addr(buffer: BufferId) -> usize {
    match buffer {
        BufferId::A => vram::PAGE0,
        BufferId::B => vram::PAGE1,
    }
}

/// Switch to mode 4 showing page 0
pub fn set_bitmap_mode() {
    write_dispcnt(bitmap_control(BufferId::A));
}

/// Switch to mode 0 with BG0 and objects enabled
pub fn set_tiled_mode() {
    unsafe {
        REG_BG0CNT.write_volatile(bg0_control());
    }
    write_dispcnt(tiled_control());
}

/// Show the mode 4 page backing `buffer`
pub fn show_page(buffer: BufferId) {
    write_dispcnt(bitmap_control(buffer));
}

#[inline]
fn write_dispcnt(value: u16) {
    unsafe {
        REG_DISPCNT.write_volatile(value);
    }
}

/// Current scanline, 0-227
#[inline]
pub fn vcount() -> u16 {
    unsafe { REG_VCOUNT.read_volatile() }
}

/// Wait for the start of the next vertical blank
///
/// Busy-waits out any blank already in progress first, so two calls never
/// return within the same blank.
pub fn vsync() {
    while vcount() >= VBLANK_LINE {}
    while vcount() < VBLANK_LINE {}
}

/// Set a background palette entry
pub fn set_bg_color(index: u8, color: Color) {
    unsafe {
        BG_PALETTE.add(usize::from(index)).write_volatile(color.0);
    }
}

/// Set one entry of an object palette bank
pub fn set_obj_color(bank: u8, index: u8, color: Color) {
    let slot = usize::from(bank & 0x0F) * 16 + usize::from(index & 0x0F);
    unsafe {
        OBJ_PALETTE.add(slot).write_volatile(color.0);
    }
}
