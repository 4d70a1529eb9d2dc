//! # pong-gba - Game Boy Advance support for the pong core
//!
//! Register-level access to the parts of the GBA the game uses, and the two
//! display drivers that plug into [`pong::frame::FrameLoop`].
//!
//! ## Features
//!
//! - **Display**: mode 4 page flipping, mode 0 BG0 setup, palettes, vsync
//! - **DMA**: fixed-source fills for clearing pages
//! - **Objects**: attribute encoding and a shadow table flushed in vblank
//! - **Keypad**: KEYINPUT decoding
//! - **Tiles & font**: 8x8 glyphs expanded to 4bpp tiles
//!
//! ## Quick Start
//!
//! ```no_run
//! use pong::render::Backend;
//!
//! pong_gba::run(Backend::Sprites);
//! ```
//!
//! Linking a bootable ROM additionally needs the usual cartridge header,
//! startup code and linker script for the target; none of that lives here.
//!
//! ## Modules
//!
//! - [`display`] - LCD control, palettes, vertical blank
//! - [`dma`] - DMA channel 3 fills
//! - [`oam`] - Hardware objects
//! - [`keypad`] - Button input
//! - [`raster`] - Software drawing into 8bpp pages
//! - [`tiles`] - 4bpp tiles and the BG0 text map
//! - [`font`] - The 8x8 font
//! - [`platform`] - Display drivers and the entry point

#![cfg_attr(not(test), no_std)]

pub mod display;
pub mod dma;
pub mod font;
pub mod keypad;
pub mod oam;
pub mod platform;
pub mod raster;
pub mod tiles;

pub use platform::{run, run_with};

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::display::{self, Color};
    pub use crate::keypad::{self, Keypad};
    pub use crate::oam::{ObjAttr, Shape, ShadowOam};
    pub use crate::platform::{BitmapDisplay, TiledDisplay};
}
