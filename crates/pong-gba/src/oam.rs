//! Object attribute memory
//!
//! The GBA has 128 hardware objects. Each is 8 to 64 pixels on a side,
//! chosen by a shape (square, wide, tall) and a size step. Entries are
//! staged in a [`ShadowOam`] during the frame and copied to OAM during
//! vertical blank.
//!
//! # Example
//!
//! ```no_run
//! use pong_gba::oam::{ObjAttr, ShadowOam, Shape};
//!
//! let mut table = ShadowOam::new();
//! // 8x32 object at (100, 50) using tile 0 and palette bank 2
//! table.set(0, ObjAttr::new(100, 50, Shape::Tall, 2, 0, 2));
//! table.flush();
//! ```

use crate::display::vram;

/// Number of hardware objects
pub const MAX_OBJECTS: usize = 128;

/// attr0 bit that disables an object
const HIDE: u16 = 1 << 9;

/// Object shape
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Shape {
    Square = 0,
    Wide = 1,
    Tall = 2,
}

/// Shape and size step for a `width` x `height` pixel object, if the
/// hardware has one
///
/// | size | square | wide  | tall  |
/// |------|--------|-------|-------|
/// | 0    | 8x8    | 16x8  | 8x16  |
/// | 1    | 16x16  | 32x8  | 8x32  |
/// | 2    | 32x32  | 32x16 | 16x32 |
/// | 3    | 64x64  | 64x32 | 32x64 |
pub const fn shape_for(width: i32, height: i32) -> Option<(Shape, u8)> {
    Some(match (width, height) {
        (8, 8) => (Shape::Square, 0),
        (16, 16) => (Shape::Square, 1),
        (32, 32) => (Shape::Square, 2),
        (64, 64) => (Shape::Square, 3),
        (16, 8) => (Shape::Wide, 0),
        (32, 8) => (Shape::Wide, 1),
        (32, 16) => (Shape::Wide, 2),
        (64, 32) => (Shape::Wide, 3),
        (8, 16) => (Shape::Tall, 0),
        (8, 32) => (Shape::Tall, 1),
        (16, 32) => (Shape::Tall, 2),
        (32, 64) => (Shape::Tall, 3),
        _ => return None,
    })
}

/// One OAM entry (the fourth halfword belongs to the affine tables and is
/// left alone)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ObjAttr {
    pub attr0: u16,
    pub attr1: u16,
    pub attr2: u16,
}

impl ObjAttr {
    pub const HIDDEN: ObjAttr = ObjAttr {
        attr0: HIDE,
        attr1: 0,
        attr2: 0,
    };

    /// Visible 4bpp object; coordinates wrap the way the hardware does
    /// (y modulo 256, x modulo 512)
    pub const fn new(x: i32, y: i32, shape: Shape, size: u8, tile: u16, palbank: u8) -> Self {
        ObjAttr {
            attr0: (y as u16 & 0x00FF) | ((shape as u16) << 14),
            attr1: (x as u16 & 0x01FF) | (((size & 3) as u16) << 14),
            attr2: (tile & 0x03FF) | (((palbank & 0x0F) as u16) << 12),
        }
    }

    #[inline]
    pub const fn is_hidden(&self) -> bool {
        self.attr0 & HIDE != 0
    }

    #[inline]
    pub const fn x(&self) -> u16 {
        self.attr1 & 0x01FF
    }

    #[inline]
    pub const fn y(&self) -> u16 {
        self.attr0 & 0x00FF
    }

    #[inline]
    pub const fn tile(&self) -> u16 {
        self.attr2 & 0x03FF
    }

    #[inline]
    pub const fn palbank(&self) -> u8 {
        (self.attr2 >> 12) as u8
    }
}

/// RAM copy of the object table
#[derive(Clone, Debug)]
pub struct ShadowOam {
    entries: [ObjAttr; MAX_OBJECTS],
}

impl ShadowOam {
    /// All objects hidden
    pub const fn new() -> Self {
        ShadowOam {
            entries: [ObjAttr::HIDDEN; MAX_OBJECTS],
        }
    }

    pub fn set(&mut self, index: usize, attr: ObjAttr) {
        self.entries[index] = attr;
    }

    pub fn hide(&mut self, index: usize) {
        self.entries[index] = ObjAttr::HIDDEN;
    }

    pub fn hide_all(&mut self) {
        self.entries.fill(ObjAttr::HIDDEN);
    }

    #[inline]
    pub fn get(&self, index: usize) -> &ObjAttr {
        &self.entries[index]
    }

    /// Copy every entry to OAM; call during vertical blank
    pub fn flush(&self) {
        let oam = vram::OAM as *mut u16;
        for (i, entry) in self.entries.iter().enumerate() {
            unsafe {
                let slot = oam.add(i * 4);
                slot.write_volatile(entry.attr0);
                slot.add(1).write_volatile(entry.attr1);
                slot.add(2).write_volatile(entry.attr2);
            }
        }
    }
}

impl Default for ShadowOam {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paddle_and_ball_shapes() {
        assert_eq!(shape_for(8, 32), Some((Shape::Tall, 1)));
        assert_eq!(shape_for(8, 8), Some((Shape::Square, 0)));
        assert_eq!(shape_for(4, 4), None);
    }

    #[test]
    fn test_attr_encoding() {
        let attr = ObjAttr::new(222, 64, Shape::Tall, 1, 0, 3);
        assert_eq!(
            attr,
            ObjAttr {
                attr0: 0x8040,
                attr1: 0x40DE,
                attr2: 0x3000,
            }
        );
        assert!(!attr.is_hidden());
        assert_eq!((attr.x(), attr.y(), attr.tile(), attr.palbank()), (222, 64, 0, 3));
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let attr = ObjAttr::new(-4, -2, Shape::Square, 0, 5, 8);
        assert_eq!(attr.x(), 508);
        assert_eq!(attr.y(), 254);
    }

    #[test]
    fn test_shadow_starts_hidden() {
        let mut table = ShadowOam::new();
        assert!(table.get(127).is_hidden());
        table.set(3, ObjAttr::new(0, 0, Shape::Square, 0, 4, 4));
        assert!(!table.get(3).is_hidden());
        table.hide_all();
        assert!(table.get(3).is_hidden());
    }
}
