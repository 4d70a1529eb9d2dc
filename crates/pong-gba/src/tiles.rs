//! Tile graphics for the mode 0 backend
//!
//! Both layers use 4bpp tiles: 8 rows of eight 4-bit pixels, the leftmost
//! pixel in the lowest nibble. BG0 holds the font, one tile per glyph in
//! [`CHARSET`](crate::font::CHARSET) order so that tile 0 is blank. The
//! object layer holds three shapes drawn in pixel value 1: a solid paddle,
//! a rounded ball and a seven-pixel star. An object's color comes from its
//! palette bank.

use pong::entity::EntityKind;
use pong::render::Sprite;

use crate::display::vram;
use crate::font::{self, Glyph};
use crate::oam::{self, ObjAttr, Shape};

/// One 4bpp tile, a row per word
pub type Tile = [u32; 8];

/// Object tile indices
pub mod obj {
    /// Four stacked solid tiles
    pub const PADDLE: u16 = 0;
    /// Disc with clipped corners
    pub const BALL: u16 = 4;
    /// Four-pointed star centred on pixel (3, 3)
    pub const STAR: u16 = 5;
    pub const COUNT: usize = 6;
}

/// Text map columns (the hardware map is always 32 wide)
pub const MAP_COLUMNS: usize = 32;
/// Text map rows that reach the screen
pub const MAP_ROWS: usize = 20;

/// Expand a 1bpp glyph to a 4bpp tile drawn in `ink`
pub fn font_to_tile(glyph: &Glyph, ink: u8) -> Tile {
    let ink = u32::from(ink & 0x0F);
    let mut tile = [0; 8];
    for (row, bits) in tile.iter_mut().zip(glyph) {
        for c in 0..8 {
            if bits & (0x80 >> c) != 0 {
                *row |= ink << (c * 4);
            }
        }
    }
    tile
}

/// Tile whose top-left `size` x `size` pixels are `value`
pub fn block_tile(value: u8, size: usize) -> Tile {
    let size = size.min(8);
    let mut row = 0;
    for c in 0..size {
        row |= u32::from(value & 0x0F) << (c * 4);
    }
    let mut tile = [0; 8];
    tile[..size].fill(row);
    tile
}

const BALL_TILE: Tile = [
    0x0011_1100,
    0x0111_1110,
    0x1111_1111,
    0x1111_1111,
    0x1111_1111,
    0x1111_1111,
    0x0111_1110,
    0x0011_1100,
];

const STAR_TILE: Tile = [
    0x0000_1000,
    0x0001_1100,
    0x0010_1010,
    0x0111_1111,
    0x0010_1010,
    0x0001_1100,
    0x0000_1000,
    0x0000_0000,
];

/// The object tile set, indexed by the constants in [`obj`]
pub fn object_tiles() -> [Tile; obj::COUNT] {
    let solid = block_tile(1, 8);
    [solid, solid, solid, solid, BALL_TILE, STAR_TILE]
}

/// OAM entry for a sprite request, or `None` if no hardware shape fits
pub fn object_for(sprite: &Sprite) -> Option<ObjAttr> {
    let (tile, shape, size) = match sprite.kind {
        EntityKind::Particle => (obj::STAR, Shape::Square, 0),
        EntityKind::Paddle => {
            let (shape, size) = oam::shape_for(sprite.width, sprite.height)?;
            (obj::PADDLE, shape, size)
        }
        EntityKind::Ball => {
            let (shape, size) = oam::shape_for(sprite.width, sprite.height)?;
            (obj::BALL, shape, size)
        }
    };
    Some(ObjAttr::new(sprite.x, sprite.y, shape, size, tile, sprite.color))
}

/// Copy `tiles` into character memory starting at `base`
///
/// # Safety
///
/// `base` must point into video memory with room for every tile.
pub unsafe fn load(base: usize, tiles: &[Tile]) {
    let dst = base as *mut u32;
    for (i, word) in tiles.iter().flatten().enumerate() {
        unsafe {
            dst.add(i).write_volatile(*word);
        }
    }
}

/// Load the font into BG charblock 0
pub fn load_font(ink: u8) {
    for (i, glyph) in font::glyphs().iter().enumerate() {
        unsafe {
            load(vram::PAGE0 + i * 32, &[font_to_tile(glyph, ink)]);
        }
    }
}

/// Load the object tile set into charblock 4
pub fn load_objects() {
    unsafe {
        load(vram::OBJ_TILES, &object_tiles());
    }
}

/// RAM copy of the visible part of the BG0 map
#[derive(Clone, Debug)]
pub struct TextMap {
    cells: [u16; MAP_COLUMNS * MAP_ROWS],
}

impl TextMap {
    pub const fn new() -> Self {
        TextMap {
            cells: [0; MAP_COLUMNS * MAP_ROWS],
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Write `text` starting at pixel (`x`, `y`), rounded down to the cell
    /// grid; characters past the right edge are dropped
    pub fn put_str(&mut self, x: i32, y: i32, text: &str) {
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = (x as usize / 8, y as usize / 8);
        if row >= MAP_ROWS {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let col = col + i;
            if col >= MAP_COLUMNS {
                break;
            }
            self.cells[row * MAP_COLUMNS + col] = font::index_of(ch) as u16;
        }
    }

    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> u16 {
        self.cells[row * MAP_COLUMNS + col]
    }

    /// Copy to screenblock 31; call during vertical blank
    pub fn flush(&self) {
        let dst = vram::BG0_MAP as *mut u16;
        for (i, cell) in self.cells.iter().enumerate() {
            unsafe {
                dst.add(i).write_volatile(*cell);
            }
        }
    }
}

impl Default for TextMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_font_to_tile_nibble_order() {
        let glyph: Glyph = [0x80, 0x01, 0xF0, 0, 0, 0, 0, 0xFF];
        let tile = font_to_tile(&glyph, 1);
        assert_eq!(tile[0], 0x0000_0001);
        assert_eq!(tile[1], 0x1000_0000);
        assert_eq!(tile[2], 0x0000_1111);
        assert_eq!(tile[7], 0x1111_1111);
    }

    /// Pixel value at column `c` of a tile row
    fn pixel(row: u32, c: usize) -> u32 {
        (row >> (c * 4)) & 0xF
    }

    #[test]
    fn test_paddle_tiles_are_solid() {
        let tiles = object_tiles();
        assert!(tiles[..4].iter().all(|t| *t == [0x1111_1111; 8]));
        assert_eq!(block_tile(2, 3)[..3], [0x0000_0222; 3]);
        assert_eq!(block_tile(2, 3)[3], 0);
    }

    #[test]
    fn test_ball_tile_has_rounded_corners() {
        let ball = object_tiles()[usize::from(obj::BALL)];
        for (r, c) in [(0, 0), (0, 7), (7, 0), (7, 7), (0, 1), (1, 0)] {
            assert_eq!(pixel(ball[r], c), 0, "corner ({c}, {r})");
        }
        assert_eq!(ball[3], 0x1111_1111);
        // Symmetric top to bottom and left to right
        for (r, row) in ball.iter().enumerate() {
            assert_eq!(*row, ball[7 - r]);
            assert!((0..8).all(|c| pixel(*row, c) == pixel(*row, 7 - c)));
        }
    }

    #[test]
    fn test_star_tile_shape() {
        let star = object_tiles()[usize::from(obj::STAR)];
        let lit: usize = star
            .iter()
            .map(|row| (0..8).filter(|&c| pixel(*row, c) != 0).count())
            .sum();
        assert_eq!(lit, 21);
        // Full centre row and column
        assert!((0..7).all(|c| pixel(star[3], c) == 1));
        assert!((0..7).all(|r| pixel(star[r], 3) == 1));
        // Nothing in the last row or column
        assert_eq!(star[7], 0);
        assert!(star.iter().all(|row| pixel(*row, 7) == 0));
    }

    #[test]
    fn test_object_for_entities() {
        let paddle = Sprite {
            kind: EntityKind::Paddle,
            x: 10,
            y: 64,
            width: 8,
            height: 32,
            color: 2,
        };
        let attr = object_for(&paddle).unwrap();
        assert_eq!((attr.x(), attr.y(), attr.tile(), attr.palbank()), (10, 64, obj::PADDLE, 2));

        let star = Sprite {
            kind: EntityKind::Particle,
            width: 4,
            height: 4,
            color: 12,
            ..paddle
        };
        assert_eq!(object_for(&star).unwrap().tile(), obj::STAR);

        let odd = Sprite {
            kind: EntityKind::Ball,
            width: 6,
            height: 6,
            ..paddle
        };
        assert_eq!(object_for(&odd), None);
    }

    #[test]
    fn test_text_map_placement() {
        let mut map = TextMap::new();
        map.put_str(96, 80, "P1 WINS!");
        assert_eq!(map.cell(12, 10), font::index_of('P') as u16);
        assert_eq!(map.cell(14, 10), 0);
        assert_eq!(map.cell(19, 10), font::index_of('!') as u16);

        map.put_str(248, 8, "12");
        assert_eq!(map.cell(31, 1), font::index_of('1') as u16);
        map.clear();
        assert_eq!(map.cell(12, 10), 0);
    }

    #[test]
    fn test_single_digit_score_sits_in_ones_cell() {
        let mut map = TextMap::new();
        map.put_str(24, 8, font::Digits::score(7).as_str());
        assert_eq!(map.cell(3, 1), 0);
        assert_eq!(map.cell(4, 1), font::index_of('7') as u16);

        map.put_str(24, 8, font::Digits::score(10).as_str());
        assert_eq!(map.cell(3, 1), font::index_of('1') as u16);
        assert_eq!(map.cell(4, 1), font::index_of('0') as u16);
    }
}
