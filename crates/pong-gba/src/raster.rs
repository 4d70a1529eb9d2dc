//! Software drawing into 8bpp pages
//!
//! Video memory ignores byte writes, so a mode 4 page is handled as
//! halfwords, each holding two pixels: the low byte is the even (left)
//! pixel, the high byte the odd one. All drawing clips to the screen.

use pong::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::font::Glyph;

/// Halfwords per scanline
pub const PITCH: usize = SCREEN_WIDTH as usize / 2;
/// Halfwords per page
pub const PAGE_HALFWORDS: usize = PITCH * SCREEN_HEIGHT as usize;

/// Screen-clipped rectangle, `x0..x1` by `y0..y1`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

/// Clip a rectangle to the screen; `None` when nothing is left
pub fn clip(x: i32, y: i32, w: i32, h: i32) -> Option<Span> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(w).min(SCREEN_WIDTH);
    let y1 = y.saturating_add(h).min(SCREEN_HEIGHT);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some(Span {
        x0: x0 as usize,
        y0: y0 as usize,
        x1: x1 as usize,
        y1: y1 as usize,
    })
}

/// Both pixels of a halfword set to `color`
#[inline]
pub const fn pair(color: u8) -> u16 {
    u16::from_le_bytes([color, color])
}

/// Set one pixel, keeping its neighbor in the same halfword
#[inline]
pub fn plot(page: &mut [u16], x: usize, y: usize, color: u8) {
    let cell = &mut page[y * PITCH + x / 2];
    *cell = if x & 1 == 0 {
        (*cell & 0xFF00) | u16::from(color)
    } else {
        (*cell & 0x00FF) | (u16::from(color) << 8)
    };
}

pub fn fill_rect(page: &mut [u16], x: i32, y: i32, w: i32, h: i32, color: u8) {
    let Some(span) = clip(x, y, w, h) else {
        return;
    };
    let both = pair(color);
    for row in span.y0..span.y1 {
        let mut col = span.x0;
        if col & 1 == 1 {
            plot(page, col, row, color);
            col += 1;
        }
        while col + 1 < span.x1 {
            page[row * PITCH + col / 2] = both;
            col += 2;
        }
        if col < span.x1 {
            plot(page, col, row, color);
        }
    }
}

/// Draw the set bits of an 8x8 glyph, leaving the rest untouched
pub fn blit_glyph(page: &mut [u16], x: i32, y: i32, glyph: &Glyph, color: u8) {
    for (r, bits) in glyph.iter().enumerate() {
        for c in 0..8 {
            if bits & (0x80 >> c) == 0 {
                continue;
            }
            let (px, py) = (x + c, y + r as i32);
            if (0..SCREEN_WIDTH).contains(&px) && (0..SCREEN_HEIGHT).contains(&py) {
                plot(page, px as usize, py as usize, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> Vec<u16> {
        vec![0; PAGE_HALFWORDS]
    }

    fn pixel(page: &[u16], x: usize, y: usize) -> u8 {
        page[y * PITCH + x / 2].to_le_bytes()[x & 1]
    }

    #[test]
    fn test_clip() {
        assert_eq!(
            clip(-4, 150, 8, 32),
            Some(Span {
                x0: 0,
                y0: 150,
                x1: 4,
                y1: 160
            })
        );
        assert_eq!(clip(240, 0, 8, 8), None);
        assert_eq!(clip(0, -8, 8, 8), None);
    }

    #[test]
    fn test_odd_edges_keep_neighbors() {
        let mut p = page();
        fill_rect(&mut p, 0, 0, 240, 1, 7);
        fill_rect(&mut p, 3, 0, 4, 1, 2);
        let row: Vec<u8> = (0..9).map(|x| pixel(&p, x, 0)).collect();
        assert_eq!(row, [7, 7, 7, 2, 2, 2, 2, 7, 7]);
    }

    #[test]
    fn test_glyph_bits_msb_left() {
        let mut p = page();
        let glyph: Glyph = [0x81, 0, 0, 0, 0, 0, 0, 0x18];
        blit_glyph(&mut p, 10, 20, &glyph, 1);
        assert_eq!(pixel(&p, 10, 20), 1);
        assert_eq!(pixel(&p, 17, 20), 1);
        assert_eq!(pixel(&p, 11, 20), 0);
        assert_eq!(pixel(&p, 13, 27), 1);
        assert_eq!(pixel(&p, 14, 27), 1);
    }

    #[test]
    fn test_glyph_clipped_at_edge() {
        let mut p = page();
        blit_glyph(&mut p, 236, 156, &[0xFF; 8], 3);
        assert_eq!(pixel(&p, 239, 159), 3);
        assert_eq!(pixel(&p, 236, 156), 3);
    }
}
