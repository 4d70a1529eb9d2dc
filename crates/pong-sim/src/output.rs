//! Frame dumps
//!
//! A frame is written either as a binary PPM image (palette resolved to
//! 24-bit color) or as ASCII art with one character per pixel.

use std::io::{self, Write};

use pong::palette::{Rgb555, index};

use crate::screen::{HEIGHT, WIDTH};

/// Dump format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Format {
    #[default]
    Ppm,
    Ascii,
}

/// Write `pixels` (palette indices, row-major) in `format`
pub fn write_frame<W: Write>(out: &mut W, pixels: &[u8], palette: &[Rgb555], format: Format) -> io::Result<()> {
    match format {
        Format::Ppm => write_ppm(out, pixels, palette),
        Format::Ascii => write_ascii(out, pixels),
    }
}

pub fn write_ppm<W: Write>(out: &mut W, pixels: &[u8], palette: &[Rgb555]) -> io::Result<()> {
    write!(out, "P6\n{WIDTH} {HEIGHT}\n255\n")?;
    let mut body = Vec::with_capacity(pixels.len() * 3);
    for &px in pixels {
        let color = palette.get(usize::from(px)).copied().unwrap_or_default();
        body.extend_from_slice(&color.to_rgb888());
    }
    out.write_all(&body)
}

/// Character used for a palette index in ASCII dumps
pub fn glyph_for(color: u8) -> char {
    match color {
        index::BACKGROUND => '.',
        index::INK => '#',
        index::LEFT_PADDLE => 'L',
        index::RIGHT_PADDLE => 'R',
        index::BALL => 'o',
        c if (index::STAR_BASE..index::STAR_BASE + 8).contains(&c) => '*',
        _ => '?',
    }
}

pub fn write_ascii<W: Write>(out: &mut W, pixels: &[u8]) -> io::Result<()> {
    for row in pixels.chunks(WIDTH) {
        let line: String = row.iter().map(|&c| glyph_for(c)).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
