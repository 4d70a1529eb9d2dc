//! Palette layout and color tables
//!
//! Entities carry a palette *index*, never a color. The display driver owns
//! the color table; the core only tells it what to store at each index.

/// 15-bit color, 5 bits per channel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb555 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb555 {
    pub const WHITE: Rgb555 = Rgb555::new(31, 31, 31);
    pub const BLACK: Rgb555 = Rgb555::new(0, 0, 0);
    pub const GREEN: Rgb555 = Rgb555::new(0, 31, 0);

    /// Create from 5-bit components (values above 31 are masked)
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb555 {
            r: r & 0x1F,
            g: g & 0x1F,
            b: b & 0x1F,
        }
    }

    /// Pack as `0bbbbbgggggrrrrr`, the layout of hardware palette RAM
    #[inline]
    pub const fn to_bgr15(self) -> u16 {
        (self.r as u16) | ((self.g as u16) << 5) | ((self.b as u16) << 10)
    }

    /// Expand to 8-bit channels
    #[inline]
    pub const fn to_rgb888(self) -> [u8; 3] {
        [
            (self.r << 3) | (self.r >> 2),
            (self.g << 3) | (self.g >> 2),
            (self.b << 3) | (self.b >> 2),
        ]
    }
}

/// Palette indices used by the game
pub mod index {
    /// Playfield background
    pub const BACKGROUND: u8 = 0;
    /// Scoreboard and banner text
    pub const INK: u8 = 1;
    pub const LEFT_PADDLE: u8 = 2;
    pub const RIGHT_PADDLE: u8 = 3;
    pub const BALL: u8 = 4;
    /// First of the eight celebration colors
    pub const STAR_BASE: u8 = 8;
}

/// Left paddle color cycle
pub const WARM_COLORS: [Rgb555; 4] = [
    Rgb555::new(31, 0, 0),
    Rgb555::new(31, 10, 0),
    Rgb555::new(31, 20, 0),
    Rgb555::new(31, 31, 0),
];

/// Right paddle color cycle
pub const COOL_COLORS: [Rgb555; 4] = [
    Rgb555::new(0, 0, 31),
    Rgb555::new(0, 31, 31),
    Rgb555::new(0, 31, 0),
    Rgb555::new(10, 10, 31),
];

/// Celebration colors, one per star slot
pub const STAR_COLORS: [Rgb555; 8] = [
    Rgb555::new(31, 0, 0),
    Rgb555::new(31, 31, 0),
    Rgb555::new(0, 31, 0),
    Rgb555::new(0, 31, 31),
    Rgb555::new(0, 0, 31),
    Rgb555::new(31, 0, 31),
    Rgb555::new(31, 15, 0),
    Rgb555::new(15, 0, 31),
];

/// Steps through a fixed color table, wrapping at the end
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    colors: &'static [Rgb555],
    current: usize,
}

impl ColorCycle {
    pub const fn new(colors: &'static [Rgb555]) -> Self {
        ColorCycle { colors, current: 0 }
    }

    #[inline]
    pub fn current(&self) -> Rgb555 {
        self.colors[self.current]
    }

    /// Move to the next color and return it
    pub fn advance(&mut self) -> Rgb555 {
        self.current = (self.current + 1) % self.colors.len();
        self.current()
    }
}

/// Mutable part of the palette: the two paddle cycles
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub left: ColorCycle,
    pub right: ColorCycle,
}

impl Palette {
    pub const fn new() -> Self {
        Palette {
            left: ColorCycle::new(&WARM_COLORS),
            right: ColorCycle::new(&COOL_COLORS),
        }
    }

    /// Every `(index, color)` pair that must be loaded before the first frame
    pub fn initial_entries(&self) -> impl Iterator<Item = (u8, Rgb555)> + '_ {
        let fixed = [
            (index::BACKGROUND, Rgb555::WHITE),
            (index::INK, Rgb555::BLACK),
            (index::LEFT_PADDLE, self.left.current()),
            (index::RIGHT_PADDLE, self.right.current()),
            (index::BALL, Rgb555::GREEN),
        ];
        let stars = STAR_COLORS
            .iter()
            .enumerate()
            .map(|(i, &c)| (index::STAR_BASE + i as u8, c));
        fixed.into_iter().chain(stars)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
