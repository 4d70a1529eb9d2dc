//! Button state and edge detection
//!
//! The input driver only reports which buttons are held right now. Turning
//! that into "just pressed" is done here by comparing against the mask from
//! the previous tick.
//!
//! # Example
//!
//! ```
//! use pong::input::{Button, Buttons, KeyState};
//!
//! let mut keys = KeyState::new();
//! keys.update(Buttons::from(Button::Start));
//! assert!(keys.pressed().contains(Button::Start));
//!
//! keys.update(Buttons::from(Button::Start));
//! assert!(keys.held().contains(Button::Start));
//! assert!(!keys.pressed().contains(Button::Start));
//! ```

/// Button flags, laid out like the GBA KEYINPUT register (active-high here)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u16)]
pub enum Button {
    A = 0x0001,
    B = 0x0002,
    Select = 0x0004,
    Start = 0x0008,
    /// D-pad Right
    Right = 0x0010,
    /// D-pad Left
    Left = 0x0020,
    /// D-pad Up
    Up = 0x0040,
    /// D-pad Down
    Down = 0x0080,
    /// Right shoulder
    R = 0x0100,
    /// Left shoulder
    L = 0x0200,
}

impl Button {
    /// Every button, in bit order
    pub const ALL: [Button; 10] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::R,
        Button::L,
    ];

    /// Canonical upper-case name
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::Select => "SELECT",
            Button::Start => "START",
            Button::Right => "RIGHT",
            Button::Left => "LEFT",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::R => "R",
            Button::L => "L",
        }
    }
}

/// Set of buttons as a bitfield
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Buttons(pub u16);

impl Buttons {
    /// No buttons pressed
    pub const NONE: Buttons = Buttons(0);
    /// Mask of the ten real buttons
    pub const MASK: u16 = 0x03FF;

    /// Check if a specific button is in the set
    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        (self.0 & button as u16) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get raw button flags
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        Buttons(button as u16)
    }
}

impl core::ops::BitOr for Button {
    type Output = Buttons;
    fn bitor(self, other: Button) -> Buttons {
        Buttons(self as u16 | other as u16)
    }
}

impl core::ops::BitOr<Button> for Buttons {
    type Output = Buttons;
    fn bitor(self, other: Button) -> Buttons {
        Buttons(self.0 | other as u16)
    }
}

/// Held/pressed/released tracking across ticks
#[derive(Clone, Copy, Default, Debug)]
pub struct KeyState {
    prev: Buttons,
    curr: Buttons,
}

impl KeyState {
    pub const fn new() -> Self {
        KeyState {
            prev: Buttons::NONE,
            curr: Buttons::NONE,
        }
    }

    /// Latch this tick's mask (call exactly once per tick)
    pub fn update(&mut self, now: Buttons) {
        self.prev = self.curr;
        self.curr = Buttons(now.0 & Buttons::MASK);
    }

    /// Buttons currently held
    #[inline]
    pub const fn held(&self) -> Buttons {
        self.curr
    }

    /// Buttons that went from released to pressed this tick
    #[inline]
    pub const fn pressed(&self) -> Buttons {
        Buttons(self.curr.0 & !self.prev.0)
    }

    /// Buttons that went from pressed to released this tick
    #[inline]
    pub const fn released(&self) -> Buttons {
        Buttons(!self.curr.0 & self.prev.0)
    }
}
