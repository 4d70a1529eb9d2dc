//! Keypad input
//!
//! KEYINPUT reports the ten buttons active-low in the same bit order as
//! [`Buttons`], so decoding is a single inversion.

use pong::frame::InputDriver;
use pong::input::Buttons;

/// Key status register (0 = pressed)
const REG_KEYINPUT: *const u16 = 0x0400_0130 as *const u16;

/// Convert a raw KEYINPUT value to active-high buttons
#[inline]
pub const fn decode(raw: u16) -> Buttons {
    Buttons(!raw & Buttons::MASK)
}

/// Read the keypad now
pub fn read() -> Buttons {
    decode(unsafe { REG_KEYINPUT.read_volatile() })
}

/// The console keypad as an input driver
#[derive(Debug, Default)]
pub struct Keypad;

impl InputDriver for Keypad {
    fn current_buttons(&mut self) -> Buttons {
        read()
    }
}
