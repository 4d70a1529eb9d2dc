//! Scripted controller input
//!
//! A script is plain text with one directive per line:
//!
//! ```text
//! # move the left paddle down, then cycle its color once
//! 30 DOWN
//! 1 SELECT
//! 10
//! 45 UP A
//! ```
//!
//! Each directive holds the listed buttons for the given number of frames;
//! a directive with no buttons holds nothing. `#` starts a comment. Once the
//! script runs out, no buttons are held.

use std::str::FromStr;

use pong::frame::InputDriver;
use pong::input::{Button, Buttons};

use crate::error::{SimError, SimResult};

/// Hold `buttons` for `frames` frames
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Directive {
    pub frames: u32,
    pub buttons: Buttons,
}

/// Input driver that replays a parsed script
#[derive(Clone, Debug, Default)]
pub struct InputScript {
    directives: Vec<Directive>,
    cursor: usize,
    used: u32,
}

impl InputScript {
    /// A script that never presses anything
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn new(directives: Vec<Directive>) -> Self {
        InputScript {
            directives,
            cursor: 0,
            used: 0,
        }
    }

    pub fn parse(text: &str) -> SimResult<Self> {
        let mut directives = Vec::new();
        for (n, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("");
            let mut words = line.split_whitespace();
            let Some(count) = words.next() else {
                continue;
            };
            let frames = count
                .parse::<u32>()
                .map_err(|_| SimError::bad_frame_count(n + 1, count))?;

            let mut buttons = Buttons::NONE;
            for name in words {
                let button = button_named(name).ok_or_else(|| SimError::unknown_button(n + 1, name))?;
                buttons = buttons | button;
            }
            directives.push(Directive { frames, buttons });
        }
        Ok(Self::new(directives))
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Frames covered by the whole script
    pub fn total_frames(&self) -> u64 {
        self.directives.iter().map(|d| u64::from(d.frames)).sum()
    }
}

impl FromStr for InputScript {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Self::parse(s)
    }
}

/// Button for a script name, ignoring case
pub fn button_named(name: &str) -> Option<Button> {
    Button::ALL.into_iter().find(|b| b.name().eq_ignore_ascii_case(name))
}

impl InputDriver for InputScript {
    fn current_buttons(&mut self) -> Buttons {
        while let Some(directive) = self.directives.get(self.cursor) {
            if self.used < directive.frames {
                self.used += 1;
                return directive.buttons;
            }
            self.cursor += 1;
            self.used = 0;
        }
        Buttons::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_directives_and_comments() {
        let script = InputScript::parse("# warmup\n\n2 up a\n  1   # idle\n3 SELECT START\n").unwrap();
        assert_eq!(
            script.directives(),
            [
                Directive {
                    frames: 2,
                    buttons: Button::Up | Button::A,
                },
                Directive {
                    frames: 1,
                    buttons: Buttons::NONE,
                },
                Directive {
                    frames: 3,
                    buttons: Button::Select | Button::Start,
                },
            ]
        );
        assert_eq!(script.total_frames(), 6);
    }

    #[test]
    fn test_replay_then_idle() {
        let mut script: InputScript = "2 DOWN\n0 A\n1 B".parse().unwrap();
        let seen: Vec<Buttons> = (0..5).map(|_| script.current_buttons()).collect();
        let down = Buttons::from(Button::Down);
        let b = Buttons::from(Button::B);
        assert_eq!(seen, [down, down, b, Buttons::NONE, Buttons::NONE]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = InputScript::parse("1 UP\nten DOWN").unwrap_err();
        assert_eq!(err.to_string(), "script line 2: bad frame count `ten`");

        let err = InputScript::parse("\n\n4 UP JUMP").unwrap_err();
        assert_eq!(err.to_string(), "script line 3: unknown button `JUMP`");
    }

    #[test]
    fn test_every_button_has_a_name() {
        for button in Button::ALL {
            assert_eq!(button_named(button.name()), Some(button));
        }
        assert_eq!(button_named("select"), Some(Button::Select));
    }
}
