//! pong-sim - run the pong core on a host
//!
//! Drives the same [`FrameLoop`] the console runs, against an in-memory
//! display and scripted input, for a fixed number of frames.
//!
//! ## Architecture
//!
//! - **Screen** (`screen`): two indexed pages plus object tables
//! - **Script** (`script`): text input scripts replayed as a controller
//! - **Output** (`output`): PPM and ASCII frame dumps
//! - **Error** (`error`): simulator error type

pub mod error;
pub mod output;
pub mod screen;
pub mod script;

use std::fs;
use std::path::Path;

use pong::config::MatchConfig;
use pong::frame::{Context, FrameLoop, FrameReport};
use pong::game::Game;
use pong::match_state::Side;
use pong::render::Backend;

pub use error::{SimError, SimResult};
pub use output::Format;
pub use screen::HostDisplay;
pub use script::InputScript;

/// A point and the frame it was scored on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub frame: u32,
    pub side: Side,
}

/// A match running on the host
pub struct Simulation {
    frame_loop: FrameLoop<HostDisplay, InputScript>,
    points: Vec<Point>,
    decided: Option<Point>,
}

impl Simulation {
    pub fn new(cfg: MatchConfig, backend: Backend, input: InputScript) -> Self {
        let ctx = Context::new(HostDisplay::new(), input);
        Simulation {
            frame_loop: FrameLoop::new(ctx, cfg, backend),
            points: Vec::new(),
            decided: None,
        }
    }

    /// Run and present one frame
    pub fn step(&mut self) -> FrameReport {
        let report = self.frame_loop.step();
        if let Some(side) = report.events.contacts.scored {
            self.points.push(Point {
                frame: report.frame,
                side,
            });
        }
        if let Some(side) = report.events.winner {
            self.decided = Some(Point {
                frame: report.frame,
                side,
            });
        }
        report
    }

    pub fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step();
        }
    }

    pub fn game(&self) -> &Game {
        self.frame_loop.game()
    }

    /// Direct access for scripted setups
    pub fn game_mut(&mut self) -> &mut Game {
        self.frame_loop.game_mut()
    }

    pub fn display(&self) -> &HostDisplay {
        &self.frame_loop.context().display
    }

    /// Frames presented so far
    pub fn frames(&self) -> u32 {
        self.frame_loop.frames()
    }

    /// Every point scored, in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The match-deciding point, once there is one
    pub fn decided(&self) -> Option<Point> {
        self.decided
    }
}

/// Read and parse an input script file
pub fn load_script(path: &Path) -> SimResult<InputScript> {
    let text = fs::read_to_string(path)?;
    InputScript::parse(&text)
}
