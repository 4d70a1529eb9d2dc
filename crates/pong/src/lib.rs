//! # pong - two-player Pong core
//!
//! Simulation and presentation logic for a 60 Hz, fixed-point Pong match on
//! small console hardware. The crate is `no_std`, allocates nothing, and
//! reaches hardware only through the driver traits in [`frame`], so it runs
//! unchanged on the console and on a host.
//!
//! ## Modules
//!
//! - [`fixed`] - Q24.8 fixed-point numbers and vectors
//! - [`entity`] - Paddles, ball and particles in one fixed table
//! - [`physics`] - Semi-implicit Euler integrator
//! - [`collision`] - Wall bounces, paddle returns, scoring
//! - [`match_state`] - Scores, win-by-two, particle burst
//! - [`game`] - The per-tick pipeline
//! - [`render`] - Per-kind render dispatch
//! - [`frame`] - Driver traits and the vsync-paced frame loop
//! - [`input`] - Button masks and edge detection
//! - [`palette`] - Palette layout and color tables
//! - [`config`] - Match tuning
//!
//! ## Quick Start
//!
//! ```no_run
//! use pong::prelude::*;
//!
//! fn start<D, I>(display: D, input: I) -> !
//! where
//!     D: DisplayDriver + TextRenderer,
//!     I: InputDriver,
//! {
//!     let ctx = Context::new(display, input);
//!     FrameLoop::new(ctx, MatchConfig::default(), Backend::Framebuffer).run()
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod collision;
pub mod config;
pub mod entity;
pub mod fixed;
pub mod frame;
pub mod game;
pub mod input;
pub mod match_state;
pub mod palette;
pub mod physics;
pub mod render;

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::config::MatchConfig;
    pub use crate::entity::{Entity, EntityKind};
    pub use crate::fixed::{Fixed, Vec2};
    pub use crate::frame::{BufferId, Context, DisplayDriver, FrameLoop, InputDriver, TextRenderer};
    pub use crate::game::Game;
    pub use crate::input::{Button, Buttons};
    pub use crate::match_state::{MatchState, Side};
    pub use crate::palette::Rgb555;
    pub use crate::render::{Backend, Sprite};
}
