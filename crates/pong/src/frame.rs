//! Frame loop and the driver interfaces it runs against
//!
//! The loop is single-threaded and polled. Its only blocking point is
//! [`DisplayDriver::present`], which waits for vertical blank. Between two
//! presents exactly one tick runs:
//!
//! ```text
//! input -> color cycling -> Game::tick -> render into back buffer -> present
//! ```
//!
//! Hardware is never touched directly; a [`Context`] holding the display and
//! input drivers is handed to the loop, so the same loop runs on the console
//! and in host tests.

use crate::config::MatchConfig;
use crate::game::{Game, TickEvents};
use crate::input::{Button, Buttons, KeyState};
use crate::palette::{Palette, Rgb555, index};
use crate::render::{self, Backend, Sprite};

/// One of the two off-screen buffers
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BufferId {
    A,
    B,
}

impl BufferId {
    #[inline]
    pub const fn other(self) -> BufferId {
        match self {
            BufferId::A => BufferId::B,
            BufferId::B => BufferId::A,
        }
    }

    /// 0 for A, 1 for B
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BufferId::A => 0,
            BufferId::B => 1,
        }
    }
}

/// Video output
pub trait DisplayDriver {
    /// Fill the whole buffer with one palette index
    fn clear(&mut self, buffer: BufferId, color: u8);

    /// Fill a rectangle, clipped to the screen
    fn fill_rect(&mut self, buffer: BufferId, x: i32, y: i32, w: i32, h: i32, color: u8);

    /// Put a hardware object in `slot`
    ///
    /// Drivers without an object layer fall back to a rectangle fill.
    fn place_sprite(&mut self, buffer: BufferId, slot: usize, sprite: &Sprite) {
        let _ = slot;
        self.fill_rect(buffer, sprite.x, sprite.y, sprite.width, sprite.height, sprite.color);
    }

    /// Wait for vertical blank, show the buffer rendered since the last call,
    /// and return the buffer to render into next
    fn present(&mut self) -> BufferId;

    fn set_palette_entry(&mut self, index: u8, color: Rgb555);
}

/// Scoreboard and banner text
pub trait TextRenderer {
    /// Draw `value` right-aligned in a two-cell field starting at `x`; the
    /// tens cell is blank below 10
    fn draw_digits(&mut self, buffer: BufferId, x: i32, y: i32, value: u16, color: u8);
    fn draw_text(&mut self, buffer: BufferId, x: i32, y: i32, text: &str, color: u8);
}

/// Controller state
pub trait InputDriver {
    /// Buttons held right now, active-high
    fn current_buttons(&mut self) -> Buttons;
}

/// Drivers injected into the frame loop
#[derive(Debug)]
pub struct Context<D, I> {
    pub display: D,
    pub input: I,
}

impl<D, I> Context<D, I> {
    pub fn new(display: D, input: I) -> Self {
        Context { display, input }
    }
}

/// Summary of one loop iteration
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameReport {
    /// Frames completed before this one
    pub frame: u32,
    /// Buffer this frame was drawn into
    pub rendered: BufferId,
    /// Buffer returned by present, i.e. the next render target
    pub next: BufferId,
    pub events: TickEvents,
}

/// Drives one match forever at one tick per vertical blank
pub struct FrameLoop<D, I> {
    ctx: Context<D, I>,
    game: Game,
    keys: KeyState,
    palette: Palette,
    backend: Backend,
    back: BufferId,
    frames: u32,
}

impl<D, I> FrameLoop<D, I>
where
    D: DisplayDriver + TextRenderer,
    I: InputDriver,
{
    /// Load the palette and wait for the first vertical blank
    pub fn new(mut ctx: Context<D, I>, cfg: MatchConfig, backend: Backend) -> Self {
        let palette = Palette::new();
        for (idx, color) in palette.initial_entries() {
            ctx.display.set_palette_entry(idx, color);
        }
        let back = ctx.display.present();
        log::info!("frame loop ready: {backend:?} backend, rendering into {back:?}");

        FrameLoop {
            ctx,
            game: Game::new(cfg),
            keys: KeyState::new(),
            palette,
            backend,
            back,
            frames: 0,
        }
    }

    /// Run one tick and present it
    pub fn step(&mut self) -> FrameReport {
        self.keys.update(self.ctx.input.current_buttons());
        self.cycle_colors();

        let events = self.game.tick(&self.keys);

        let rendered = self.back;
        render::render_frame(&mut self.ctx.display, rendered, self.backend, &self.game);
        let next = self.ctx.display.present();
        assert_ne!(next, rendered, "display driver handed back the presented buffer");
        self.back = next;

        let report = FrameReport {
            frame: self.frames,
            rendered,
            next,
            events,
        };
        self.frames = self.frames.wrapping_add(1);
        report
    }

    /// Never returns; the match ends only at power-off
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn cycle_colors(&mut self) {
        let pressed = self.keys.pressed();
        if pressed.contains(Button::Select) {
            let color = self.palette.left.advance();
            log::debug!("left paddle color -> {color:?}");
            self.ctx.display.set_palette_entry(index::LEFT_PADDLE, color);
        }
        if pressed.contains(Button::Start) {
            let color = self.palette.right.advance();
            log::debug!("right paddle color -> {color:?}");
            self.ctx.display.set_palette_entry(index::RIGHT_PADDLE, color);
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[inline]
    pub fn context(&self) -> &Context<D, I> {
        &self.ctx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut Context<D, I> {
        &mut self.ctx
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn into_context(self) -> Context<D, I> {
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{COOL_COLORS, WARM_COLORS};
    use pretty_assertions::assert_eq;

    /// Minimal two-buffer driver that checks the single-writer rule
    struct Flipper {
        visible: BufferId,
        back: BufferId,
        presents: u32,
        palette: [Rgb555; 16],
    }

    impl Flipper {
        fn new() -> Self {
            Flipper {
                visible: BufferId::A,
                back: BufferId::B,
                presents: 0,
                palette: [Rgb555::BLACK; 16],
            }
        }

        fn check(&self, buffer: BufferId) {
            assert_ne!(buffer, self.visible, "drew into the visible buffer");
        }
    }

    impl DisplayDriver for Flipper {
        fn clear(&mut self, buffer: BufferId, _color: u8) {
            self.check(buffer);
        }
        fn fill_rect(&mut self, buffer: BufferId, _x: i32, _y: i32, _w: i32, _h: i32, _color: u8) {
            self.check(buffer);
        }
        fn present(&mut self) -> BufferId {
            self.presents += 1;
            self.visible = self.back;
            self.back = self.back.other();
            self.back
        }
        fn set_palette_entry(&mut self, index: u8, color: Rgb555) {
            self.palette[usize::from(index)] = color;
        }
    }

    impl TextRenderer for Flipper {
        fn draw_digits(&mut self, buffer: BufferId, _x: i32, _y: i32, _value: u16, _color: u8) {
            self.check(buffer);
        }
        fn draw_text(&mut self, buffer: BufferId, _x: i32, _y: i32, _text: &str, _color: u8) {
            self.check(buffer);
        }
    }

    struct Scripted(Vec<Buttons>);

    impl InputDriver for Scripted {
        fn current_buttons(&mut self) -> Buttons {
            if self.0.is_empty() { Buttons::NONE } else { self.0.remove(0) }
        }
    }

    #[test]
    fn test_buffers_alternate_and_never_overlap_visible() {
        let ctx = Context::new(Flipper::new(), Scripted(Vec::new()));
        let mut frame_loop = FrameLoop::new(ctx, MatchConfig::default(), Backend::Framebuffer);
        let mut last = None;
        for n in 0..50 {
            let report = frame_loop.step();
            assert_eq!(report.frame, n);
            assert_ne!(report.rendered, report.next);
            if let Some(prev) = last {
                assert_ne!(report.rendered, prev);
            }
            last = Some(report.rendered);
        }
        assert_eq!(frame_loop.context().display.presents, 51);
    }

    #[test]
    fn test_select_and_start_cycle_paddle_colors_on_press_only() {
        let held = Buttons::from(Button::Select);
        let script = Scripted(vec![held, held, Buttons::NONE, held, Buttons::from(Button::Start)]);
        let mut frame_loop = FrameLoop::new(
            Context::new(Flipper::new(), script),
            MatchConfig::default(),
            Backend::Framebuffer,
        );
        let palette = |fl: &FrameLoop<Flipper, Scripted>, idx: u8| fl.context().display.palette[usize::from(idx)];

        assert_eq!(palette(&frame_loop, index::LEFT_PADDLE), WARM_COLORS[0]);
        frame_loop.step();
        frame_loop.step();
        assert_eq!(palette(&frame_loop, index::LEFT_PADDLE), WARM_COLORS[1]);
        frame_loop.step();
        frame_loop.step();
        assert_eq!(palette(&frame_loop, index::LEFT_PADDLE), WARM_COLORS[2]);
        assert_eq!(palette(&frame_loop, index::RIGHT_PADDLE), COOL_COLORS[0]);
        frame_loop.step();
        assert_eq!(palette(&frame_loop, index::RIGHT_PADDLE), COOL_COLORS[1]);
    }

    #[test]
    #[should_panic(expected = "presented buffer")]
    fn test_driver_returning_visible_buffer_is_fatal() {
        struct Broken;
        impl DisplayDriver for Broken {
            fn clear(&mut self, _: BufferId, _: u8) {}
            fn fill_rect(&mut self, _: BufferId, _: i32, _: i32, _: i32, _: i32, _: u8) {}
            fn present(&mut self) -> BufferId {
                BufferId::A
            }
            fn set_palette_entry(&mut self, _: u8, _: Rgb555) {}
        }
        impl TextRenderer for Broken {
            fn draw_digits(&mut self, _: BufferId, _: i32, _: i32, _: u16, _: u8) {}
            fn draw_text(&mut self, _: BufferId, _: i32, _: i32, _: &str, _: u8) {}
        }

        let mut frame_loop = FrameLoop::new(
            Context::new(Broken, Scripted(Vec::new())),
            MatchConfig::default(),
            Backend::Framebuffer,
        );
        frame_loop.step();
    }
}
