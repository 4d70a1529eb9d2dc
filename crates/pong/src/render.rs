//! Render dispatch
//!
//! How an entity is drawn depends on its kind and the match phase, and on
//! which backend is active: the framebuffer backend fills rectangles, the
//! sprite backend places hardware objects. Physics never sees any of this.

use crate::config::MatchConfig;
use crate::entity::{Entity, EntityKind};
use crate::frame::{BufferId, DisplayDriver, TextRenderer};
use crate::game::Game;
use crate::match_state::{MatchState, Side};
use crate::palette::index;

/// How entities reach the screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Backend {
    /// Filled rectangles in a pixel buffer
    #[default]
    Framebuffer,
    /// One hardware object per entity
    Sprites,
}

/// A hardware object request, in screen pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sprite {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Palette index
    pub color: u8,
}

/// Text placement, in screen pixels (multiples of 8 so tile backends can
/// use them directly)
pub mod layout {
    pub const SCORE_LEFT: (i32, i32) = (24, 8);
    pub const SCORE_RIGHT: (i32, i32) = (216, 8);
    pub const BANNER: (i32, i32) = (96, 80);
}

/// Whether `entity` appears this frame
///
/// Paddles always show; the ball only during play; particles only once the
/// match is decided.
pub fn is_drawn(entity: &Entity, state: &MatchState) -> bool {
    if !entity.visible {
        return false;
    }
    match entity.kind {
        EntityKind::Paddle => true,
        EntityKind::Ball => !state.is_finished(),
        EntityKind::Particle => state.is_finished(),
    }
}

/// Draw one entity into `buffer`
pub fn render_entity<D: DisplayDriver + ?Sized>(
    display: &mut D,
    buffer: BufferId,
    backend: Backend,
    slot: usize,
    entity: &Entity,
    state: &MatchState,
    cfg: &MatchConfig,
) {
    if !is_drawn(entity, state) {
        return;
    }

    let (x, y) = entity.pixel_pos();
    let (width, height) = entity.size(cfg);
    match backend {
        Backend::Framebuffer => display.fill_rect(buffer, x, y, width, height, entity.color),
        Backend::Sprites => {
            let sprite = Sprite {
                kind: entity.kind,
                x,
                y,
                width,
                height,
                color: entity.color,
            };
            display.place_sprite(buffer, slot, &sprite);
        }
    }
}

/// Draw the whole frame: background, entities, scores, banner
pub fn render_frame<D: DisplayDriver + TextRenderer + ?Sized>(
    display: &mut D,
    buffer: BufferId,
    backend: Backend,
    game: &Game,
) {
    let state = game.state();
    display.clear(buffer, index::BACKGROUND);

    for (slot, entity) in game.entities().iter().enumerate() {
        render_entity(display, buffer, backend, slot, entity, state, game.config());
    }

    let (lx, ly) = layout::SCORE_LEFT;
    let (rx, ry) = layout::SCORE_RIGHT;
    display.draw_digits(buffer, lx, ly, state.score(Side::Left), index::INK);
    display.draw_digits(buffer, rx, ry, state.score(Side::Right), index::INK);

    if let Some(winner) = state.winner() {
        let (bx, by) = layout::BANNER;
        display.draw_text(buffer, bx, by, winner.banner(), index::INK);
    }
}
