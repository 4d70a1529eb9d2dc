//! One match, advanced one tick at a time
//!
//! Sub-step order inside [`Game::tick`]:
//!  1. Paddle velocities from held buttons (playing only)
//!  2. Integrate every entity
//!  3. Clamp paddles, ball collisions and scoring (playing only)
//!  4. Award the point and run the win check; on a win, freeze play and
//!     launch the particle burst
//!  5. Celebration upkeep (finished only)

use crate::collision::{self, Contacts};
use crate::config::MatchConfig;
use crate::entity::Entities;
use crate::fixed::Fixed;
use crate::input::{Button, Buttons, KeyState};
use crate::match_state::{self, MatchState, Side};
use crate::physics;

/// Paddle controls: (up, down) per side
pub const LEFT_CONTROLS: (Button, Button) = (Button::Up, Button::Down);
pub const RIGHT_CONTROLS: (Button, Button) = (Button::A, Button::B);

/// What happened during one tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickEvents {
    pub contacts: Contacts,
    /// Set on the tick that decides the match
    pub winner: Option<Side>,
}

/// Entities plus scores for the single match this program plays
#[derive(Clone, Debug)]
pub struct Game {
    cfg: MatchConfig,
    entities: Entities,
    state: MatchState,
    star_cursor: u8,
    ticks: u32,
}

impl Game {
    pub fn new(cfg: MatchConfig) -> Self {
        Game {
            entities: Entities::new(&cfg),
            state: MatchState::new(),
            cfg,
            star_cursor: 0,
            ticks: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    #[inline]
    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Direct access for scripted setups (tests, demos)
    #[inline]
    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    #[inline]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Ticks run since kick-off
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn tick(&mut self, keys: &KeyState) -> TickEvents {
        let playing = !self.state.is_finished();
        let mut events = TickEvents::default();

        if playing {
            self.steer_paddles(keys.held());
        }

        physics::integrate_all(&mut self.entities);

        if playing {
            collision::clamp_paddles(&mut self.entities, &self.cfg);
            events.contacts = collision::resolve_ball(&mut self.entities, &self.cfg);
            if let Some(side) = events.contacts.scored {
                events.winner = self.score(side);
            }
        } else {
            match_state::celebrate(&mut self.entities, &mut self.star_cursor, &self.cfg);
        }

        self.ticks = self.ticks.wrapping_add(1);
        events
    }

    fn steer_paddles(&mut self, held: Buttons) {
        let speed = self.cfg.paddle_speed;
        let paddles = self.entities.paddles_mut();
        paddles[0].velocity.y = axis(held, LEFT_CONTROLS, speed);
        paddles[1].velocity.y = axis(held, RIGHT_CONTROLS, speed);
    }

    fn score(&mut self, side: Side) -> Option<Side> {
        let winner = self.state.award_point(side, &self.cfg);
        let (left, right) = self.state.scores();
        log::info!("point to P{} ({left}-{right})", side.player_number());

        if let Some(winner) = winner {
            log::info!("P{} wins the match", winner.player_number());
            match_state::freeze_play(&mut self.entities);
            match_state::arm_particles(&mut self.entities, &self.cfg);
        }
        winner
    }
}

/// Vertical velocity for one paddle; holding both directions cancels out
fn axis(held: Buttons, (up, down): (Button, Button), speed: Fixed) -> Fixed {
    let mut v = Fixed::ZERO;
    if held.contains(up) {
        v -= speed;
    }
    if held.contains(down) {
        v += speed;
    }
    v
}
