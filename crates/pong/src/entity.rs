//! Entity records
//!
//! Paddles, the ball and the celebration particles share one record type and
//! live in one fixed-size table for the whole program. Nothing is created or
//! destroyed after [`Entities::new`]; an entity that should disappear is made
//! invisible and dormant instead.

use crate::config::MatchConfig;
use crate::fixed::Vec2;
use crate::palette::index;

/// Number of celebration particles
pub const PARTICLE_COUNT: usize = 8;
/// Total number of entity slots
pub const ENTITY_COUNT: usize = 3 + PARTICLE_COUNT;

/// Slot of the left paddle
pub const LEFT_PADDLE: usize = 0;
/// Slot of the right paddle
pub const RIGHT_PADDLE: usize = 1;
/// Slot of the ball
pub const BALL: usize = 2;
/// First particle slot
pub const FIRST_PARTICLE: usize = 3;

/// What an entity is; decides how it collides and how it is drawn
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Paddle,
    Ball,
    Particle,
}

/// One moving, drawable thing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Palette index
    pub color: u8,
    pub visible: bool,
}

impl Entity {
    pub const fn new(kind: EntityKind, x: i32, y: i32, color: u8) -> Self {
        Entity {
            kind,
            position: Vec2::from_ints(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            color,
            visible: true,
        }
    }

    /// Width and height in pixels for this kind
    pub const fn size(&self, cfg: &MatchConfig) -> (i32, i32) {
        match self.kind {
            EntityKind::Paddle => (cfg.paddle_width, cfg.paddle_height),
            EntityKind::Ball => (cfg.ball_size, cfg.ball_size),
            EntityKind::Particle => (cfg.particle_size, cfg.particle_size),
        }
    }

    /// Whole-pixel top-left corner
    #[inline]
    pub const fn pixel_pos(&self) -> (i32, i32) {
        (self.position.x.to_int(), self.position.y.to_int())
    }

    /// Zero velocity and acceleration
    pub fn freeze(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }

    /// True while the entity has nothing that would move it
    pub fn is_dormant(&self) -> bool {
        self.velocity == Vec2::ZERO && self.acceleration == Vec2::ZERO
    }
}

/// The process-wide entity table
#[derive(Clone, Debug)]
pub struct Entities {
    slots: [Entity; ENTITY_COUNT],
}

impl Entities {
    /// Lay out a fresh match: paddles centered, ball at the center serving
    /// horizontally, particles parked at the center and hidden.
    pub fn new(cfg: &MatchConfig) -> Self {
        let paddle_y = cfg.paddle_max_y() / 2;
        let (home_x, home_y) = cfg.ball_home();

        let mut ball = Entity::new(EntityKind::Ball, home_x, home_y, index::BALL);
        ball.velocity.x = cfg.serve_velocity;
        ball.acceleration.y = cfg.ball_curve;

        let particle_x = (cfg.field_width - cfg.particle_size) / 2;
        let particle_y = (cfg.field_height - cfg.particle_size) / 2;
        let mut particle = Entity::new(EntityKind::Particle, particle_x, particle_y, index::STAR_BASE);
        particle.visible = false;

        let mut slots = [particle; ENTITY_COUNT];
        slots[LEFT_PADDLE] = Entity::new(EntityKind::Paddle, cfg.left_paddle_x(), paddle_y, index::LEFT_PADDLE);
        slots[RIGHT_PADDLE] = Entity::new(EntityKind::Paddle, cfg.right_paddle_x(), paddle_y, index::RIGHT_PADDLE);
        slots[BALL] = ball;
        for (i, p) in slots[FIRST_PARTICLE..].iter_mut().enumerate() {
            p.color = index::STAR_BASE + i as u8;
        }

        Entities { slots }
    }

    #[inline]
    pub fn ball(&self) -> &Entity {
        &self.slots[BALL]
    }

    #[inline]
    pub fn ball_mut(&mut self) -> &mut Entity {
        &mut self.slots[BALL]
    }

    #[inline]
    pub fn left_paddle(&self) -> &Entity {
        &self.slots[LEFT_PADDLE]
    }

    #[inline]
    pub fn right_paddle(&self) -> &Entity {
        &self.slots[RIGHT_PADDLE]
    }

    /// Both paddles, left first
    pub fn paddles_mut(&mut self) -> &mut [Entity] {
        &mut self.slots[LEFT_PADDLE..=RIGHT_PADDLE]
    }

    /// Ball plus both paddles, borrowed apart
    pub fn ball_and_paddles_mut(&mut self) -> (&mut Entity, &Entity, &Entity) {
        let (paddles, rest) = self.slots.split_at_mut(BALL);
        (&mut rest[0], &paddles[LEFT_PADDLE], &paddles[RIGHT_PADDLE])
    }

    pub fn particles(&self) -> &[Entity] {
        &self.slots[FIRST_PARTICLE..]
    }

    pub fn particles_mut(&mut self) -> &mut [Entity] {
        &mut self.slots[FIRST_PARTICLE..]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entity> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entity> {
        self.slots.iter_mut()
    }
}

impl core::ops::Index<usize> for Entities {
    type Output = Entity;
    fn index(&self, slot: usize) -> &Entity {
        &self.slots[slot]
    }
}

impl core::ops::IndexMut<usize> for Entities {
    fn index_mut(&mut self, slot: usize) -> &mut Entity {
        &mut self.slots[slot]
    }
}

impl<'a> IntoIterator for &'a Entities {
    type Item = &'a Entity;
    type IntoIter = core::slice::Iter<'a, Entity>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fixed;
    use pretty_assertions::assert_eq;

    fn px(raw: i32) -> Fixed {
        Fixed::from_raw(raw)
    }

    #[test]
    fn test_new_match_layout() {
        let cfg = MatchConfig::default();
        let entities = Entities::new(&cfg);

        assert_eq!(entities.left_paddle().pixel_pos(), (10, 64));
        assert_eq!(entities.right_paddle().pixel_pos(), (222, 64));
        assert_eq!(entities.ball().pixel_pos(), (116, 76));
        assert_eq!(entities.ball().velocity, Vec2::new(px(384), Fixed::ZERO));
        assert_eq!(entities.ball().acceleration, Vec2::new(Fixed::ZERO, px(1)));

        for (i, p) in entities.particles().iter().enumerate() {
            assert_eq!(p.kind, EntityKind::Particle);
            assert!(!p.visible);
            assert!(p.is_dormant());
            assert_eq!(p.color, index::STAR_BASE + i as u8);
        }
    }

    #[test]
    fn test_sizes_by_kind() {
        let cfg = MatchConfig::default();
        let entities = Entities::new(&cfg);
        assert_eq!(entities.left_paddle().size(&cfg), (8, 32));
        assert_eq!(entities.ball().size(&cfg), (8, 8));
        assert_eq!(entities.particles()[0].size(&cfg), (4, 4));
    }

    #[test]
    fn test_split_borrow() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        let (ball, left, right) = entities.ball_and_paddles_mut();
        ball.velocity.y = px(5);
        assert_eq!(left.kind, EntityKind::Paddle);
        assert_eq!(right.pixel_pos().0, 222);
        assert_eq!(entities.ball().velocity.y, px(5));
    }
}
