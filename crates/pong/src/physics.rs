//! Physics integrator
//!
//! One rule for every entity, every tick: acceleration feeds velocity first,
//! then the new velocity moves the position (semi-implicit Euler). This is
//! what puts the visible curve on the ball and the arc on the particles.

use crate::entity::{Entities, Entity};

/// Advance one entity by one tick
#[inline]
pub fn integrate(entity: &mut Entity) {
    entity.velocity += entity.acceleration;
    entity.position += entity.velocity;
}

/// Advance every entity by one tick
///
/// Frozen entities (zero velocity and acceleration) come out unchanged, so
/// there is no per-kind special casing here.
pub fn integrate_all(entities: &mut Entities) {
    for entity in entities.iter_mut() {
        integrate(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::entity::EntityKind;
    use crate::fixed::{Fixed, Vec2};
    use pretty_assertions::assert_eq;

    fn px(raw: i32) -> Fixed {
        Fixed::from_raw(raw)
    }

    #[test]
    fn test_zero_acceleration_is_translation() {
        let mut e = Entity::new(EntityKind::Ball, 10, 20, 0);
        e.velocity = Vec2::new(px(384), px(-128));
        integrate(&mut e);
        integrate(&mut e);
        assert_eq!(e.position, Vec2::new(px(10 * 256 + 768), px(20 * 256 - 256)));
        assert_eq!(e.velocity, Vec2::new(px(384), px(-128)));
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut e = Entity::new(EntityKind::Particle, 0, 0, 0);
        e.acceleration = Vec2::new(Fixed::ZERO, px(1));

        // Explicit Euler would leave y at 0 after the first tick
        integrate(&mut e);
        assert_eq!(e.velocity.y, px(1));
        assert_eq!(e.position.y, px(1));

        integrate(&mut e);
        assert_eq!(e.velocity.y, px(2));
        assert_eq!(e.position.y, px(3));

        // After n ticks y = n(n+1)/2 steps
        for _ in 2..10 {
            integrate(&mut e);
        }
        assert_eq!(e.position.y, px(55));
    }

    #[test]
    fn test_frozen_entity_does_not_move() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        entities.ball_mut().freeze();
        let before = entities.clone();
        integrate_all(&mut entities);
        for (a, b) in before.iter().zip(entities.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_integrate_all_moves_ball_only_at_kickoff() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        integrate_all(&mut entities);
        assert_eq!(entities.ball().position.x, Fixed::from_int(116) + px(384));
        assert_eq!(entities.ball().position.y, Fixed::from_int(76) + px(1));
        assert_eq!(entities.left_paddle().pixel_pos(), (10, 64));
    }
}
