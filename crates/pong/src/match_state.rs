//! Match state machine
//!
//! ```text
//!   Playing --(win check passes)--> Finished { winner }
//! ```
//!
//! The win check runs only when a point is scored. `Finished` is terminal:
//! scores freeze, ball and paddles stop, the particle burst plays and the
//! banner stays up until power-off.

use crate::config::MatchConfig;
use crate::entity::{Entities, Entity};
use crate::fixed::{Fixed, Vec2};
use crate::palette::{STAR_COLORS, index};

/// A player, named by the half of the screen they defend
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1 for the left player, 2 for the right
    pub const fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    /// Banner text shown when this side wins
    pub const fn banner(self) -> &'static str {
        match self {
            Side::Left => "P1 WINS!",
            Side::Right => "P2 WINS!",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Finished { winner: Side },
}

/// Scores and phase of the single match
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchState {
    score_left: u16,
    score_right: u16,
    phase: Phase,
}

impl MatchState {
    pub const fn new() -> Self {
        MatchState {
            score_left: 0,
            score_right: 0,
            phase: Phase::Playing,
        }
    }

    /// A match in progress at the given score
    #[cfg(test)]
    pub(crate) const fn with_scores(score_left: u16, score_right: u16) -> Self {
        MatchState {
            score_left,
            score_right,
            phase: Phase::Playing,
        }
    }

    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Playing => None,
            Phase::Finished { winner } => Some(winner),
        }
    }

    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Whether the win banner is up
    #[inline]
    pub const fn shows_banner(&self) -> bool {
        self.is_finished()
    }

    pub const fn score(&self, side: Side) -> u16 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    /// `(left, right)`
    pub const fn scores(&self) -> (u16, u16) {
        (self.score_left, self.score_right)
    }

    /// Win-by-margin rule: someone at `points_to_win` or more, leading by
    /// at least `win_margin`
    pub fn check_winner(&self, cfg: &MatchConfig) -> Option<Side> {
        let diff = i32::from(self.score_left) - i32::from(self.score_right);
        let reached = self.score_left >= cfg.points_to_win || self.score_right >= cfg.points_to_win;
        if !reached || diff.unsigned_abs() < u32::from(cfg.win_margin) {
            return None;
        }
        Some(if diff > 0 { Side::Left } else { Side::Right })
    }

    /// Add one point for `side` and run the win check
    ///
    /// Returns the winner on the point that decides the match, `None`
    /// otherwise. Scores are frozen once the match is finished.
    pub fn award_point(&mut self, side: Side, cfg: &MatchConfig) -> Option<Side> {
        if self.is_finished() {
            return None;
        }
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        let winner = self.check_winner(cfg)?;
        self.phase = Phase::Finished { winner };
        Some(winner)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit directions of the burst, counter-clockwise from +x (screen y grows
/// downward, so "up" is negative)
const BURST: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 1/sqrt(2) in 8-bit fixed point
const INV_SQRT2: i32 = 181;

/// Velocity for burst direction `i` at `speed`
///
/// Diagonals are scaled by 1/sqrt(2) so that all eight directions have the
/// same speed to within rounding.
pub fn burst_velocity(i: usize, speed: Fixed) -> Vec2 {
    let (dx, dy) = BURST[i & 7];
    let component = if dx != 0 && dy != 0 {
        (speed * INV_SQRT2 + Fixed::from_raw(1 << 7)) >> 8
    } else {
        speed
    };
    Vec2::new(component * dx, component * dy)
}

/// Stop the rally: paddles and ball freeze, the ball disappears
pub fn freeze_play(entities: &mut Entities) {
    for paddle in entities.paddles_mut() {
        paddle.freeze();
    }
    let ball = entities.ball_mut();
    ball.freeze();
    ball.visible = false;
}

/// Launch every particle from its resting place
pub fn arm_particles(entities: &mut Entities, cfg: &MatchConfig) {
    for (i, particle) in entities.particles_mut().iter_mut().enumerate() {
        particle.velocity = burst_velocity(i, cfg.particle_speed);
        particle.acceleration = Vec2::new(Fixed::ZERO, cfg.particle_gravity);
        particle.visible = true;
    }
}

/// True once a particle's box is entirely below or beside the field
///
/// Leaving through the top does not count; gravity brings it back.
pub fn has_left_field(particle: &Entity, cfg: &MatchConfig) -> bool {
    let (x, y) = particle.pixel_pos();
    let (w, _) = particle.size(cfg);
    y > cfg.field_height || x + w < 0 || x > cfg.field_width
}

/// Per-tick celebration: rotate the star colors and retire particles that
/// have fallen out of view. `cursor` carries the rotation across ticks.
pub fn celebrate(entities: &mut Entities, cursor: &mut u8, cfg: &MatchConfig) {
    for particle in entities.particles_mut() {
        if !particle.visible {
            continue;
        }
        *cursor = (*cursor + 1) % STAR_COLORS.len() as u8;
        particle.color = index::STAR_BASE + *cursor;

        if has_left_field(particle, cfg) {
            particle.visible = false;
            particle.freeze();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrate_all;
    use pretty_assertions::assert_eq;

    fn state(left: u16, right: u16) -> MatchState {
        MatchState::with_scores(left, right)
    }

    #[test]
    fn test_win_by_two_at_eleven() {
        let cfg = MatchConfig::default();
        assert_eq!(state(11, 9).check_winner(&cfg), Some(Side::Left));
        assert_eq!(state(10, 8).check_winner(&cfg), None);
        assert_eq!(state(11, 10).check_winner(&cfg), None);
        assert_eq!(state(12, 10).check_winner(&cfg), Some(Side::Left));
        assert_eq!(state(3, 11).check_winner(&cfg), Some(Side::Right));
        assert_eq!(state(15, 14).check_winner(&cfg), None);
    }

    #[test]
    fn test_deuce_sequence() {
        let cfg = MatchConfig::default();
        let mut s = state(10, 10);
        assert_eq!(s.award_point(Side::Left, &cfg), None);
        assert_eq!(s.scores(), (11, 10));
        assert_eq!(s.award_point(Side::Right, &cfg), None);
        assert_eq!(s.award_point(Side::Left, &cfg), None);
        assert_eq!(s.award_point(Side::Left, &cfg), Some(Side::Left));
        assert_eq!(s.scores(), (13, 11));
        assert_eq!(s.phase(), Phase::Finished { winner: Side::Left });
        assert!(s.shows_banner());
    }

    #[test]
    fn test_scores_frozen_after_finish() {
        let cfg = MatchConfig::default();
        let mut s = state(10, 0);
        assert_eq!(s.award_point(Side::Left, &cfg), Some(Side::Left));
        assert_eq!(s.award_point(Side::Right, &cfg), None);
        assert_eq!(s.award_point(Side::Left, &cfg), None);
        assert_eq!(s.scores(), (11, 0));
        assert_eq!(s.winner(), Some(Side::Left));
    }

    #[test]
    fn test_burst_directions_are_distinct_and_balanced() {
        let speed = Fixed::from_raw(192);
        let dirs: Vec<Vec2> = (0..8).map(|i| burst_velocity(i, speed)).collect();

        for (i, a) in dirs.iter().enumerate() {
            for b in &dirs[i + 1..] {
                assert_ne!(a, b);
            }
        }

        let sum_x: i32 = dirs.iter().map(|v| v.x.to_raw()).sum();
        let sum_y: i32 = dirs.iter().map(|v| v.y.to_raw()).sum();
        assert_eq!((sum_x, sum_y), (0, 0));

        let axis = 192 * 192;
        for v in &dirs {
            let sq = v.x.to_raw().pow(2) + v.y.to_raw().pow(2);
            assert!((sq - axis).abs() * 100 < axis, "speed off for {v:?}");
        }
    }

    #[test]
    fn test_transition_arms_particles_and_freezes_play() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        entities.paddles_mut()[0].velocity.y = Fixed::from_int(2);

        freeze_play(&mut entities);
        arm_particles(&mut entities, &cfg);

        assert!(!entities.ball().visible);
        assert!(entities.ball().is_dormant());
        assert!(entities.left_paddle().is_dormant());
        for p in entities.particles() {
            assert!(p.visible);
            assert_eq!(p.acceleration, Vec2::new(Fixed::ZERO, Fixed::EPSILON));
        }

        let ball_before = *entities.ball();
        let paddle_before = *entities.left_paddle();
        for _ in 0..30 {
            integrate_all(&mut entities);
        }
        assert_eq!(*entities.ball(), ball_before);
        assert_eq!(*entities.left_paddle(), paddle_before);
    }

    #[test]
    fn test_celebrate_rotates_colors_and_retires() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        arm_particles(&mut entities, &cfg);
        let mut cursor = 0;

        celebrate(&mut entities, &mut cursor, &cfg);
        let colors: Vec<u8> = entities.particles().iter().map(|p| p.color).collect();
        assert_eq!(colors, [9, 10, 11, 12, 13, 14, 15, 8]);
        assert_eq!(cursor, 0);

        entities.particles_mut()[6].position.y = Fixed::from_int(161);
        celebrate(&mut entities, &mut cursor, &cfg);
        assert!(!entities.particles()[6].visible);
        assert!(entities.particles()[6].is_dormant());
        assert!(entities.particles()[5].visible);
    }

    #[test]
    fn test_burst_eventually_retires_everything() {
        let cfg = MatchConfig::default();
        let mut entities = Entities::new(&cfg);
        arm_particles(&mut entities, &cfg);
        let mut cursor = 0;
        for _ in 0..2000 {
            integrate_all(&mut entities);
            celebrate(&mut entities, &mut cursor, &cfg);
        }
        assert!(entities.particles().iter().all(|p| !p.visible && p.is_dormant()));
    }
}
