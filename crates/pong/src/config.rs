//! Match tuning
//!
//! All gameplay constants live in [`MatchConfig`]. The defaults reproduce the
//! feel of the hardware original and the behavioral tests depend on them;
//! change them per match, not here.

use crate::fixed::Fixed;

/// Screen width in pixels
pub const SCREEN_WIDTH: i32 = 240;
/// Screen height in pixels
pub const SCREEN_HEIGHT: i32 = 160;

/// Gameplay constants for one match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Playfield width in pixels
    pub field_width: i32,
    /// Playfield height in pixels
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Distance from the screen edge to the outer paddle face
    pub paddle_inset: i32,
    /// Vertical paddle speed while a direction is held (px/tick)
    pub paddle_speed: Fixed,
    /// Ball edge length in pixels
    pub ball_size: i32,
    /// Horizontal ball speed at kick-off (px/tick, sign = direction)
    pub serve_velocity: Fixed,
    /// Constant vertical acceleration on the ball (px/tick²)
    pub ball_curve: Fixed,
    /// Right shift applied to the hit offset to get the bounce velocity
    pub bounce_shift: u32,
    /// Minimum score needed to win
    pub points_to_win: u16,
    /// Minimum lead needed to win
    pub win_margin: u16,
    /// Particle burst speed (px/tick)
    pub particle_speed: Fixed,
    /// Downward acceleration on particles (px/tick²)
    pub particle_gravity: Fixed,
    /// Particle edge length in pixels
    pub particle_size: i32,
}

impl MatchConfig {
    pub const DEFAULT: MatchConfig = MatchConfig {
        field_width: SCREEN_WIDTH,
        field_height: SCREEN_HEIGHT,
        paddle_width: 8,
        paddle_height: 32,
        paddle_inset: 10,
        paddle_speed: Fixed::from_int(2),
        ball_size: 8,
        serve_velocity: Fixed::from_raw(384), // 1.5
        ball_curve: Fixed::EPSILON,
        bounce_shift: 3,
        points_to_win: 11,
        win_margin: 2,
        particle_speed: Fixed::from_raw(192), // 0.75
        particle_gravity: Fixed::EPSILON,
        particle_size: 4,
    };

    /// X of the left paddle's top-left corner
    #[inline]
    pub const fn left_paddle_x(&self) -> i32 {
        self.paddle_inset
    }

    /// X of the right paddle's top-left corner
    #[inline]
    pub const fn right_paddle_x(&self) -> i32 {
        self.field_width - self.paddle_inset - self.paddle_width
    }

    /// Highest legal paddle Y
    #[inline]
    pub const fn paddle_max_y(&self) -> i32 {
        self.field_height - self.paddle_height
    }

    /// Top-left corner of a ball sitting at the field center
    #[inline]
    pub const fn ball_home(&self) -> (i32, i32) {
        (
            (self.field_width - self.ball_size) / 2,
            (self.field_height - self.ball_size) / 2,
        )
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.left_paddle_x(), 10);
        assert_eq!(cfg.right_paddle_x(), 222);
        assert_eq!(cfg.paddle_max_y(), 128);
        assert_eq!(cfg.ball_home(), (116, 76));
    }
}
