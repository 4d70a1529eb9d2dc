//! Collision and scoring rules
//!
//! Only the ball collides. Every comparison here is inclusive/exclusive on
//! purpose and matches the hardware original pixel for pixel: a ball resting
//! exactly on a paddle edge counts as touching, a ball exactly at `x == 0` is
//! still in play.

use crate::config::MatchConfig;
use crate::entity::{Entities, Entity};
use crate::fixed::Fixed;
use crate::match_state::Side;

/// Axis-aligned box in whole pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub fn of(entity: &Entity, cfg: &MatchConfig) -> Self {
        let (x, y) = entity.pixel_pos();
        let (w, h) = entity.size(cfg);
        Aabb { x, y, w, h }
    }

    /// Overlap test where shared edges count as touching
    #[inline]
    pub fn touches(&self, other: &Aabb) -> bool {
        self.x <= other.x + other.w
            && self.x + self.w >= other.x
            && self.y <= other.y + other.h
            && self.y + self.h >= other.y
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }
}

/// Which horizontal wall the ball bounced off
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Wall {
    Top,
    Bottom,
}

/// Everything the ball touched during one tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Contacts {
    pub wall: Option<Wall>,
    /// Paddle that returned the ball
    pub paddle: Option<Side>,
    /// Player who won the point
    pub scored: Option<Side>,
}

/// Keep both paddles inside `[0, field_height - paddle_height]`
pub fn clamp_paddles(entities: &mut Entities, cfg: &MatchConfig) {
    let max_y = Fixed::from_int(cfg.paddle_max_y());
    for paddle in entities.paddles_mut() {
        paddle.position.y = paddle.position.y.clamp(Fixed::ZERO, max_y);
    }
}

/// Reflect off the top or bottom wall
///
/// Only reflects while the ball is moving into the wall, so a ball that is
/// still overlapping the wall on the tick after a bounce is left alone.
pub fn bounce_walls(ball: &mut Entity, cfg: &MatchConfig) -> Option<Wall> {
    let (_, y) = ball.pixel_pos();
    let vy = ball.velocity.y;

    let wall = if y <= 0 && vy.is_negative() {
        Wall::Top
    } else if y >= cfg.field_height - cfg.ball_size && vy.is_positive() {
        Wall::Bottom
    } else {
        return None;
    };

    ball.velocity.y = -vy;
    Some(wall)
}

/// Return the ball off one paddle
///
/// The vertical speed after the hit is the distance between the two centers
/// shifted right by `bounce_shift`, in whole pixels per tick. Hitting near
/// the paddle's end sends the ball off steeply; the center returns it flat.
pub fn hit_paddle(ball: &mut Entity, paddle: &Entity, side: Side, cfg: &MatchConfig) -> bool {
    let approaching = match side {
        Side::Left => ball.velocity.x.is_negative(),
        Side::Right => ball.velocity.x.is_positive(),
    };
    if !approaching {
        return false;
    }

    let ball_box = Aabb::of(ball, cfg);
    let paddle_box = Aabb::of(paddle, cfg);
    if !ball_box.touches(&paddle_box) {
        return false;
    }

    let face_x = match side {
        Side::Left => paddle_box.x + paddle_box.w,
        Side::Right => paddle_box.x - ball_box.w,
    };
    let offset = ball_box.center_y() - paddle_box.center_y();

    ball.position.x = Fixed::from_int(face_x);
    ball.velocity.x = -ball.velocity.x;
    ball.velocity.y = Fixed::from_int(offset >> cfg.bounce_shift);
    true
}

/// Which player, if any, the ball's position awards a point to
pub fn check_score(ball: &Entity, cfg: &MatchConfig) -> Option<Side> {
    let (x, _) = ball.pixel_pos();
    if x < 0 {
        Some(Side::Right)
    } else if x > cfg.field_width - cfg.ball_size {
        Some(Side::Left)
    } else {
        None
    }
}

/// Put the ball back at the center for the next rally
///
/// The horizontal direction flips, so the serve goes back the way it came
/// from; vertical speed is dropped. The curve acceleration stays.
pub fn serve(ball: &mut Entity, cfg: &MatchConfig) {
    let (x, y) = cfg.ball_home();
    ball.position.x = Fixed::from_int(x);
    ball.position.y = Fixed::from_int(y);
    ball.velocity.x = -ball.velocity.x;
    ball.velocity.y = Fixed::ZERO;
}

/// Run every ball rule for one tick: walls, paddles, then scoring
pub fn resolve_ball(entities: &mut Entities, cfg: &MatchConfig) -> Contacts {
    let (ball, left, right) = entities.ball_and_paddles_mut();
    let mut contacts = Contacts {
        wall: bounce_walls(ball, cfg),
        ..Contacts::default()
    };

    if hit_paddle(ball, left, Side::Left, cfg) {
        contacts.paddle = Some(Side::Left);
    }
    if hit_paddle(ball, right, Side::Right, cfg) {
        contacts.paddle = Some(Side::Right);
    }

    contacts.scored = check_score(ball, cfg);
    if contacts.scored.is_some() {
        serve(ball, cfg);
    }
    contacts
}
