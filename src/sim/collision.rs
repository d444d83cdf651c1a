//! Collision detection and response
//!
//! Ground, ceiling and left wall are hard boundaries that bounce the ball.
//! The right edge is open: leaving through it ends the game. Obstacles are
//! axis-aligned rectangles tested against the ball's bounding box.

use super::state::{Arena, Ball, Obstacle};
use crate::consts::*;

/// Result of the vertical boundary check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalContact {
    /// Ball bounced off the ground; post-bounce vy
    Ground { bounce_vy: f32 },
    /// Ball bounced off the ceiling
    Ceiling,
    /// Ball is in the air
    Airborne,
}

/// Resolve ground and ceiling contact, updating `is_airborne`
///
/// Ground is checked first; the ceiling only when the ball is not grounded.
/// A ceiling bounce keeps the previous `is_airborne` value.
pub fn resolve_vertical(ball: &mut Ball, arena: &Arena) -> VerticalContact {
    let ground = arena.ground_y();
    if ball.bottom() > ground {
        ball.pos.y = ground - ball.radius;
        ball.vel.y *= -BOUNCE_DAMPING;
        ball.vel.x *= GROUND_FRICTION;
        ball.is_airborne = false;
        VerticalContact::Ground {
            bounce_vy: ball.vel.y,
        }
    } else if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y *= -BOUNCE_DAMPING;
        VerticalContact::Ceiling
    } else {
        ball.is_airborne = true;
        VerticalContact::Airborne
    }
}

/// Bounce off the left wall. Returns true on contact.
pub fn resolve_left_wall(ball: &mut Ball) -> bool {
    if ball.left() < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x *= -BOUNCE_DAMPING;
        true
    } else {
        false
    }
}

/// Ball has fully left through the open right edge
pub fn is_off_screen_right(ball: &Ball, arena: &Arena) -> bool {
    ball.left() > arena.width
}

/// AABB overlap between the ball's bounding box and an obstacle
pub fn ball_hits_obstacle(ball: &Ball, obstacle: &Obstacle) -> bool {
    obstacle.active
        && ball.right() > obstacle.pos.x
        && ball.left() < obstacle.pos.x + obstacle.width
        && ball.bottom() > obstacle.pos.y
        && ball.top() < obstacle.pos.y + obstacle.height
}
