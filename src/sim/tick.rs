//! Fixed timestep simulation tick
//!
//! One tick per display frame, dt = 1. Checks run in a fixed order and
//! every trigger that fires in a tick is applied; a goal and an obstacle hit
//! on the same tick both count.

use super::collision::{
    VerticalContact, ball_hits_obstacle, is_off_screen_right, resolve_left_wall, resolve_vertical,
};
use super::scoring::{handle_game_over, handle_goal, handle_obstacle_hit};
use super::state::{Arena, Ball, GamePhase, GameState, Goal};
use crate::consts::*;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    integrate_ball(&mut state.ball);
    advance_goal(&mut state.goal, &state.arena);
    for obstacle in &mut state.obstacles {
        obstacle.pos.x += obstacle.speed_x;
    }

    let contact = resolve_vertical(&mut state.ball, &state.arena);
    if let VerticalContact::Ground { bounce_vy } = contact {
        if bounce_vy.abs() > DUST_MIN_SPEED {
            let at = glam::Vec2::new(state.ball.pos.x, state.ball.bottom());
            state.spawn_particles(at, 5, colors::GROUND);
        }
    }
    resolve_left_wall(&mut state.ball);

    // Missed the goal
    if is_off_screen_right(&state.ball, &state.arena) {
        handle_game_over(state);
        return;
    }

    // Obstacles are tested against this tick's ball, before a goal resets it
    let hits: Vec<u32> = state
        .obstacles
        .iter()
        .filter(|o| ball_hits_obstacle(&state.ball, o))
        .map(|o| o.id)
        .collect();
    let hit_at = state.ball.pos;

    let scored = state.goal.contains(state.ball.pos);
    if scored {
        handle_goal(state);
    }

    for id in hits {
        // The bounce belongs to the old ball; a freshly spawned one keeps still
        if !scored {
            state.ball.vel.x *= OBSTACLE_BOUNCE;
        }
        state.spawn_particles(hit_at, 3, colors::WHITE);
        handle_obstacle_hit(state, id);
    }

    update_particles(state);
}

/// Gravity, drag, then position and spin
fn integrate_ball(ball: &mut Ball) {
    ball.vel.y += GRAVITY;
    ball.vel *= AIR_RESISTANCE;
    ball.pos += ball.vel;
    ball.rotation += ball.vel.x * SPIN_FACTOR;
}

/// Move a moving goal, reversing at the margins
fn advance_goal(goal: &mut Goal, arena: &Arena) {
    if !goal.moving {
        return;
    }
    goal.pos.y += goal.speed_y;

    let (min_y, max_y) = arena.goal_bounds(goal.height);
    if goal.pos.y < min_y {
        goal.pos.y = min_y;
        goal.speed_y = goal.speed_y.abs();
    } else if goal.pos.y > max_y {
        goal.pos.y = max_y;
        goal.speed_y = -goal.speed_y.abs();
    }
}

/// Move and fade particles, keeping only the live ones
fn update_particles(state: &mut GameState) {
    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life -= PARTICLE_DECAY;
        p.life > 0.0
    });
}
