//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, dt = 1)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod gesture;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{VerticalContact, ball_hits_obstacle, is_off_screen_right};
pub use gesture::{Gesture, GestureSample, PointerTracker, apply_gesture, classify};
pub use scoring::{handle_game_over, handle_goal, init_level, start_game};
pub use state::{
    Arena, Ball, BallType, GameEvent, GamePhase, GameState, Goal, Obstacle, ObstacleKind,
    Particle, ShotKind, Stats,
};
pub use tick::tick;
