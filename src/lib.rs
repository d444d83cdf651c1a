//! Street Striker - A single-screen street football arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gestures, scoring, game state)
//! - `game`: Frame driver tying pointer input to the simulation
//! - `commentary`: Game-over flavor text with a local fallback
//! - `highscores`: Persisted best score
//! - `settings`: Player-facing configuration

pub mod commentary;
pub mod error;
pub mod game;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use game::Game;
pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Units are screen pixels and ticks. One tick runs per display frame and
/// the simulation treats it as dt = 1.
pub mod consts {
    /// Downward acceleration added to vy every tick
    pub const GRAVITY: f32 = 0.5;
    /// Per-tick velocity multiplier (air drag)
    pub const AIR_RESISTANCE: f32 = 0.985;
    /// Horizontal velocity multiplier on ground contact
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Restitution for ground, ceiling and left wall
    pub const BOUNCE_DAMPING: f32 = 0.7;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 20.0;
    /// Cosmetic spin per unit of horizontal speed
    pub const SPIN_FACTOR: f32 = 0.1;
    /// Post-bounce |vy| above which the ground kicks up dust
    pub const DUST_MIN_SPEED: f32 = 2.0;

    /// Tap sets vy to this lift impulse
    pub const TAP_FORCE_Y: f32 = -12.0;
    /// Hold-release power cap
    pub const MAX_POWER: f32 = 25.0;
    /// Charge gained per tick while the pointer is held
    pub const CHARGE_PER_TICK: f32 = 0.5;
    /// Launch speed per unit of power on each axis (45 degree shot)
    pub const POWER_TO_VELOCITY: f32 = 0.8;
    /// Minimum pointer travel for a swipe
    pub const SWIPE_THRESHOLD: f32 = 30.0;
    /// Presses shorter than this (ms) are taps
    pub const TAP_MAX_DURATION_MS: f64 = 200.0;
    /// Horizontal velocity added per unit of horizontal swipe
    pub const CURVE_FACTOR: f32 = 0.15;
    /// Downward velocity added by a dip swipe
    pub const DIP_BOOST: f32 = 10.0;
    /// Style awarded for a curve shot
    pub const CURVE_STYLE: u32 = 5;

    /// Max distance from goal center for a perfect goal
    pub const PERFECT_RADIUS: f32 = 15.0;
    /// Points for a perfect goal
    pub const PERFECT_POINTS: u32 = 3;
    /// Style for a perfect goal
    pub const PERFECT_STYLE: u32 = 10;
    /// Goals start moving once score exceeds this
    pub const MOVING_GOAL_SCORE: u32 = 5;
    /// The pole obstacle appears once score exceeds this
    pub const POLE_SCORE: u32 = 2;
    /// Margin the moving goal keeps from the top and bottom edges
    pub const GOAL_MARGIN: f32 = 50.0;
    /// Goal scoring band width
    pub const GOAL_WIDTH: f32 = 15.0;
    /// Obstacle bounce multiplier applied to vx
    pub const OBSTACLE_BOUNCE: f32 = -1.2;

    /// Life lost by a particle each tick
    pub const PARTICLE_DECAY: f32 = 0.05;
    /// Max particle speed per axis
    pub const PARTICLE_SPREAD: f32 = 2.5;

    /// Particle palette (0xRRGGBB)
    pub mod colors {
        pub const GROUND: u32 = 0x8B4513;
        pub const NEON: u32 = 0x00FF00;
        pub const WHITE: u32 = 0xFFFFFF;
        pub const ORANGE: u32 = 0xFFA500;
    }
}
