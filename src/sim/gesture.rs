//! Pointer tracking and gesture classification
//!
//! A press is tracked from pointer-down to pointer-up. On release the
//! sample is classified into one shot, which is then applied to the ball.

use glam::Vec2;

use super::state::{GameEvent, GameState, ShotKind};
use crate::consts::*;

/// Everything the classifier needs from a finished press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// End position minus start position
    pub delta: Vec2,
    pub duration_ms: f64,
    /// Raw charge accumulated while held (unclamped)
    pub power: f32,
}

/// Classified gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Horizontal-dominant swipe; carries the horizontal travel
    Curve { dx: f32 },
    /// Downward-dominant swipe
    Dip,
    /// Short press
    Tap,
    /// Long press; power already clamped to [`MAX_POWER`]
    Power { power: f32 },
    /// Upward-dominant swipe: no shot
    None,
}

impl Gesture {
    pub fn shot_kind(&self) -> Option<ShotKind> {
        match self {
            Gesture::Curve { .. } => Some(ShotKind::Curve),
            Gesture::Dip => Some(ShotKind::Dip),
            Gesture::Tap => Some(ShotKind::Tap),
            Gesture::Power { .. } => Some(ShotKind::Power),
            Gesture::None => None,
        }
    }
}

/// Classify a finished press. Swipes win over taps and holds.
pub fn classify(sample: &GestureSample) -> Gesture {
    let Vec2 { x: dx, y: dy } = sample.delta;

    if sample.delta.length() > SWIPE_THRESHOLD {
        if dx.abs() > dy.abs() {
            Gesture::Curve { dx }
        } else if dy > 0.0 {
            Gesture::Dip
        } else {
            Gesture::None
        }
    } else if sample.duration_ms < TAP_MAX_DURATION_MS {
        Gesture::Tap
    } else {
        Gesture::Power {
            power: sample.power.min(MAX_POWER),
        }
    }
}

/// Apply a classified gesture to the ball
pub fn apply_gesture(state: &mut GameState, gesture: Gesture) {
    let ball = &mut state.ball;
    match gesture {
        Gesture::Curve { dx } => {
            ball.vel.x += dx * CURVE_FACTOR;
            state.stats.style_points += CURVE_STYLE;
            state.report_stats();
        }
        Gesture::Dip => {
            ball.vel.y += DIP_BOOST;
        }
        Gesture::Tap => {
            ball.vel.y = TAP_FORCE_Y;
            let at = Vec2::new(ball.pos.x, ball.bottom());
            state.spawn_particles(at, 5, colors::WHITE);
        }
        Gesture::Power { power } => {
            let speed = power * POWER_TO_VELOCITY;
            ball.vel = Vec2::new(speed, -speed);
            let at = ball.pos;
            state.spawn_particles(at, 15, colors::ORANGE);
        }
        Gesture::None => {
            log::debug!("Upward swipe ignored");
            return;
        }
    }

    if let Some(kind) = gesture.shot_kind() {
        state.events.push(GameEvent::Shot(kind));
    }
}

/// Press state between pointer-down and pointer-up
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    touching: bool,
    start_ms: f64,
    start: Vec2,
    current: Vec2,
    power: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a press; resets charge
    pub fn down(&mut self, pos: Vec2, time_ms: f64) {
        self.touching = true;
        self.start_ms = time_ms;
        self.start = pos;
        self.current = pos;
        self.power = 0.0;
    }

    /// Track the pointer; ignored unless pressed
    pub fn move_to(&mut self, pos: Vec2) {
        if self.touching {
            self.current = pos;
        }
    }

    /// Accrue one tick of charge while pressed
    pub fn charge(&mut self) {
        if self.touching {
            self.power += CHARGE_PER_TICK;
        }
    }

    /// End the press and hand back the sample, if a press was active
    pub fn release(&mut self, time_ms: f64) -> Option<GestureSample> {
        if !self.touching {
            return None;
        }
        self.touching = false;
        Some(GestureSample {
            delta: self.current - self.start,
            duration_ms: time_ms - self.start_ms,
            power: self.power,
        })
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    /// Charge as a 0-1 fraction of [`MAX_POWER`] (power meter)
    pub fn power_fraction(&self) -> f32 {
        (self.power / MAX_POWER).min(1.0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
