//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. Tick and
//! gesture functions take it by exclusive reference; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing ticks
    Menu,
    /// Active gameplay (goals loop back here via level resets)
    Playing,
    /// Ball left the screen; waiting for an explicit restart
    GameOver,
}

/// Screen geometry the level is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground surface
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }

    /// Allowed range for a moving goal's top edge
    pub fn goal_bounds(&self, goal_height: f32) -> (f32, f32) {
        let min = GOAL_MARGIN;
        let max = (self.height - GOAL_MARGIN - goal_height).max(min);
        (min, max)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Cosmetic ball skin (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallType {
    #[default]
    Plastic,
    Rubber,
    Leather,
    Tape,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cosmetic spin (radians)
    pub rotation: f32,
    pub kind: BallType,
    /// False only on ticks where the ball rests on the ground
    pub is_airborne: bool,
}

impl Ball {
    /// Fresh ball at the spawn point for this arena
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(arena.width * 0.2, arena.height * 0.5),
            vel: Vec2::ZERO,
            radius: arena.width * 0.04,
            rotation: 0.0,
            kind: BallType::Plastic,
            is_airborne: true,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// The goal: a vertical line segment with a narrow scoring band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Top-left corner of the scoring band
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub moving: bool,
    /// Vertical speed; sign is the direction of travel
    pub speed_y: f32,
}

impl Goal {
    /// Goal for a level started at `score`
    pub fn for_score(arena: &Arena, score: u32) -> Self {
        Self {
            pos: Vec2::new(arena.width * 0.85, arena.height * 0.4),
            width: GOAL_WIDTH,
            height: arena.height * 0.2,
            moving: score > MOVING_GOAL_SCORE,
            speed_y: 2.0 + score as f32 * 0.1,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Half-open containment test of a point in the scoring band
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.width
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.height
    }
}

/// Obstacle categories (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rickshaw,
    Cow,
    Fan,
    Pole,
}

/// A rectangular obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    /// Horizontal drift per tick (0 = static)
    pub speed_x: f32,
    pub active: bool,
}

impl Obstacle {
    /// The street pole planted mid-field from score 3 onward
    pub fn pole(arena: &Arena, id: u32) -> Self {
        Self {
            id,
            pos: Vec2::new(arena.width * 0.5, arena.height - 100.0),
            width: 10.0,
            height: 100.0,
            kind: ObstacleKind::Pole,
            speed_x: 0.0,
            active: true,
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 0-1, decreases over time
    pub color: u32,
    pub size: f32,
}

/// Score counters reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub score: u32,
    /// Carried for comparison only; persistence is the host's job
    pub high_score: u32,
    /// Consecutive goals without an obstacle hit
    pub combo: u32,
    pub style_points: u32,
}

impl Stats {
    /// Zeroed counters that keep the known high score
    pub fn fresh(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }
}

/// Shot categories produced by the gesture classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotKind {
    Tap,
    Power,
    Curve,
    Dip,
}

/// Notifications for the presentation layer, drained by the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score, combo or style changed
    StatsChanged(Stats),
    /// Final stats; emitted once per life
    GameOver(Stats),
    GoalScored { perfect: bool, points: u32 },
    ObstacleHit { id: u32 },
    Shot(ShotKind),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub phase: GamePhase,
    pub ball: Ball,
    pub goal: Goal,
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub stats: Stats,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Particle cap (0 disables particles)
    pub max_particles: usize,
    /// Pending notifications
    pub events: Vec<GameEvent>,
    /// Set when game over fires; cleared by level init
    pub(crate) game_over_latched: bool,
    rng: Pcg32,
}

/// Default particle cap
pub const MAX_PARTICLES: usize = 500;

impl GameState {
    /// Create a new state sitting at the menu
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self {
            arena,
            phase: GamePhase::Menu,
            ball: Ball::spawn(&arena),
            goal: Goal::for_score(&arena, 0),
            obstacles: Vec::new(),
            particles: Vec::new(),
            stats: Stats::default(),
            time_ticks: 0,
            max_particles: MAX_PARTICLES,
            events: Vec::new(),
            game_over_latched: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_game_over_latched(&self) -> bool {
        self.game_over_latched
    }

    /// Spawn a burst of `count` particles at `pos`, respecting the cap
    pub fn spawn_particles(&mut self, pos: Vec2, count: usize, color: u32) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        for _ in 0..count.min(room) {
            let vel = Vec2::new(
                self.rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
                self.rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            );
            let size = self.rng.random_range(1.0..4.0);
            self.particles.push(Particle {
                pos,
                vel,
                life: 1.0,
                color,
                size,
            });
        }
    }

    /// Queue a stats snapshot for the HUD
    pub fn report_stats(&mut self) {
        self.events.push(GameEvent::StatsChanged(self.stats));
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_contains_half_open() {
        let goal = Goal {
            pos: Vec2::new(100.0, 200.0),
            width: 15.0,
            height: 120.0,
            moving: false,
            speed_y: 2.0,
        };
        assert!(goal.contains(Vec2::new(100.0, 200.0)));
        assert!(goal.contains(Vec2::new(114.9, 319.9)));
        assert!(!goal.contains(Vec2::new(115.0, 250.0)));
        assert!(!goal.contains(Vec2::new(99.0, 250.0)));
        assert!(!goal.contains(Vec2::new(105.0, 199.0)));
        assert!(!goal.contains(Vec2::new(105.0, 320.0)));
    }

    #[test]
    fn test_goal_difficulty_scaling() {
        let arena = Arena::default();
        let easy = Goal::for_score(&arena, 5);
        assert!(!easy.moving);

        let hard = Goal::for_score(&arena, 6);
        assert!(hard.moving);
        assert!((hard.speed_y - 2.6).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_particles_respects_cap() {
        let mut state = GameState::new(Arena::default(), 7);
        state.max_particles = 4;
        state.spawn_particles(Vec2::ZERO, 3, colors::WHITE);
        state.spawn_particles(Vec2::ZERO, 3, colors::WHITE);
        assert_eq!(state.particles.len(), 4);

        for p in &state.particles {
            assert!(p.vel.x >= -PARTICLE_SPREAD && p.vel.x < PARTICLE_SPREAD);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn test_particles_deterministic_per_seed() {
        let mut a = GameState::new(Arena::default(), 99);
        let mut b = GameState::new(Arena::default(), 99);
        a.spawn_particles(Vec2::ONE, 5, colors::NEON);
        b.spawn_particles(Vec2::ONE, 5, colors::NEON);
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.size, pb.size);
        }
    }
}
