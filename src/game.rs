//! Frame driver
//!
//! Owns the simulation and the in-progress press. The host calls the
//! pointer methods as input arrives and `frame` once per display refresh,
//! all from one thread; then drains events for the HUD.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, Gesture, PointerTracker, apply_gesture, classify, start_game,
    tick,
};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    pointer: PointerTracker,
    high_score: u32,
}

impl Game {
    pub fn new(settings: &Settings, high_score: u32, seed: u64) -> Self {
        let mut state = GameState::new(settings.arena(), seed);
        state.max_particles = settings.max_particles();
        Self {
            state,
            pointer: PointerTracker::new(),
            high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// True while frames advance the simulation
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Best score known to the host, used for comparisons in stats
    pub fn set_high_score(&mut self, best: u32) {
        self.high_score = best;
        self.state.stats.high_score = best;
    }

    /// Menu -> Playing
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::Menu {
            log::warn!("Start ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin();
        true
    }

    /// GameOver -> Playing
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::warn!("Restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin();
        log::info!("Game restarted");
        true
    }

    fn begin(&mut self) {
        self.pointer.reset();
        start_game(&mut self.state, self.high_score);
        self.state.report_stats();
    }

    /// Leave play; no further ticks run until the next start
    pub fn quit_to_menu(&mut self) {
        self.pointer.reset();
        self.state.phase = GamePhase::Menu;
        log::info!("Back to menu");
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, time_ms: f64) {
        if !self.is_running() {
            return;
        }
        self.pointer.down(Vec2::new(x, y), time_ms);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.is_running() {
            return;
        }
        self.pointer.move_to(Vec2::new(x, y));
    }

    /// Finish a press and shoot. Returns the classified gesture.
    pub fn pointer_up(&mut self, time_ms: f64) -> Option<Gesture> {
        if !self.is_running() {
            return None;
        }
        let sample = self.pointer.release(time_ms)?;
        let gesture = classify(&sample);
        log::debug!("{:?} -> {:?}", sample, gesture);
        apply_gesture(&mut self.state, gesture);
        Some(gesture)
    }

    /// One display frame: charge the held press, then tick once
    pub fn frame(&mut self) {
        if !self.is_running() {
            return;
        }
        self.pointer.charge();
        tick(&mut self.state);

        if self.state.phase == GamePhase::GameOver {
            self.pointer.reset();
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
