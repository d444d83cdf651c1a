//! Scoring and level progression
//!
//! Phase flow is Menu -> Playing -> GameOver, with GameOver -> Playing only
//! through an explicit restart. Goals keep the phase at Playing and rebuild
//! the level in place.

use super::state::{Ball, GameEvent, GamePhase, GameState, Goal, Obstacle, Stats};
use crate::consts::*;

/// Enter play: zero the counters (keeping the known high score) and build
/// the first level. Used for both start and restart.
pub fn start_game(state: &mut GameState, high_score: u32) {
    state.stats = Stats::fresh(high_score);
    state.particles.clear();
    state.events.clear();
    state.phase = GamePhase::Playing;
    init_level(state);
    log::info!("Game started (high score {})", high_score);
}

/// Rebuild ball, goal and obstacles from the current score
pub fn init_level(state: &mut GameState) {
    state.game_over_latched = false;

    let arena = state.arena;
    let score = state.stats.score;
    state.ball = Ball::spawn(&arena);
    state.goal = Goal::for_score(&arena, score);

    state.obstacles.clear();
    if score > POLE_SCORE {
        state.obstacles.push(Obstacle::pole(&arena, 1));
    }

    log::info!(
        "Level ready: score={}, moving_goal={}, obstacles={}",
        score,
        state.goal.moving,
        state.obstacles.len()
    );
}

/// Award a goal and reset the level. No-op once game over has fired.
pub fn handle_goal(state: &mut GameState) {
    if state.game_over_latched {
        return;
    }

    let off_center = (state.ball.pos.y - state.goal.center_y()).abs();
    let perfect = off_center < PERFECT_RADIUS;

    let points = if perfect {
        state.stats.style_points += PERFECT_STYLE;
        let at = state.ball.pos;
        state.spawn_particles(at, 20, colors::NEON);
        PERFECT_POINTS
    } else {
        1
    };

    state.stats.score += points;
    state.stats.combo += 1;
    state.events.push(GameEvent::GoalScored { perfect, points });
    state.report_stats();

    log::info!(
        "GOAL{} +{} (score {}, combo {})",
        if perfect { " PERFECT" } else { "" },
        points,
        state.stats.score,
        state.stats.combo
    );

    init_level(state);
}

/// End the life: report final stats once, then zero the counters.
/// Later calls in the same life do nothing.
pub fn handle_game_over(state: &mut GameState) {
    if state.game_over_latched {
        return;
    }
    state.game_over_latched = true;
    state.phase = GamePhase::GameOver;

    let final_stats = state.stats;
    state.events.push(GameEvent::GameOver(final_stats));
    log::info!(
        "Game over: score={}, combo={}, style={}",
        final_stats.score,
        final_stats.combo,
        final_stats.style_points
    );

    state.stats = Stats::fresh(final_stats.high_score);
}

/// Register an obstacle hit: combo breaks
pub fn handle_obstacle_hit(state: &mut GameState, id: u32) {
    state.stats.combo = 0;
    state.events.push(GameEvent::ObstacleHit { id });
    state.report_stats();
    log::debug!("Obstacle {} hit, combo reset", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Arena;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Arena::new(800.0, 600.0), 42);
        start_game(&mut state, 0);
        state
    }

    fn count_game_overs(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver(_)))
            .count()
    }

    #[test]
    fn test_start_game_resets_everything() {
        let mut state = GameState::new(Arena::new(800.0, 600.0), 42);
        state.stats = Stats {
            score: 9,
            high_score: 12,
            combo: 4,
            style_points: 30,
        };
        start_game(&mut state, 12);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.stats, Stats::fresh(12));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(160.0, 300.0));
        assert_eq!(state.ball.radius, 32.0);
        assert!(!state.goal.moving);
    }

    #[test]
    fn test_perfect_goal() {
        let mut state = playing_state();
        state.ball.pos.y = state.goal.center_y() + 14.9;
        handle_goal(&mut state);

        assert_eq!(state.stats.score, 3);
        assert_eq!(state.stats.style_points, 10);
        assert_eq!(state.stats.combo, 1);
        assert_eq!(state.particles.len(), 20);
        assert!(state.events.contains(&GameEvent::GoalScored {
            perfect: true,
            points: 3
        }));
    }

    #[test]
    fn test_goal_at_perfect_radius_is_plain() {
        let mut state = playing_state();
        state.ball.pos.y = state.goal.center_y() - 15.0;
        handle_goal(&mut state);

        assert_eq!(state.stats.score, 1);
        assert_eq!(state.stats.style_points, 0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_goal_resets_level() {
        let mut state = playing_state();
        state.stats.score = 2;
        state.ball.pos = Vec2::new(690.0, 180.0);
        state.ball.vel = Vec2::new(12.0, -3.0);
        handle_goal(&mut state);

        assert_eq!(state.stats.score, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(
            state.obstacles[0].kind,
            crate::sim::state::ObstacleKind::Pole
        );
    }

    #[test]
    fn test_level_at_score_six_moves_goal() {
        let mut state = playing_state();
        state.stats.score = 6;
        init_level(&mut state);

        assert!(state.goal.moving);
        assert!((state.goal.speed_y - 2.6).abs() < 1e-5);
    }

    #[test]
    fn test_game_over_latch() {
        let mut state = playing_state();
        state.stats.score = 4;
        state.stats.combo = 2;

        handle_game_over(&mut state);
        handle_game_over(&mut state);

        assert_eq!(count_game_overs(&state.events), 1);
        assert!(state.events.contains(&GameEvent::GameOver(Stats {
            score: 4,
            high_score: 0,
            combo: 2,
            style_points: 0,
        })));
        assert_eq!(state.stats, Stats::default());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_goal_ignored_after_game_over() {
        let mut state = playing_state();
        handle_game_over(&mut state);
        handle_goal(&mut state);
        assert_eq!(state.stats.score, 0);
    }

    #[test]
    fn test_obstacle_hit_breaks_combo() {
        let mut state = playing_state();
        state.stats.combo = 7;
        handle_obstacle_hit(&mut state, 1);
        assert_eq!(state.stats.combo, 0);
        assert!(state.events.contains(&GameEvent::StatsChanged(state.stats)));
    }
}
