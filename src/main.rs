//! Street Striker entry point
//!
//! Headless native host: plays a scripted session through the frame
//! driver, prints HUD events as JSON lines, keeps the high score on disk and
//! fetches game-over commentary off the game thread.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use street_striker::commentary::commentator_for;
use street_striker::sim::{GameEvent, Stats};
use street_striker::{Game, HighScore, Settings};

/// Milliseconds per display frame at 60 Hz
const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 30;

/// Scripted pointer input, keyed by frame number
enum Input {
    Down(f32, f32),
    Move(f32, f32),
    Up,
}

fn script() -> Vec<(u32, Input)> {
    vec![
        // Charged shot at the goal
        (10, Input::Down(400.0, 300.0)),
        (54, Input::Up),
        // Quick tap, then an overhit curve that leaves the screen
        (140, Input::Down(300.0, 300.0)),
        (145, Input::Up),
        (170, Input::Down(0.0, 300.0)),
        (172, Input::Move(400.0, 300.0)),
        (173, Input::Up),
    ]
}

fn data_dir() -> PathBuf {
    std::env::var_os("STREET_STRIKER_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    env_logger::init();
    log::info!("Street Striker (headless) starting...");

    let dir = data_dir();
    let settings_path = dir.join("settings.json");
    let score_path = dir.join("highscore.json");

    let mut settings = Settings::load(&settings_path);
    if let Ok(name) = std::env::var("STREET_STRIKER_QUALITY") {
        settings.apply_quality_override(&name);
    }
    let mut high_score = HighScore::load(&score_path);
    let seed: u64 = rand::random();
    log::info!("Seed: {}", seed);

    let mut game = Game::new(&settings, high_score.best, seed);
    game.start();

    let (tx, rx) = mpsc::channel::<String>();
    let mut final_stats: Option<Stats> = None;
    let mut inputs = script().into_iter().peekable();

    for frame in 0..MAX_FRAMES {
        let now = frame as f64 * FRAME_MS;
        while let Some((_, input)) = inputs.next_if(|(at, _)| *at == frame) {
            match input {
                Input::Down(x, y) => game.pointer_down(x, y, now),
                Input::Move(x, y) => game.pointer_move(x, y),
                Input::Up => {
                    game.pointer_up(now);
                }
            }
        }

        game.frame();

        for event in game.drain_events() {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => log::warn!("Could not encode event: {}", e),
            }
            if let GameEvent::GameOver(stats) = event {
                final_stats = Some(high_score.annotate(stats));
                if high_score.submit(&stats) {
                    game.set_high_score(high_score.best);
                    if let Err(e) = high_score.save(&score_path) {
                        log::error!("Could not save high score: {}", e);
                    }
                }

                // Decorative only; the game never waits on it
                let mut commentator = commentator_for(&settings);
                let tx = tx.clone();
                thread::spawn(move || {
                    let line = commentator.commentary(stats.score, stats.style_points);
                    let _ = tx.send(line);
                });
            }
        }

        if !game.is_running() {
            break;
        }
    }

    match final_stats {
        Some(stats) => {
            println!(
                "FINAL score={} best={} combo={} style={}",
                stats.score, stats.high_score, stats.combo, stats.style_points
            );
            match rx.recv_timeout(Duration::from_secs(10)) {
                Ok(line) => println!("\"{}\"", line),
                Err(_) => log::warn!("Commentary did not arrive in time"),
            }
        }
        None => log::info!("Session ended without a game over"),
    }
}
