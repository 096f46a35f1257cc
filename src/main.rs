//! Brick Breaker entry point
//!
//! Native headless driver: runs the simulation in demo mode at a fixed rate
//! and prints a JSON snapshot of the final state.
//!
//! Usage: `brick-breaker [easy|normal|hard] [settings.json]`

use brick_breaker::sim::{FixedStepClock, GameEvent, GameState, TickInput};
use brick_breaker::{Difficulty, Settings};

/// How long the demo runs (simulated seconds)
const DEMO_SECONDS: u64 = 120;

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => Difficulty::from_str(&arg).unwrap_or_else(|| {
            log::warn!("Unknown difficulty '{}', using Normal", arg);
            Difficulty::Normal
        }),
        None => Difficulty::default(),
    };
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut state = GameState::new(difficulty, settings);
    let mut clock = FixedStepClock::new(state.settings.tick_rate);
    let mut input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    // Feed the clock exact frame times; there is no window to wait on
    let frame = clock.dt();
    let total_ticks = DEMO_SECONDS * u64::from(state.settings.tick_rate);
    let mut ticks: u64 = 0;
    let mut games = 1;
    while ticks < total_ticks {
        ticks += u64::from(clock.run(frame, &mut state, &mut input));

        for event in state.drain_events() {
            match event {
                GameEvent::GameOver { score } => {
                    println!("Game {} over: score {}", games, score);
                    games += 1;
                }
                GameEvent::FieldCleared => println!("Field cleared!"),
                _ => {}
            }
        }
    }

    println!(
        "{} | {} | bricks left {}/{}",
        state.score_text(),
        state.status(),
        state.bricks.active_count(),
        state.bricks.len()
    );
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
}
