//! Arena Demo - Headless Boss Fight
//!
//! Run with: `cargo run --bin arena_demo`
//!
//! Generates the terrain, drops the character in front of the Android, sets
//! it running, and ticks the simulation at the configured frame interval
//! until the character dies or the time budget runs out. Combat events are
//! logged as they happen; set `RUST_LOG=debug` for phase transitions.
//!
//! An optional JSON config path can be passed as the first argument to
//! override terrain or arena tuning.

use std::time::{Duration, Instant};

use android_arena_engine::game::{CombatEvent, GameConfig, GameState};

/// Wall-clock budget for the demo run.
const RUN_BUDGET: Duration = Duration::from_secs(60);

fn load_config() -> GameConfig {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read config {path}: {e}"));
            GameConfig::from_json(&json)
                .unwrap_or_else(|e| panic!("cannot parse config {path}: {e}"))
        }
        None => GameConfig::default(),
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let tick = Duration::from_secs_f32(config.arena.frame_interval);
    let delta = config.arena.frame_interval;

    let mut state = GameState::new(config).expect("failed to build arena");
    state.character_mut().toggle_run();
    log::info!("character running from {:?}", state.character().position);

    let started = Instant::now();
    let mut next_tick = started;
    while started.elapsed() < RUN_BUDGET {
        let now = Instant::now();
        if now < next_tick {
            std::thread::sleep(next_tick - now);
        }
        next_tick += tick;

        let events = state.update(delta);
        for event in &events {
            match event {
                CombatEvent::BossAiming => log::info!("the android takes aim"),
                CombatEvent::ChargeStarted => log::info!("the android charges a shot"),
                CombatEvent::ShotFired { position } => {
                    log::info!("shot fired from {position:?}")
                }
                CombatEvent::CharacterKilled { by } => log::info!("character killed by {by:?}"),
                CombatEvent::ShotMissed => log::info!("the shot fizzles out"),
                CombatEvent::BossReset => log::info!("the android powers down"),
            }
        }

        if state.character().is_dead() {
            break;
        }
    }

    let outcome = if state.character().is_dead() {
        "character died"
    } else {
        "character survived the time budget"
    };
    log::info!(
        "demo over after {:.1}s: {}",
        started.elapsed().as_secs_f32(),
        outcome
    );
}
