//! Bricker entry point
//!
//! Builds a level from the command line and plays it headless with the
//! autopilot, forwarding sound events to the audio manager.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bricker::consts::*;
    use bricker::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use bricker::{AudioManager, AudioSettings, GameConfig};

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = match GameConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: bricker [bricks_per_row rows]");
            std::process::exit(2);
        }
    };

    if let Ok(raw) = std::env::var("BRICKER_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => log::warn!("Ignoring invalid BRICKER_SEED {:?}", raw),
        }
    }

    log::info!("Bricker starting: {:?}", config);

    let mut state = GameState::new(config);
    let mut audio = AudioManager::new(AudioSettings::default());

    while !state.is_over() && state.frame < MAX_DEMO_FRAMES {
        let input = TickInput::autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Sound(effect) => audio.play(effect),
                GameEvent::BrickExploded { row, col } => {
                    log::debug!("Brick ({}, {}) exploded", row, col)
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    let seconds = state.frame as f32 * SIM_DT;
    match state.phase {
        GamePhase::Won => log::info!("Level cleared in {:.1}s", seconds),
        GamePhase::Lost => log::info!(
            "Out of lives after {:.1}s, {} bricks left",
            seconds,
            state.bricks.value()
        ),
        GamePhase::Playing => log::info!(
            "Stopped after {:.1}s, {} bricks left",
            seconds,
            state.bricks.value()
        ),
    }
    log::info!("Seed {}, {} sounds played", state.seed, audio.plays());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end is wired up
}
