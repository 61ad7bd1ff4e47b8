use super::config::{self, GameConfig};
use super::input_handler::{InputHandler, InputScript, InputSource};
use super::state::State;

use track::TrackSurface;
use utils::time::Timer;

use anyhow::Context;

use std::time::{Duration, Instant};

const RATE_REPORT_INTERVAL: Duration = Duration::from_secs(5);

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    // load configuration
    let config = config::load_config()?;

    let surface = TrackSurface::generate(config.track.clone())
        .with_context(|| format!("could not generate the {} track", config.track.name()))?;

    let mut input = match &config.game.input_script {
        Some(path) => {
            let script = InputScript::load(path)
                .with_context(|| format!("could not load input script {path}"))?;
            log::info!("replaying {} ticks of input", script.len_ticks());
            InputHandler::from_script(script)
        }
        None => InputHandler::idle(),
    };

    let mut state =
        State::new(surface, config.flight, config.npc).context("invalid flight or npc params")?;
    let ticks = run_loop(&mut state, &mut input, &config.game);

    let player = state.sim().player();
    log::info!(
        "player finished at {} with speed {:.2} after {ticks} ticks",
        player.position,
        player.speed
    );
    Ok(())
}

/// Runs ticks until the input quits or the tick limit is reached. Returns the number of ticks
/// run, paused ones included.
pub fn run_loop<I: InputSource>(state: &mut State, input: &mut I, game: &GameConfig) -> u64 {
    let tick_length = Duration::from_secs_f64(1.0 / game.tick_rate.max(1) as f64);
    let mut timer = Timer::new(RATE_REPORT_INTERVAL);
    let mut next_tick = Instant::now();
    let mut ticks = 0;

    log::info!("game loop started at {} ticks/s", game.tick_rate);
    loop {
        if game.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("tick limit reached");
            break;
        }

        let controls = input.poll();
        if controls.quit {
            log::info!("quit requested");
            break;
        }

        // all poses are final before anything reads them
        state.update(&controls);
        ticks += 1;
        if log::log_enabled!(log::Level::Trace) {
            for (i, pose) in state.poses().iter().enumerate() {
                log::trace!(
                    "tick {ticks} craft {i}: pos {} heading {:.1} speed {:.2}",
                    pose.position,
                    pose.heading,
                    pose.speed
                );
            }
        }
        timer.tick();

        if game.paced {
            next_tick += tick_length;
            let now = Instant::now();
            if next_tick > now {
                std::thread::sleep(next_tick - now);
            } else if now - next_tick > tick_length {
                log::warn!(
                    "game loop is {} ms behind, skipping ahead",
                    (now - next_tick).as_millis()
                );
                next_tick = now;
            }
        }
    }
    log::info!("game loop stopped after {:.1}s", timer.elapsed().as_secs_f32());

    ticks
}
