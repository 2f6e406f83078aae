//! Float Fighter headless runner
//!
//! Builds a level against the in-memory host, plays a scripted input
//! sequence and logs what happened. Usage:
//!
//! ```text
//! float-fighter [level.json]
//! FLOAT_FIGHTER_TUNING=tuning.json float-fighter
//! ```

use glam::Vec2;

use float_fighter::host::HeadlessHost;
use float_fighter::sim::{
    Direction, GameEvent, GameState, InputEvent, TickInput, build_level, complete_loads, tick,
};
use float_fighter::{LevelDef, SimError, Tuning};

const SCREEN_WIDTH: f32 = 1280.0;
const SCREEN_HEIGHT: f32 = 720.0;
const MAX_TICKS: u64 = 60 * 30;

fn main() {
    env_logger::init();
    log::info!("Float Fighter (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SimError> {
    let tuning = match std::env::var("FLOAT_FIGHTER_TUNING") {
        Ok(path) => Tuning::load(path)?,
        Err(_) => Tuning::default(),
    };
    let level = match std::env::args().nth(1) {
        Some(path) => LevelDef::load(path)?,
        None => LevelDef::first_level(),
    };

    let mut host = headless_host(&level, &tuning);
    let mut state = GameState::new(tuning);
    build_level(&mut state, &level, &mut host);

    for t in 0..MAX_TICKS {
        // Assets land one frame after they are requested
        let loads = host.resolve_loads();
        complete_loads(&mut state, loads, &mut host);

        tick(&mut state, &scripted_input(t), &mut host);

        for event in state.drain_events() {
            match event {
                GameEvent::DamageIgnored => log::trace!("[{t}] {event:?}"),
                _ => log::info!("[{t}] {event:?}"),
            }
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    log::info!(
        "Finished in phase {:?} after {} ticks: lives={}, enemies left={}, camera x={:.1}",
        state.phase,
        state.time_ticks,
        state.player.lives(),
        state.world.enemies().len(),
        host.camera_x()
    );
    Ok(())
}

/// Serve every texture the level and tuning reference at a nominal size
fn headless_host(level: &LevelDef, tuning: &Tuning) -> HeadlessHost {
    let mut host = HeadlessHost::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        .with_asset(level.player_texture.as_str(), Vec2::new(26.0, 37.0))
        .with_asset(tuning.projectile_texture.as_str(), Vec2::new(120.0, 60.0));
    for slot in &level.enemies {
        host = host.with_asset(slot.texture.as_str(), Vec2::new(48.0, 48.0));
    }
    for slot in &level.pickups {
        host = host.with_asset(slot.texture.as_str(), Vec2::new(24.0, 24.0));
    }
    host
}

/// Walk right toward the pickup, keep shooting, pause now and then
fn scripted_input(t: u64) -> TickInput {
    let mut events = Vec::new();
    match t {
        0 => events.push(InputEvent::Press(Direction::Right)),
        240 => events.push(InputEvent::Release(Direction::Right)),
        300 => events.push(InputEvent::Press(Direction::Up)),
        330 => events.push(InputEvent::Release(Direction::Up)),
        360 => events.push(InputEvent::Press(Direction::Right)),
        _ => {}
    }
    if t % 20 == 0 {
        events.push(InputEvent::Fire);
    }
    TickInput::with_events(events)
}
