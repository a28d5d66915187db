//! Hoop Shot entry point
//!
//! The web build is driven from the page through `hoop_shot::platform::web`.
//! Natively this runs one headless shot and logs what happened.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hoop_shot::Settings;
    use hoop_shot::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hoop Shot (native) starting...");

    let mut args = std::env::args().skip(1);
    let power = match args.next().map(|arg| arg.parse::<f32>()) {
        None => None,
        Some(Ok(power)) => Some(power),
        Some(Err(e)) => {
            log::error!("Power must be a number between 0 and 100: {}", e);
            std::process::exit(2);
        }
    };

    let settings = match args.next() {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Settings::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Cannot use settings from {}: {}", path, e);
                    std::process::exit(2);
                }
            }
        }
        None => Settings::load(),
    };

    let mut state = GameState::new(settings);
    if let Some(power) = power {
        state.power = power.clamp(0.0, hoop_shot::consts::MAX_POWER);
    }

    // 60 fps frames, capped at two minutes of play
    const DT: f32 = 1.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    let shoot = TickInput {
        shoot: true,
        ..Default::default()
    };
    let mut events = tick(&mut state, &shoot, DT);
    let mut frames = 1;
    while state.lifecycle.is_in_flight() && frames < MAX_FRAMES {
        events.extend(tick(&mut state, &TickInput::default(), DT));
        frames += 1;
    }

    for event in &events {
        match event {
            GameEvent::ShotRejected { reason } => println!("Shot rejected: {reason}"),
            GameEvent::Scored { points } => println!("SCORE! +{points}"),
            GameEvent::Missed => println!("Missed"),
            _ => {}
        }
    }

    if state.lifecycle.is_in_flight() {
        println!("Ball still moving after {frames} frames");
    }
    println!(
        "Ball at ({:.2}, {:.2}, {:.2}) after {} frames; score {} ({:.1}% accuracy)",
        state.ball.position.x,
        state.ball.position.y,
        state.ball.position.z,
        frames,
        state.stats.score,
        state.stats.accuracy()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
