//! Flappy Core headless runner
//!
//! Drives a session with the autopilot at a fixed step and logs each run.
//! Usage: `flappy-core [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_core::consts::HEADLESS_DT;
    use flappy_core::sim::autopilot::decide_jump;
    use flappy_core::{GameEvent, Session, SimConfig, TickInput, tick};

    env_logger::init();
    log::info!("Flappy Core (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad tuning file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    let mut session = match Session::new(config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut runs = 0u32;
    let mut best = 0u32;
    let mut frames = 0u64;

    while frames < MAX_FRAMES {
        let input = TickInput {
            jump: !session.is_lost() && decide_jump(&session),
            restart: session.is_lost(),
            quit: false,
        };
        let outcome = tick(&mut session, &input, HEADLESS_DT);
        frames += 1;

        for event in &outcome.events {
            if let GameEvent::Lost { cause, score } = event {
                runs += 1;
                best = best.max(*score);
                log::info!("Run {} ended: {:?}, score {}", runs, cause, score);
            }
        }
        if outcome.quit {
            break;
        }

        let items = session.draw_list();
        log::trace!("frame {}: {} draw items", frames, items.len());
    }

    println!(
        "Simulated {} frames: {} finished runs, best score {}, current score {}",
        frames,
        runs,
        best,
        session.current_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a host on the web; nothing to run here
}
