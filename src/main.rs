//! Lava Run headless runner
//!
//! Usage: `lava-run [LEVELS_JSON] [SETTINGS_JSON]`
//!
//! Parses each level, advances it at a fixed frame step until it is finished
//! or times out, and logs the outcome. There is no input, so the player never
//! moves on its own.

use lava_run::levels::{self, Plan};
use lava_run::sim::{Level, LevelParser, Outcome, tick_with_max_step};
use lava_run::{Result, Settings};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lava Run (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The runner is native only; embedders drive `lava_run::sim` directly
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let plans = match args.next() {
        Some(path) => levels::load_plans(path)?,
        None => {
            log::info!("No level file given, using the demo levels");
            levels::demo_plans()
        }
    };
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.validate()?;

    let seed = settings.effective_seed();
    log::info!("Simulation seed: {}", seed);
    let mut parser = LevelParser::with_seed(settings.actor_dictionary()?, seed);

    for (index, plan) in plans.iter().enumerate() {
        let level = parser.parse(plan.as_slice());
        let (outcome, elapsed) = play(level, &settings);
        match outcome {
            Some(Outcome::Won) => log::info!("Level {}: won after {:.2}s", index + 1, elapsed),
            Some(Outcome::Lost) => log::info!("Level {}: lost after {:.2}s", index + 1, elapsed),
            None => log::warn!(
                "Level {}: undecided after {:.2}s ({})",
                index + 1,
                elapsed,
                describe(plan)
            ),
        }
    }
    Ok(())
}

/// Run one level to completion or time-out
fn play(mut level: Level, settings: &Settings) -> (Option<Outcome>, f64) {
    level.finish_delay = settings.finish_delay;
    let mut elapsed = 0.0;
    while !level.is_finished() && elapsed < settings.max_level_time {
        tick_with_max_step(&mut level, settings.time_step, settings.max_step);
        elapsed += settings.time_step;
    }
    (level.status(), elapsed)
}

fn describe(plan: &Plan) -> String {
    let width = plan.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    format!("{}x{}", width, plan.len())
}
