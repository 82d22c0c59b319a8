//! Headless runner
//!
//! Plays the stage at a fixed timestep, on autopilot or idle, and logs what
//! happens. Rendering and audio hosts drive `Game` the same way.

use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use throw_the_moon::consts::*;
use throw_the_moon::sim::{GameEvent, Level};
use throw_the_moon::{Game, Screen, Settings, Tuning};

#[derive(Parser, Debug)]
#[command(name = "throw-the-moon")]
#[command(about = "Run the Throw the Moon stage without a window")]
#[command(version)]
struct Args {
    /// Tuning JSON (built-in values when omitted)
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// Settings JSON; missing file means defaults
    #[arg(short, long, default_value = "settings.json")]
    settings: PathBuf,

    /// Level JSON (chapter 1 when omitted)
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Game time to simulate, in seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Let the autopilot play
    #[arg(long)]
    idle: bool,

    /// Turn debug mode on
    #[arg(long)]
    debug: bool,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings)?;
    if args.debug && !settings.debug {
        settings.toggle_debug();
    }
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let level = match &args.level {
        Some(path) => Level::load(path)?,
        None => Level::chapter_one(VIEWPORT_WIDTH),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if args.save_settings {
        settings.save(&args.settings)?;
    }
    let seed = settings.seed.unwrap_or_else(clock_seed);

    log::info!("Throw the Moon starting...");
    let mut game = Game::new(level, tuning, &settings, seed);
    game.input.idle_mode = args.idle;

    let frames = (args.seconds / SIM_DT) as u64;
    for frame in 0..frames {
        for event in game.update(SIM_DT) {
            report(&event);
        }
        if game.screen == Screen::StageClear {
            log::info!("Reached the stage clear screen after {:.1}s", frame as f32 * SIM_DT);
            break;
        }
    }

    log::info!(
        "Finished: wall {}/{}, moon distance {:.0}",
        game.state.wall_index,
        game.state.level.len(),
        game.state.moon.distance
    );
    Ok(())
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::MoonPulled { distance } => log::debug!("Moon pulled, {:.0} to go", distance),
        GameEvent::PlaySound(sound) => log::debug!("Sound: {:?}", sound),
        GameEvent::PlayMusic(music) => log::info!("Music: {:?}", music),
        other => log::info!("{:?}", other),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
