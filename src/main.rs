//! Laser Cat entry point
//!
//! Runs a headless session with the autopilot doing the tilting and prints
//! the final HUD.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use glam::Vec2;

use laser_cat::Session;
use laser_cat::consts::DEFAULT_VIEWPORT;
use laser_cat::platform::{FixedViewport, LogRenderer, LoggingCue, MotionSource, NoMotion, ScriptedMotion};
use laser_cat::settings::Settings;
use laser_cat::sim::MovementMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Laser Cat session", long_about = None)]
struct Args {
    /// Movement mode: easy (seeking) or difficult (velocity)
    #[arg(short, long)]
    mode: Option<String>,

    /// Seconds of play to simulate
    #[arg(short, long, default_value = "30")]
    seconds: f32,

    /// Laser placement seed
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Viewport width
    #[arg(long, default_value_t = DEFAULT_VIEWPORT.0)]
    width: f32,

    /// Viewport height
    #[arg(long, default_value_t = DEFAULT_VIEWPORT.1)]
    height: f32,

    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Simulate a device without a motion sensor
    #[arg(long)]
    no_sensor: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mode = match args.mode.as_deref() {
        Some(name) => MovementMode::from_str(name)
            .with_context(|| format!("unknown mode '{name}' (expected easy or difficult)"))?,
        None if settings.mode.is_playing() => settings.mode,
        None => MovementMode::Seeking,
    };
    if !mode.is_playing() {
        bail!("pick easy or difficult to play");
    }

    log::info!("Laser Cat (headless) starting: {} for {}s", mode.as_str(), args.seconds);

    let viewport = FixedViewport(Vec2::new(args.width, args.height));
    if args.no_sensor {
        run(args, settings, mode, NoMotion, viewport)
    } else {
        run(args, settings, mode, ScriptedMotion::level(), viewport)
    }
}

fn run<M: MotionSource>(
    args: Args,
    settings: Settings,
    mode: MovementMode,
    motion: M,
    viewport: FixedViewport,
) -> Result<()> {
    let mut session = Session::new(
        settings,
        args.seed,
        motion,
        LogRenderer::default(),
        LoggingCue::default(),
        viewport,
    );
    session.set_autopilot(true);
    session.select_mode(mode);

    let hits = session.run_for(args.seconds);
    log::info!(
        "Session over: {hits} hits, {} frames drawn, {} sounds played (sound {})",
        session.renderer().frames,
        session.audio().cue().plays,
        if session.audio().is_primed() { "on" } else { "off" }
    );

    if args.json {
        let json = serde_json::to_string_pretty(session.state()).context("serializing state")?;
        println!("{json}");
    } else {
        for line in session.hud().lines() {
            println!("{line}");
        }
    }
    Ok(())
}
