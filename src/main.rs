//! Pose Catch entry point
//!
//! Loads configuration, wires up the headless backend and runs the game.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use pose_catch::platform::WallClock;
use pose_catch::platform::scripted::{PoseTrack, ScriptedPose, SnapshotDisplay, SyntheticCamera};
use pose_catch::rig::Rig;
use pose_catch::sprites::SpriteSet;
use pose_catch::{App, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pose Catch starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let track = if config.model_path.extension().is_some_and(|ext| ext == "json") {
        PoseTrack::load(&config.model_path)?
    } else {
        log::warn!(
            "Pose model {} can't be replayed headless, using the built-in demo track",
            config.model_path.display()
        );
        PoseTrack::demo()
    };

    let camera = SyntheticCamera::open(&config.demo)?;
    let display = SnapshotDisplay::open(&config.demo)?;
    let rig = Rig::open(
        Box::new(camera),
        Box::new(display),
        Box::new(ScriptedPose::new(track)),
        Box::new(WallClock::new()),
        config.window_name.clone(),
        config.max_dropped_frames,
    )?;

    let sprites = SpriteSet::load(&config.sprites)?;

    let mut app = App::new(rig, sprites, &config);
    let summary = app.run()?;
    log::info!("Sessions played: {}, scores: {:?}", summary.scores.len(), summary.scores);
    Ok(())
}
