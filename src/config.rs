//! Game configuration
//!
//! Built once at startup and passed to whatever needs it. Every field has a
//! default so a partial (or missing) JSON file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FPS, MAX_DROPPED_FRAMES, WINDOW_NAME};
use crate::platform::scripted::KeyEvent;

/// Sprite asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    /// Caught with the right hand
    pub fruit_a: PathBuf,
    /// Caught with the left hand
    pub fruit_b: PathBuf,
    /// Caught with either foot (full body mode only)
    pub ball: PathBuf,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            fruit_a: PathBuf::from("assets/apple.png"),
            fruit_b: PathBuf::from("assets/pear.png"),
            ball: PathBuf::from("assets/ball.png"),
        }
    }
}

/// Tuning values kept for compatibility with older config files.
/// Nothing in the game reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyTuning {
    pub padding: u32,
    /// Seconds a target circle stays visible
    pub circle_time: f32,
    pub circle_time_radius: u32,
}

impl Default for LegacyTuning {
    fn default() -> Self {
        Self {
            padding: 100,
            circle_time: 1.0,
            circle_time_radius: 15,
        }
    }
}

/// Settings for the headless scripted backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Synthetic camera resolution
    pub width: u32,
    pub height: u32,
    /// Reported camera frame rate (0 = unknown)
    pub fps: f64,
    /// Sleep between frames so the camera runs in real time
    pub pace: bool,
    /// Directory for PNG snapshots of shown frames (none = don't write)
    pub snapshot_dir: Option<PathBuf>,
    /// Write every Nth shown frame
    pub snapshot_every: u64,
    /// Scripted key presses
    pub keys: Vec<KeyEvent>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: DEFAULT_FPS,
            pace: true,
            snapshot_dir: None,
            snapshot_every: 30,
            keys: Vec::new(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pose model asset
    pub model_path: PathBuf,
    /// Default game duration in seconds
    pub game_time: u32,
    pub legacy: LegacyTuning,
    pub sprites: SpritePaths,
    pub window_name: String,
    /// Fixed RNG seed for reproducible spawns
    pub seed: Option<u64>,
    /// Consecutive failed camera reads before the run is aborted
    pub max_dropped_frames: u32,
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/pose_landmarker_full.task"),
            game_time: 30,
            legacy: LegacyTuning::default(),
            sprites: SpritePaths::default(),
            window_name: WINDOW_NAME.to_string(),
            seed: None,
            max_dropped_frames: MAX_DROPPED_FRAMES,
            demo: DemoConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
