//! Headless backend
//!
//! A synthetic camera, a pose source that replays a recorded landmark track,
//! and a display that writes snapshots instead of opening a window. Lets the
//! whole game run without camera hardware or a pose model.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use glam::Vec2;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use super::{Camera, Display, Key};
use crate::config::DemoConfig;
use crate::frame::Frame;
use crate::pose::{Joint, PersonLandmarks, PoseFrameSource};

/// Generates a gradient test image at a fixed resolution
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    fps: f64,
    pace: bool,
    next_due: Option<Instant>,
    frames: u64,
}

impl SyntheticCamera {
    pub fn open(config: &DemoConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            bail!(
                "camera unavailable: invalid resolution {}x{}",
                config.width,
                config.height
            );
        }
        Ok(Self {
            width: config.width,
            height: config.height,
            fps: config.fps,
            pace: config.pace,
            next_due: None,
            frames: 0,
        })
    }

    fn frame_period(&self) -> Duration {
        let fps = if self.fps > 0.0 { self.fps } else { crate::consts::DEFAULT_FPS };
        Duration::from_secs_f64(1.0 / fps)
    }
}

impl Camera for SyntheticCamera {
    fn read_frame(&mut self) -> Option<Frame> {
        if self.pace {
            let now = Instant::now();
            if let Some(due) = self.next_due.filter(|due| *due > now) {
                thread::sleep(due - now);
            }
            self.next_due = Some(Instant::now() + self.frame_period());
        }

        self.frames += 1;
        let (w, h) = (self.width.max(1), self.height.max(1));
        let image = RgbImage::from_fn(self.width, self.height, |x, y| {
            let r = (x * 255 / w) as u8;
            let g = (y * 255 / h) as u8;
            Rgb([r / 3, g / 3, 60])
        });
        Some(Frame::from_image(image))
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn release(&mut self) {
        log::info!("Synthetic camera released after {} frames", self.frames);
    }
}

/// One keyframe of a recorded landmark track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseKeyframe {
    /// Detection timestamp at which this keyframe takes effect
    pub at_ms: u64,
    /// Joint positions in normalized coordinates, `None` = nobody in view
    pub landmarks: Option<HashMap<Joint, Vec2>>,
}

/// Recorded landmark track
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoseTrack {
    pub keyframes: Vec<PoseKeyframe>,
}

impl PoseTrack {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read pose track {}", path.display()))?;
        let mut track: PoseTrack = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse pose track {}", path.display()))?;
        track.keyframes.sort_by_key(|k| k.at_ms);
        log::info!(
            "Loaded pose track {} ({} keyframes)",
            path.display(),
            track.keyframes.len()
        );
        Ok(track)
    }

    /// Built-in track: hold the right hand over the first menu option long
    /// enough to pick every setup menu, then sweep both hands across the
    /// lower half of the frame for ten minutes.
    pub fn demo() -> Self {
        let mut keyframes = vec![PoseKeyframe {
            at_ms: 0,
            landmarks: Some(HashMap::from([(Joint::RightIndex, Vec2::new(0.5, 0.22))])),
        }];

        let start_ms = 8_000;
        let step_ms = 250;
        for i in 0..(600_000 / step_ms) {
            let phase = (i % 16) as f32 / 16.0;
            let sweep = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
            let x = 0.1 + 0.8 * sweep;
            keyframes.push(PoseKeyframe {
                at_ms: start_ms + i * step_ms,
                landmarks: Some(HashMap::from([
                    (Joint::RightIndex, Vec2::new(x, 0.6)),
                    (Joint::LeftIndex, Vec2::new(1.0 - x, 0.6)),
                    (Joint::LeftFootIndex, Vec2::new(0.4, 0.95)),
                    (Joint::RightFootIndex, Vec2::new(0.6, 0.95)),
                ])),
            });
        }
        Self { keyframes }
    }

    /// Keyframe in effect at `timestamp_ms` (the latest one not after it)
    pub fn at(&self, timestamp_ms: u64) -> Option<&PoseKeyframe> {
        let idx = self.keyframes.partition_point(|k| k.at_ms <= timestamp_ms);
        idx.checked_sub(1).map(|i| &self.keyframes[i])
    }
}

/// Replays a [`PoseTrack`] as if it were a live pose model
pub struct ScriptedPose {
    track: PoseTrack,
    last_ts: Option<u64>,
}

impl ScriptedPose {
    pub fn new(track: PoseTrack) -> Self {
        Self {
            track,
            last_ts: None,
        }
    }
}

impl PoseFrameSource for ScriptedPose {
    fn detect(&mut self, _frame: &Frame, timestamp_ms: u64) -> Option<PersonLandmarks> {
        if let Some(last) = self.last_ts.filter(|last| timestamp_ms <= *last) {
            log::warn!("Non-increasing pose timestamp {timestamp_ms} (last {last})");
        }
        self.last_ts = Some(timestamp_ms);

        let joints = self.track.at(timestamp_ms)?.landmarks.as_ref()?;
        let placed: Vec<(Joint, Vec2)> = joints.iter().map(|(j, p)| (*j, *p)).collect();
        Some(PersonLandmarks::from_joints(&placed))
    }
}

/// A scripted key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Fire once the display has been polled this many times
    pub after_polls: u64,
    pub key: Key,
}

/// Display that writes PNG snapshots and replays scripted keys
pub struct SnapshotDisplay {
    out_dir: Option<PathBuf>,
    every: u64,
    shown: u64,
    polls: u64,
    keys: VecDeque<KeyEvent>,
}

impl SnapshotDisplay {
    pub fn open(config: &DemoConfig) -> Result<Self> {
        if let Some(dir) = &config.snapshot_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create snapshot dir {}", dir.display()))?;
        }
        let mut keys: Vec<KeyEvent> = config.keys.clone();
        keys.sort_by_key(|k| k.after_polls);
        Ok(Self {
            out_dir: config.snapshot_dir.clone(),
            every: config.snapshot_every.max(1),
            shown: 0,
            polls: 0,
            keys: keys.into(),
        })
    }
}

impl Display for SnapshotDisplay {
    fn show(&mut self, window: &str, frame: &Frame) {
        self.shown += 1;
        if log::log_enabled!(log::Level::Debug) {
            let texts: Vec<&str> = frame.labels.iter().map(|l| l.text.as_str()).collect();
            log::debug!("[{window}] frame {}: {:?}", self.shown, texts);
        }

        let Some(dir) = &self.out_dir else {
            return;
        };
        if self.shown % self.every != 0 {
            return;
        }
        let path = dir.join(format!("frame_{:06}.png", self.shown));
        if let Err(e) = frame.image.save(&path) {
            log::warn!("Failed to write snapshot {}: {e}", path.display());
        }
    }

    fn poll_key(&mut self) -> Option<Key> {
        self.polls += 1;
        match self.keys.front() {
            Some(event) if event.after_polls <= self.polls => self.keys.pop_front().map(|e| e.key),
            _ => None,
        }
    }

    /// Next scripted key regardless of its poll count; Escape once the
    /// script runs out, as if the window had been closed.
    fn wait_key(&mut self) -> Key {
        self.polls += 1;
        self.keys.pop_front().map(|e| e.key).unwrap_or(Key::Escape)
    }

    fn close(&mut self) {
        log::info!("Display closed after {} frames", self.shown);
    }
}
