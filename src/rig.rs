//! Camera, window, pose model and clock, held for the whole program run
//!
//! Acquired once at startup. Released exactly once, on drop, whichever way
//! the program ends.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::frame::Frame;
use crate::platform::{Camera, Clock, Display, Key};
use crate::pose::{PersonLandmarks, PoseFrameSource, PoseTimeline};

pub struct Rig {
    camera: Box<dyn Camera>,
    display: Box<dyn Display>,
    pose: Box<dyn PoseFrameSource>,
    clock: Box<dyn Clock>,
    window: String,
    max_dropped: u32,
    released: bool,
}

impl Rig {
    /// Take ownership of the collaborators and probe the camera.
    ///
    /// Fails if the camera can't deliver a first frame.
    pub fn open(
        mut camera: Box<dyn Camera>,
        display: Box<dyn Display>,
        pose: Box<dyn PoseFrameSource>,
        clock: Box<dyn Clock>,
        window: impl Into<String>,
        max_dropped: u32,
    ) -> Result<Self> {
        let Some(probe) = camera.read_frame() else {
            camera.release();
            bail!("camera unavailable: no frame on startup");
        };
        log::info!(
            "Camera ready: {}x{} @ {} fps",
            probe.width(),
            probe.height(),
            camera.fps()
        );

        Ok(Self {
            camera,
            display,
            pose,
            clock,
            window: window.into(),
            max_dropped,
            released: false,
        })
    }

    /// Reported camera frame rate (0 = unknown)
    pub fn fps(&self) -> f64 {
        self.camera.fps()
    }

    /// Next mirrored frame. Failed reads are skipped; too many in a row is
    /// an error.
    pub fn capture(&mut self) -> Result<Frame> {
        let mut dropped = 0;
        loop {
            if let Some(mut frame) = self.camera.read_frame() {
                if dropped > 0 {
                    log::warn!("Skipped {dropped} failed camera reads");
                }
                frame.mirror();
                return Ok(frame);
            }
            dropped += 1;
            if dropped >= self.max_dropped {
                bail!("camera stopped delivering frames ({dropped} failed reads in a row)");
            }
        }
    }

    /// Run pose detection on `frame` at the timeline's next timestamp
    pub fn detect(&mut self, frame: &Frame, timeline: &mut PoseTimeline) -> Option<PersonLandmarks> {
        let ts = timeline.stamp();
        self.pose.detect(frame, ts)
    }

    pub fn show(&mut self, frame: &Frame) {
        self.display.show(&self.window, frame);
    }

    pub fn poll_key(&mut self) -> Option<Key> {
        self.display.poll_key()
    }

    pub fn wait_key(&mut self) -> Key {
        self.display.wait_key()
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Release camera and window. Safe to call more than once.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.camera.release();
        self.display.close();
        log::info!("Camera and window released");
    }
}

impl Drop for Rig {
    fn drop(&mut self) {
        self.release();
    }
}
