//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame capture (camera)
//! - Frame display and key input (window)
//! - Time

pub mod scripted;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Enter,
    Other(u8),
}

/// Video source
pub trait Camera {
    /// Next frame, or `None` if this read failed
    fn read_frame(&mut self) -> Option<Frame>;
    /// Reported frame rate (0 = unknown)
    fn fps(&self) -> f64;
    fn release(&mut self) {}
}

/// Output window plus keyboard
pub trait Display {
    fn show(&mut self, window: &str, frame: &Frame);
    /// Non-blocking key check
    fn poll_key(&mut self) -> Option<Key>;
    /// Block until a key is pressed
    fn wait_key(&mut self) -> Key {
        loop {
            if let Some(key) = self.poll_key() {
                return key;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }
    fn close(&mut self) {}
}

/// Monotonic time source
pub trait Clock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Real time
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
