//! Pose Catch - a webcam motion game
//!
//! Core modules:
//! - `sim`: Falling entities, spawn policy, catch rules, session state
//! - `menu`: Dwell-to-select menus driven by a tracked hand
//! - `pose`: Body landmarks and the pose detection seam
//! - `renderer`: Overlay drawing onto camera frames
//! - `platform`: Camera/display/clock abstraction
//! - `app`: Setup -> play -> results state machine

pub mod app;
pub mod config;
pub mod frame;
pub mod menu;
pub mod platform;
pub mod pose;
pub mod renderer;
pub mod rig;
pub mod sim;
pub mod sprites;

pub use app::App;
pub use config::Config;
pub use frame::Frame;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// How long the pointer must stay inside one option to select it
    pub const HOVER_TIME_REQUIRED: Duration = Duration::from_millis(1500);

    /// Frame rate assumed when the camera reports 0
    pub const DEFAULT_FPS: f64 = 30.0;

    /// Title of the game window
    pub const WINDOW_NAME: &str = "Falling Objects Pose Game";

    /// Per-tick probability of spawning a new entity
    pub const SPAWN_CHANCE: f64 = 0.03;
    /// Horizontal spawn margin (keeps sprites mostly on screen)
    pub const SPAWN_MARGIN: u32 = 40;
    /// Base fall speed range in pixels per tick (before difficulty scaling)
    pub const MIN_FALL_SPEED: f32 = 2.0;
    pub const MAX_FALL_SPEED: f32 = 6.0;

    /// Sprites are resized to a square of this many pixels
    pub const SPRITE_SIZE: u32 = 100;
    /// Catch radius is half the sprite's larger side minus this inset
    pub const CATCH_RADIUS_INSET: f32 = 5.0;

    /// Opacity of the menu panel drawn over the camera image
    pub const MENU_ALPHA: f32 = 0.6;

    /// Consecutive failed camera reads tolerated before giving up
    pub const MAX_DROPPED_FRAMES: u32 = 300;
}
