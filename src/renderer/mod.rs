//! Overlay rendering onto camera frames
//!
//! Shapes are rasterized straight into the frame's pixels; text goes on as
//! frame labels.

pub mod hud;
pub mod overlay;
pub mod shapes;

pub use hud::{draw_hud, draw_results};
pub use overlay::{draw_landmarks, draw_menu, draw_pointer};

use image::Rgb;

/// Colors used across the overlays
pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const PANEL: Rgb<u8> = Rgb([20, 20, 20]);
    pub const HINT: Rgb<u8> = Rgb([200, 200, 200]);
    pub const POINTER: Rgb<u8> = Rgb([255, 255, 0]);
    pub const LEFT_HAND: Rgb<u8> = Rgb([0, 255, 0]);
    pub const RIGHT_HAND: Rgb<u8> = Rgb([255, 0, 0]);
    pub const FEET: Rgb<u8> = Rgb([0, 0, 255]);
    pub const SCORE: Rgb<u8> = Rgb([0, 255, 0]);
}
