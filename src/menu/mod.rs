//! Hand-driven menus
//!
//! Options are rectangles in frame-relative coordinates. A single pointer
//! (the player's hand) selects an option by staying inside it.

pub mod hover;
pub mod setup;

pub use hover::HoverSelector;
pub use setup::{Flow, SetupChoices, difficulty_menu, duration_menu, mode_menu, run_menu, run_setup};

use glam::{UVec2, Vec2};

/// Pixel rectangle, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        (self.x1 as f32..=self.x2 as f32).contains(&p.x) && (self.y1 as f32..=self.y2 as f32).contains(&p.y)
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

/// Rectangle in fractions of the frame size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl HitRegion {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Pixel rectangle for a frame of `size` (truncating)
    pub fn resolve(&self, size: UVec2) -> Rect {
        let (w, h) = (size.x as f32, size.y as f32);
        Rect {
            x1: (self.x1 * w) as i32,
            y1: (self.y1 * h) as i32,
            x2: (self.x2 * w) as i32,
            y2: (self.y2 * h) as i32,
        }
    }
}

/// Option slots, top to bottom
pub const SLOT_TOP: HitRegion = HitRegion::new(0.12, 0.15, 0.88, 0.30);
pub const SLOT_MIDDLE: HitRegion = HitRegion::new(0.12, 0.36, 0.88, 0.51);
pub const SLOT_BOTTOM: HitRegion = HitRegion::new(0.12, 0.57, 0.88, 0.72);

/// One selectable option
#[derive(Debug, Clone)]
pub struct MenuOption<T> {
    pub label: &'static str,
    pub region: HitRegion,
    pub value: T,
}

/// A titled list of options
#[derive(Debug, Clone)]
pub struct Menu<T> {
    pub title: &'static str,
    pub hint: &'static str,
    pub options: Vec<MenuOption<T>>,
}

impl<T> Menu<T> {
    /// Options resolved to pixels, in enumeration order
    pub fn resolve(&self, size: UVec2) -> Vec<(usize, Rect)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| (i, o.region.resolve(size)))
            .collect()
    }
}
