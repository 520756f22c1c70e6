//! Falling entities

use glam::{UVec2, Vec2};

use crate::consts::{CATCH_RADIUS_INSET, SPRITE_SIZE};

/// What is falling. Each kind can only be caught by its own body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Right hand
    FruitA,
    /// Left hand
    FruitB,
    /// Either foot, full body mode only
    Ball,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::FruitA, EntityKind::FruitB, EntityKind::Ball];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::FruitA => "apple",
            EntityKind::FruitB => "pear",
            EntityKind::Ball => "ball",
        }
    }
}

/// Sprite footprint per kind, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprints {
    pub fruit_a: UVec2,
    pub fruit_b: UVec2,
    pub ball: UVec2,
}

impl Default for Footprints {
    fn default() -> Self {
        let square = UVec2::splat(SPRITE_SIZE);
        Self {
            fruit_a: square,
            fruit_b: square,
            ball: square,
        }
    }
}

impl Footprints {
    pub fn get(&self, kind: EntityKind) -> UVec2 {
        match kind {
            EntityKind::FruitA => self.fruit_a,
            EntityKind::FruitB => self.fruit_b,
            EntityKind::Ball => self.ball,
        }
    }
}

/// One falling object. `x` never changes; `y` only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingEntity {
    pub id: u32,
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    /// Pixels per tick, always positive
    pub speed: f32,
    pub size: UVec2,
    pub catch_radius: f32,
}

impl FallingEntity {
    /// New entity at the top of the frame
    pub fn new(id: u32, kind: EntityKind, x: f32, speed: f32, size: UVec2) -> Self {
        Self {
            id,
            kind,
            x,
            y: 0.0,
            speed,
            size,
            catch_radius: catch_radius(size),
        }
    }

    /// Fall one tick
    #[inline]
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Past the bottom edge of a frame `height` pixels tall
    #[inline]
    pub fn is_off_screen(&self, height: u32) -> bool {
        self.y > height as f32
    }
}

/// Half the larger side (whole pixels) minus the inset
pub fn catch_radius(size: UVec2) -> f32 {
    (size.max_element() / 2) as f32 - CATCH_RADIUS_INSET
}
