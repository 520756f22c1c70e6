//! Sprite assets for falling entities
//!
//! Loaded once at startup and scaled to a fixed square footprint. A missing
//! or unreadable asset is fatal.

use std::path::Path;

use anyhow::{Context, Result};
use glam::{UVec2, Vec2};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::config::SpritePaths;
use crate::consts::SPRITE_SIZE;
use crate::sim::{EntityKind, Footprints};

/// One scaled sprite
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
    /// Whether the source asset had a transparency channel
    has_alpha: bool,
}

impl Sprite {
    /// Scale a decoded image to the standard footprint
    pub fn from_image(image: &DynamicImage) -> Self {
        let has_alpha = image.color().has_alpha();
        let image = imageops::resize(&image.to_rgba8(), SPRITE_SIZE, SPRITE_SIZE, FilterType::Triangle);
        Self { image, has_alpha }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load sprite {}", path.display()))?;
        Ok(Self::from_image(&image))
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Draw centered on `center`, clipped to the frame. Alpha-composited when
    /// the sprite has transparency, copied opaque otherwise.
    pub fn draw(&self, frame: &mut RgbImage, center: Vec2) {
        let (sw, sh) = (self.image.width() as i64, self.image.height() as i64);
        let (fw, fh) = (frame.width() as i64, frame.height() as i64);

        let x1 = (center.x - sw as f32 / 2.0).trunc() as i64;
        let y1 = (center.y - sh as f32 / 2.0).trunc() as i64;

        let cx1 = x1.max(0);
        let cy1 = y1.max(0);
        let cx2 = x1.saturating_add(sw).min(fw);
        let cy2 = y1.saturating_add(sh).min(fh);
        if cx2 <= cx1 || cy2 <= cy1 {
            return;
        }

        for fy in cy1..cy2 {
            for fx in cx1..cx2 {
                let src = self.image.get_pixel((fx - x1) as u32, (fy - y1) as u32);
                let dst = frame.get_pixel_mut(fx as u32, fy as u32);
                if self.has_alpha {
                    let a = src[3] as f32 / 255.0;
                    for c in 0..3 {
                        dst[c] = (a * src[c] as f32 + (1.0 - a) * dst[c] as f32) as u8;
                    }
                } else {
                    dst.0 = [src[0], src[1], src[2]];
                }
            }
        }
    }
}

/// Sprites for every entity kind
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub fruit_a: Sprite,
    pub fruit_b: Sprite,
    pub ball: Sprite,
}

impl SpriteSet {
    pub fn load(paths: &SpritePaths) -> Result<Self> {
        let set = Self {
            fruit_a: Sprite::load(&paths.fruit_a)?,
            fruit_b: Sprite::load(&paths.fruit_b)?,
            ball: Sprite::load(&paths.ball)?,
        };
        log::info!("Loaded sprites");
        Ok(set)
    }

    /// Plain colored squares, for headless runs and tests
    pub fn placeholder() -> Self {
        let square = |rgba: [u8; 4]| {
            let image = RgbaImage::from_pixel(SPRITE_SIZE, SPRITE_SIZE, image::Rgba(rgba));
            Sprite::from_image(&DynamicImage::ImageRgba8(image))
        };
        Self {
            fruit_a: square([220, 30, 30, 255]),
            fruit_b: square([150, 200, 40, 255]),
            ball: square([240, 240, 240, 200]),
        }
    }

    pub fn get(&self, kind: EntityKind) -> &Sprite {
        match kind {
            EntityKind::FruitA => &self.fruit_a,
            EntityKind::FruitB => &self.fruit_b,
            EntityKind::Ball => &self.ball,
        }
    }

    pub fn footprints(&self) -> Footprints {
        Footprints {
            fruit_a: self.fruit_a.size(),
            fruit_b: self.fruit_b.size(),
            ball: self.ball.size(),
        }
    }
}
