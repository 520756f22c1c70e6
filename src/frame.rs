//! Camera frame buffer
//!
//! Pixels live in an `RgbImage`. Text is not rasterized here; it is attached
//! as annotations that the display backend draws (or logs) on top.

use glam::{IVec2, UVec2};
use image::{Rgb, RgbImage, imageops};

/// How a label's position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the baseline start of the text
    BaselineLeft,
    /// Position is the center of the text box
    Center,
}

/// A piece of text to draw over the frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: IVec2,
    pub anchor: Anchor,
    /// Relative font size (1.0 = normal)
    pub scale: f32,
    pub color: Rgb<u8>,
}

/// One video frame plus its text annotations
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: RgbImage,
    pub labels: Vec<TextLabel>,
}

impl Frame {
    /// Create a black frame
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbImage::new(width, height))
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self {
            image,
            labels: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width(), self.height())
    }

    /// Flip horizontally so the player sees a mirror image
    pub fn mirror(&mut self) {
        imageops::flip_horizontal_in_place(&mut self.image);
    }

    /// Fill every pixel with one color and drop all labels
    pub fn clear(&mut self, color: Rgb<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
        self.labels.clear();
    }

    /// Attach a text label
    pub fn text(&mut self, text: impl Into<String>, pos: IVec2, scale: f32, color: Rgb<u8>) {
        self.labels.push(TextLabel {
            text: text.into(),
            pos,
            anchor: Anchor::BaselineLeft,
            scale,
            color,
        });
    }

    /// Attach a text label centered on `pos`
    pub fn text_centered(&mut self, text: impl Into<String>, pos: IVec2, scale: f32, color: Rgb<u8>) {
        self.labels.push(TextLabel {
            text: text.into(),
            pos,
            anchor: Anchor::Center,
            scale,
            color,
        });
    }

    /// True if any label contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }
}
