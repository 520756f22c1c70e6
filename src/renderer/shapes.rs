//! Pixel primitives
//!
//! All shapes clip to the image bounds.

use glam::Vec2;
use image::{Rgb, RgbImage};

use crate::menu::Rect;

/// Fill a rectangle, edges inclusive
pub fn fill_rect(image: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    let x1 = rect.x1.max(0);
    let y1 = rect.y1.max(0);
    let x2 = rect.x2.min(w - 1);
    let y2 = rect.y2.min(h - 1);

    for y in y1..=y2 {
        for x in x1..=x2 {
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Rectangle outline `thickness` pixels wide, centered on the edges
pub fn stroke_rect(image: &mut RgbImage, rect: Rect, thickness: i32, color: Rgb<u8>) {
    let half = thickness / 2;
    let edge = |x1, y1, x2, y2| Rect { x1, y1, x2, y2 };
    let lo = half;
    let hi = thickness - 1 - half;

    fill_rect(image, edge(rect.x1 - lo, rect.y1 - lo, rect.x2 + hi, rect.y1 + hi), color);
    fill_rect(image, edge(rect.x1 - lo, rect.y2 - lo, rect.x2 + hi, rect.y2 + hi), color);
    fill_rect(image, edge(rect.x1 - lo, rect.y1 - lo, rect.x1 + hi, rect.y2 + hi), color);
    fill_rect(image, edge(rect.x2 - lo, rect.y1 - lo, rect.x2 + hi, rect.y2 + hi), color);
}

/// Filled disc
pub fn fill_circle(image: &mut RgbImage, center: Vec2, radius: f32, color: Rgb<u8>) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    let r = radius.ceil() as i32;
    let (cx, cy) = (center.x as i32, center.y as i32);
    let r2 = radius * radius;

    // Far off-frame centers saturate; keep the bounds from overflowing
    let (x_lo, x_hi) = (cx.saturating_sub(r).max(0), cx.saturating_add(r).min(w - 1));
    let (y_lo, y_hi) = (cy.saturating_sub(r).max(0), cy.saturating_add(r).min(h - 1));

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy <= r2 {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// `base = overlay * alpha + base * (1 - alpha)`, per channel
pub fn blend(base: &mut RgbImage, overlay: &RgbImage, alpha: f32) {
    debug_assert_eq!(base.dimensions(), overlay.dimensions());
    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        for c in 0..3 {
            let v = src[c] as f32 * alpha + dst[c] as f32 * (1.0 - alpha);
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn test_fill_rect_clips() {
        let mut img = RgbImage::new(10, 10);
        fill_rect(&mut img, Rect { x1: -5, y1: 8, x2: 2, y2: 20 }, RED);
        assert_eq!(img.get_pixel(0, 9), &RED);
        assert_eq!(img.get_pixel(2, 8), &RED);
        assert_eq!(img.get_pixel(3, 8), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 7), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_stroke_leaves_inside_empty() {
        let mut img = RgbImage::new(20, 20);
        stroke_rect(&mut img, Rect { x1: 5, y1: 5, x2: 15, y2: 15 }, 2, RED);
        assert_eq!(img.get_pixel(5, 10), &RED);
        assert_eq!(img.get_pixel(15, 10), &RED);
        assert_eq!(img.get_pixel(10, 5), &RED);
        assert_eq!(img.get_pixel(10, 10), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_circle() {
        let mut img = RgbImage::new(30, 30);
        fill_circle(&mut img, Vec2::new(15.0, 15.0), 5.0, RED);
        assert_eq!(img.get_pixel(15, 15), &RED);
        assert_eq!(img.get_pixel(20, 15), &RED);
        assert_eq!(img.get_pixel(19, 19), &Rgb([0, 0, 0]));
        // Off-image centers don't panic
        fill_circle(&mut img, Vec2::new(-50.0, 400.0), 10.0, RED);
    }

    #[test]
    fn test_circle_far_outside_frame() {
        let mut img = RgbImage::new(30, 30);
        fill_circle(&mut img, Vec2::new(1e12, -1e12), 10.0, RED);
        fill_circle(&mut img, Vec2::new(-1e12, 1e12), 10.0, RED);
        fill_circle(&mut img, Vec2::new(f32::MAX, f32::MIN), 10.0, RED);
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_blend() {
        let mut base = RgbImage::from_pixel(2, 2, Rgb([100, 100, 100]));
        let overlay = RgbImage::from_pixel(2, 2, Rgb([200, 0, 100]));
        blend(&mut base, &overlay, 0.6);
        assert_eq!(base.get_pixel(0, 0), &Rgb([160, 40, 100]));
    }
}
