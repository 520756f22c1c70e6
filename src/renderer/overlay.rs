//! Menu panel, pointer and landmark markers

use glam::{IVec2, UVec2, Vec2};
use image::RgbImage;

use super::palette;
use super::shapes::{blend, fill_circle, fill_rect, stroke_rect};
use crate::consts::MENU_ALPHA;
use crate::frame::Frame;
use crate::menu::{Menu, Rect};
use crate::pose::{Joint, JointGroup, PersonLandmarks};

const POINTER_RADIUS: f32 = 10.0;
const LANDMARK_RADIUS: f32 = 6.0;

/// Position at fractions `(fx, fy)` of the frame
fn at(size: UVec2, fx: f32, fy: f32) -> IVec2 {
    IVec2::new((fx * size.x as f32) as i32, (fy * size.y as f32) as i32)
}

/// Mark the menu pointer
pub fn draw_pointer(image: &mut RgbImage, pointer: Vec2) {
    fill_circle(image, pointer, POINTER_RADIUS, palette::POINTER);
}

/// Draw a menu over the camera image.
///
/// `regions` are the menu's options resolved for this frame; `hovered`
/// indexes into them and gets a progress bar filled to `progress`.
pub fn draw_menu<T>(
    frame: &mut Frame,
    menu: &Menu<T>,
    regions: &[(usize, Rect)],
    hovered: Option<usize>,
    progress: f32,
) {
    let size = frame.size();
    let mut overlay = frame.image.clone();

    let panel_min = at(size, 0.08, 0.10);
    let panel_max = at(size, 0.92, 0.78);
    fill_rect(
        &mut overlay,
        Rect {
            x1: panel_min.x,
            y1: panel_min.y,
            x2: panel_max.x,
            y2: panel_max.y,
        },
        palette::PANEL,
    );

    for &(idx, rect) in regions {
        stroke_rect(&mut overlay, rect, 2, palette::WHITE);

        if hovered == Some(idx) {
            let bar_w = (rect.width() as f32 * progress.min(1.0)) as i32;
            fill_rect(
                &mut overlay,
                Rect {
                    x1: rect.x1,
                    y1: rect.y2 - 10,
                    x2: rect.x1 + bar_w,
                    y2: rect.y2 - 2,
                },
                palette::WHITE,
            );
        }
    }

    blend(&mut frame.image, &overlay, MENU_ALPHA);

    frame.text(menu.title, at(size, 0.12, 0.13), 0.9, palette::WHITE);
    for &(idx, rect) in regions {
        let center = IVec2::new(rect.x1 + rect.width() / 2, rect.y1 + rect.height() / 2);
        frame.text_centered(menu.options[idx].label, center, 1.0, palette::WHITE);
    }
    frame.text(menu.hint, at(size, 0.1, 0.85), 0.7, palette::HINT);
}

/// Colored dots on the hand and foot landmarks
pub fn draw_landmarks(image: &mut RgbImage, person: &PersonLandmarks) {
    let size = UVec2::new(image.width(), image.height());
    for joint in Joint::ALL {
        let Some(p) = person.pixel(joint, size) else {
            continue;
        };
        let color = match joint.group() {
            JointGroup::LeftHand => palette::LEFT_HAND,
            JointGroup::RightHand => palette::RIGHT_HAND,
            JointGroup::Feet => palette::FEET,
        };
        fill_circle(image, p, LANDMARK_RADIUS, color);
    }
}
