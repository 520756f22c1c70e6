//! In-game HUD and results screen

use glam::IVec2;

use super::palette;
use crate::frame::Frame;

/// Time left and points, top-left corner
pub fn draw_hud(frame: &mut Frame, remaining: f32, score: u32) {
    frame.text(
        format!("Time: {remaining:.1}  Points: {score}"),
        IVec2::new(10, 40),
        1.0,
        palette::WHITE,
    );
}

/// Blank the frame and show the final score with the restart prompt
pub fn draw_results(frame: &mut Frame, score: u32) {
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    frame.clear(palette::BLACK);
    frame.text(
        format!("Final Score: {score}"),
        IVec2::new(w / 3, h / 2),
        1.5,
        palette::SCORE,
    );
    frame.text(
        "Press ENTER to restart or ESC to exit",
        IVec2::new(w / 6, h / 2 + 60),
        0.8,
        palette::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_hud_text() {
        let mut frame = Frame::new(64, 64);
        draw_hud(&mut frame, 12.345, 7);
        assert_eq!(frame.labels[0].text, "Time: 12.3  Points: 7");
    }

    #[test]
    fn test_results_blank_frame() {
        let mut frame = Frame::from_image(image::RgbImage::from_pixel(60, 40, Rgb([9, 9, 9])));
        draw_hud(&mut frame, 0.0, 3);
        draw_results(&mut frame, 3);
        assert!(frame.image.pixels().all(|p| *p == palette::BLACK));
        assert_eq!(frame.labels.len(), 2);
        assert_eq!(frame.labels[0].text, "Final Score: 3");
        assert_eq!(frame.labels[0].pos, IVec2::new(20, 20));
        assert!(frame.has_text("ENTER"));
    }
}
