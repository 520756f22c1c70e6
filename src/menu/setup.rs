//! Setup flow: difficulty, then duration, then play mode
//!
//! Each menu is its own capture loop sharing one generic driver. The pose
//! timeline is passed in and handed back so detection timestamps keep
//! increasing across menus and sessions.

use anyhow::Result;

use super::{HoverSelector, Menu, MenuOption, SLOT_BOTTOM, SLOT_MIDDLE, SLOT_TOP};
use crate::platform::Key;
use crate::pose::{BodyPoints, PoseTimeline};
use crate::renderer;
use crate::rig::Rig;
use crate::sim::{Difficulty, PlayMode, SessionConfig};

const HINT: &str = "Hold your hand over an option to select it";

/// Whether to keep going or shut the program down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow<T> {
    Next(T),
    /// The player pressed Escape
    Quit,
}

pub fn difficulty_menu() -> Menu<Difficulty> {
    let slots = [SLOT_TOP, SLOT_MIDDLE, SLOT_BOTTOM];
    Menu {
        title: "Select difficulty with your hand",
        hint: HINT,
        options: Difficulty::ALL
            .iter()
            .zip(slots)
            .map(|(d, region)| MenuOption {
                label: d.as_str(),
                region,
                value: *d,
            })
            .collect(),
    }
}

pub fn duration_menu() -> Menu<u32> {
    Menu {
        title: "Select game duration",
        hint: HINT,
        options: vec![
            MenuOption {
                label: "30 SEC",
                region: SLOT_TOP,
                value: 30,
            },
            MenuOption {
                label: "60 SEC",
                region: SLOT_MIDDLE,
                value: 60,
            },
            MenuOption {
                label: "90 SEC",
                region: SLOT_BOTTOM,
                value: 90,
            },
        ],
    }
}

pub fn mode_menu() -> Menu<PlayMode> {
    Menu {
        title: "Select game mode",
        hint: HINT,
        options: vec![
            MenuOption {
                label: PlayMode::HandsOnly.as_str(),
                region: SLOT_TOP,
                value: PlayMode::HandsOnly,
            },
            MenuOption {
                label: PlayMode::FullBody.as_str(),
                region: SLOT_MIDDLE,
                value: PlayMode::FullBody,
            },
        ],
    }
}

/// Run one menu until an option is selected or Escape is pressed
pub fn run_menu<T: Copy>(
    rig: &mut Rig,
    menu: &Menu<T>,
    mut timeline: PoseTimeline,
) -> Result<Flow<(T, PoseTimeline)>> {
    let mut selector = HoverSelector::default();

    loop {
        let mut frame = rig.capture()?;
        let person = rig.detect(&frame, &mut timeline);
        let body = BodyPoints::from_landmarks(person.as_ref(), frame.size());
        let pointer = body.pointer();

        let regions = menu.resolve(frame.size());
        let now = rig.now();
        if let Some(idx) = selector.update(pointer, &regions, now) {
            let option = &menu.options[idx];
            log::info!("{}: {}", menu.title, option.label);
            return Ok(Flow::Next((option.value, timeline)));
        }

        if let Some(p) = pointer {
            renderer::draw_pointer(&mut frame.image, p);
        }
        renderer::draw_menu(&mut frame, menu, &regions, selector.hovered(), selector.progress(now));
        rig.show(&frame);

        if rig.poll_key() == Some(Key::Escape) {
            log::info!("Escape pressed in menu");
            return Ok(Flow::Quit);
        }
    }
}

/// Everything picked during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupChoices {
    pub difficulty: Difficulty,
    pub duration_secs: u32,
    pub mode: PlayMode,
}

impl SetupChoices {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.difficulty, self.duration_secs, self.mode)
    }
}

/// Run all three setup menus in order
pub fn run_setup(rig: &mut Rig, timeline: PoseTimeline) -> Result<Flow<(SetupChoices, PoseTimeline)>> {
    let Flow::Next((difficulty, timeline)) = run_menu(rig, &difficulty_menu(), timeline)? else {
        return Ok(Flow::Quit);
    };
    let Flow::Next((duration_secs, timeline)) = run_menu(rig, &duration_menu(), timeline)? else {
        return Ok(Flow::Quit);
    };
    let Flow::Next((mode, timeline)) = run_menu(rig, &mode_menu(), timeline)? else {
        return Ok(Flow::Quit);
    };

    let choices = SetupChoices {
        difficulty,
        duration_secs,
        mode,
    };
    Ok(Flow::Next((choices, timeline)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_values() {
        let values: Vec<f32> = difficulty_menu()
            .options
            .iter()
            .map(|o| o.value.speed_multiplier())
            .collect();
        assert_eq!(values, vec![0.6, 1.0, 1.5]);

        let values: Vec<u32> = duration_menu().options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![30, 60, 90]);

        let modes = mode_menu();
        assert_eq!(modes.options.len(), 2);
        assert_eq!(modes.options[1].value, PlayMode::FullBody);
    }

    #[test]
    fn test_choices_to_session() {
        let choices = SetupChoices {
            difficulty: Difficulty::Hard,
            duration_secs: 60,
            mode: PlayMode::HandsOnly,
        };
        let config = choices.session_config();
        assert_eq!(config.speed_multiplier, 1.5);
        assert_eq!(config.duration_secs, 60);
        assert!(!config.use_full_body);
    }
}
