//! Top-level game flow
//!
//! Setup menus -> play session -> results screen -> (setup again | exit).
//! The pose timeline runs through every phase without resetting.

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::frame::Frame;
use crate::menu::{Flow, run_setup};
use crate::platform::Key;
use crate::pose::{BodyPoints, PoseTimeline};
use crate::renderer::{draw_hud, draw_landmarks, draw_results};
use crate::rig::Rig;
use crate::sim::{GamePhase, GameState, SessionConfig, TickInput, tick};
use crate::sprites::SpriteSet;

/// What a whole program run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Final score of every session played to the end
    pub scores: Vec<u32>,
}

pub struct App {
    rig: Rig,
    sprites: SpriteSet,
    timeline: PoseTimeline,
    /// Seeds each session's spawn RNG
    rng: Pcg32,
}

impl App {
    pub fn new(rig: Rig, sprites: SpriteSet, config: &Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Run seed: {seed}");
        let timeline = PoseTimeline::new(rig.fps());
        log::info!("Pose frame interval: {} ms", timeline.frame_ms());
        Self {
            rig,
            sprites,
            timeline,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Play until the player quits
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            let Flow::Next((choices, timeline)) = run_setup(&mut self.rig, self.timeline)? else {
                break;
            };
            self.timeline = timeline;

            let Flow::Next((state, last_frame)) = self.play(choices.session_config())? else {
                break;
            };
            summary.scores.push(state.score());

            if self.results(&state, last_frame) == Flow::Quit {
                break;
            }
            log::info!("Restarting");
        }

        self.rig.release();
        Ok(summary)
    }

    /// Timeline position (next detection timestamp)
    pub fn timeline(&self) -> PoseTimeline {
        self.timeline
    }

    /// Run one session until the timer runs out. Hands back the finished
    /// state and the last frame captured.
    fn play(&mut self, config: SessionConfig) -> Result<Flow<(GameState, Frame)>> {
        let seed = self.rng.random::<u64>();
        let mut state = GameState::new(config, self.sprites.footprints(), seed, self.rig.now());
        log::info!(
            "Session started: speed x{} for {}s, full body: {}, seed {seed}",
            config.speed_multiplier,
            config.duration_secs,
            config.use_full_body
        );

        loop {
            let mut frame = self.rig.capture()?;
            let person = self.rig.detect(&frame, &mut self.timeline);
            let size = frame.size();

            if let Some(person) = &person {
                draw_landmarks(&mut frame.image, person);
            }
            let input = TickInput {
                body: BodyPoints::from_landmarks(person.as_ref(), size),
                frame_size: size,
                now: self.rig.now(),
            };

            let sprites = &self.sprites;
            let image = &mut frame.image;
            let report = tick(&mut state, &input, |entity| {
                sprites.get(entity.kind).draw(image, entity.center());
            });
            draw_hud(&mut frame, report.remaining, state.score());

            if state.phase == GamePhase::Results {
                return Ok(Flow::Next((state, frame)));
            }

            self.rig.show(&frame);
            if self.rig.poll_key() == Some(Key::Escape) {
                log::info!("Escape pressed during play");
                return Ok(Flow::Quit);
            }
        }
    }

    /// Show the final score and wait for Enter (restart) or Escape (exit)
    fn results(&mut self, state: &GameState, mut frame: Frame) -> Flow<()> {
        draw_results(&mut frame, state.score());
        self.rig.show(&frame);

        loop {
            match self.rig.wait_key() {
                Key::Enter => return Flow::Next(()),
                Key::Escape => return Flow::Quit,
                Key::Other(_) => {}
            }
        }
    }
}
