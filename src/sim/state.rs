//! Session state and setup choices
//!
//! A `GameState` is built fresh for every session; nothing carries over on
//! restart.

use std::time::Duration;

use glam::UVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{EntityKind, FallingEntity, Footprints};
use super::spawn::SpawnPolicy;

/// Difficulty preset (scales fall speed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

/// Which body parts play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    HandsOnly,
    /// Adds balls, caught with the feet
    FullBody,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::HandsOnly => "HANDS ONLY",
            PlayMode::FullBody => "FULL BODY",
        }
    }
}

/// Parameters chosen in the setup menus. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub speed_multiplier: f32,
    pub duration_secs: u32,
    pub use_full_body: bool,
}

impl SessionConfig {
    pub fn new(difficulty: Difficulty, duration_secs: u32, mode: PlayMode) -> Self {
        Self {
            speed_multiplier: difficulty.speed_multiplier(),
            duration_secs,
            use_full_body: mode == PlayMode::FullBody,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs as u64)
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Entities falling, timer running
    Playing,
    /// Timer ran out
    Results,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Spawn seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub config: SessionConfig,
    pub spawn: SpawnPolicy,
    pub footprints: Footprints,
    pub phase: GamePhase,
    /// Clock reading when the session began
    pub started_at: Duration,
    /// Ticks simulated so far
    pub time_ticks: u64,
    score: u32,
    /// Live entities in spawn order
    entities: Vec<FallingEntity>,
    next_id: u32,
}

impl GameState {
    pub fn new(config: SessionConfig, footprints: Footprints, seed: u64, started_at: Duration) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            spawn: SpawnPolicy::default(),
            footprints,
            phase: GamePhase::Playing,
            started_at,
            time_ticks: 0,
            score: 0,
            entities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn entities(&self) -> &[FallingEntity] {
        &self.entities
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new entity at the top of the frame
    pub fn spawn_entity(&mut self, kind: EntityKind, x: f32, speed: f32) -> &FallingEntity {
        let id = self.next_entity_id();
        let size: UVec2 = self.footprints.get(kind);
        self.entities.push(FallingEntity::new(id, kind, x, speed, size));
        &self.entities[self.entities.len() - 1]
    }

    pub(crate) fn entities_mut(&mut self) -> &mut Vec<FallingEntity> {
        &mut self.entities
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    /// Seconds left at clock reading `now`, never negative
    pub fn remaining(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        (self.config.duration_secs as f32 - elapsed.as_secs_f32()).max(0.0)
    }

    pub fn is_over(&self, now: Duration) -> bool {
        self.remaining(now) <= 0.0
    }
}
