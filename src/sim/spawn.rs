//! Spawn policy
//!
//! Every tick rolls once for a new entity. Kind, column and speed are all
//! drawn from the session RNG.

use rand::Rng;

use super::entity::EntityKind;
use crate::consts::{MAX_FALL_SPEED, MIN_FALL_SPEED, SPAWN_CHANCE, SPAWN_MARGIN};

/// Cumulative thresholds for the full body kind draw
const FRUIT_A_THRESHOLD: f64 = 0.33;
const FRUIT_B_THRESHOLD: f64 = 0.66;

/// Outcome of a successful spawn roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRoll {
    pub kind: EntityKind,
    pub x: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPolicy {
    /// Per-tick spawn probability
    pub chance: f64,
    /// Horizontal margin kept free at both frame edges
    pub margin: u32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            chance: SPAWN_CHANCE,
            margin: SPAWN_MARGIN,
            min_speed: MIN_FALL_SPEED,
            max_speed: MAX_FALL_SPEED,
        }
    }
}

impl SpawnPolicy {
    /// Roll for this tick. `None` most ticks.
    pub fn roll<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        frame_width: u32,
        speed_multiplier: f32,
        full_body: bool,
    ) -> Option<SpawnRoll> {
        if rng.random::<f64>() >= self.chance {
            return None;
        }

        let kind = roll_kind(rng, full_body);
        let x = self.roll_column(rng, frame_width);
        let speed = rng.random_range(self.min_speed..=self.max_speed) * speed_multiplier;
        Some(SpawnRoll { kind, x, speed })
    }

    /// Whole-pixel column in `[margin, width - margin]`; frames narrower
    /// than both margins spawn in the middle
    fn roll_column<R: Rng + ?Sized>(&self, rng: &mut R, frame_width: u32) -> f32 {
        let lo = self.margin;
        let hi = frame_width.saturating_sub(self.margin);
        if hi < lo {
            return (frame_width / 2) as f32;
        }
        rng.random_range(lo..=hi) as f32
    }
}

/// Entity kind for one spawn. Hands-only sessions never produce balls.
pub fn roll_kind<R: Rng + ?Sized>(rng: &mut R, full_body: bool) -> EntityKind {
    if !full_body {
        return if rng.random_bool(0.5) {
            EntityKind::FruitA
        } else {
            EntityKind::FruitB
        };
    }

    let r = rng.random::<f64>();
    if r < FRUIT_A_THRESHOLD {
        EntityKind::FruitA
    } else if r < FRUIT_B_THRESHOLD {
        EntityKind::FruitB
    } else {
        EntityKind::Ball
    }
}
