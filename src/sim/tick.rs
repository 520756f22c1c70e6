//! Per-frame session update
//!
//! One tick per captured frame: spawn roll, fall, draw, remove, catch, timer.

use std::time::Duration;

use glam::UVec2;

use super::collision::{Catcher, catch_check};
use super::entity::{EntityKind, FallingEntity};
use super::state::{GamePhase, GameState};
use crate::pose::BodyPoints;

/// Everything a tick needs from outside the simulation
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Hand and foot positions this frame
    pub body: BodyPoints,
    pub frame_size: UVec2,
    /// Clock reading for this frame
    pub now: Duration,
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub spawned: Option<EntityKind>,
    pub caught: Vec<(EntityKind, Catcher)>,
    /// Entities that fell off the bottom uncaught
    pub dropped: u32,
    /// Seconds left after this tick
    pub remaining: f32,
}

/// Advance the session by one frame.
///
/// `draw` sees every entity after it moves and before it is removed, so an
/// entity is drawn on the frame it gets caught.
pub fn tick(state: &mut GameState, input: &TickInput, mut draw: impl FnMut(&FallingEntity)) -> TickReport {
    let mut report = TickReport::default();

    if state.phase == GamePhase::Results {
        return report;
    }

    state.time_ticks += 1;

    // Spawn roll
    let roll = state.spawn.roll(
        &mut state.rng,
        input.frame_size.x,
        state.config.speed_multiplier,
        state.config.use_full_body,
    );
    if let Some(roll) = roll {
        let spawned = state.spawn_entity(roll.kind, roll.x, roll.speed);
        log::debug!(
            "Spawned {} #{} at x={} speed={:.2}",
            spawned.kind.as_str(),
            spawned.id,
            spawned.x,
            spawned.speed
        );
        report.spawned = Some(roll.kind);
    }

    // Fall, draw, then resolve
    let full_body = state.config.use_full_body;
    let height = input.frame_size.y;
    let mut caught = 0;
    state.entities_mut().retain_mut(|entity| {
        entity.advance();
        draw(entity);

        if entity.is_off_screen(height) {
            report.dropped += 1;
            return false;
        }

        match catch_check(entity, &input.body, full_body) {
            Some(catcher) => {
                log::debug!("Caught {} #{} with {:?}", entity.kind.as_str(), entity.id, catcher);
                report.caught.push((entity.kind, catcher));
                caught += 1;
                false
            }
            None => true,
        }
    });
    for _ in 0..caught {
        state.add_point();
    }

    // Timer
    report.remaining = state.remaining(input.now);
    if report.remaining <= 0.0 {
        state.phase = GamePhase::Results;
        log::info!("Session over: {} points in {} ticks", state.score(), state.time_ticks);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Footprints;
    use crate::sim::state::{Difficulty, PlayMode, SessionConfig};
    use glam::Vec2;

    const FRAME: UVec2 = UVec2::new(640, 480);
    const FRAME_TIME: Duration = Duration::from_millis(33);

    fn quiet_state(mode: PlayMode) -> GameState {
        let config = SessionConfig::new(Difficulty::Medium, 30, mode);
        let mut state = GameState::new(config, Footprints::default(), 12345, Duration::ZERO);
        state.spawn.chance = 0.0;
        state
    }

    fn input(body: BodyPoints, now: Duration) -> TickInput {
        TickInput {
            body,
            frame_size: FRAME,
            now,
        }
    }

    #[test]
    fn test_catch_on_tenth_tick() {
        let mut state = quiet_state(PlayMode::HandsOnly);
        state.spawn_entity(EntityKind::FruitA, 200.0, 4.0);

        let mut now = Duration::ZERO;
        for _ in 0..9 {
            now += FRAME_TIME;
            let report = tick(&mut state, &input(BodyPoints::default(), now), |_| {});
            assert!(report.caught.is_empty());
        }
        assert_eq!(state.entities()[0].y, 36.0);
        assert_eq!(state.score(), 0);

        let hand = BodyPoints {
            right_hand: Some(Vec2::new(200.0, 40.0)),
            ..Default::default()
        };
        now += FRAME_TIME;
        let mut drawn = Vec::new();
        let report = tick(&mut state, &input(hand, now), |e| drawn.push(e.center()));
        assert_eq!(drawn, vec![Vec2::new(200.0, 40.0)]);
        assert_eq!(report.caught, vec![(EntityKind::FruitA, Catcher::RightHand)]);
        assert_eq!(state.score(), 1);
        assert!(state.entities().is_empty());
    }

    #[test]
    fn test_left_hand_never_catches_fruit_a() {
        let mut state = quiet_state(PlayMode::FullBody);
        state.spawn_entity(EntityKind::FruitA, 200.0, 4.0);
        let body = BodyPoints {
            left_hand: Some(Vec2::new(200.0, 4.0)),
            left_foot: Some(Vec2::new(200.0, 4.0)),
            ..Default::default()
        };
        tick(&mut state, &input(body, FRAME_TIME), |_| {});
        assert_eq!(state.score(), 0);
        assert_eq!(state.entities().len(), 1);
    }

    #[test]
    fn test_off_screen_removed_without_score() {
        let mut state = quiet_state(PlayMode::HandsOnly);
        state.spawn_entity(EntityKind::FruitA, 200.0, 5.0);
        state.entities_mut()[0].y = 478.0;

        // Hand right on top of where it lands
        let body = BodyPoints {
            right_hand: Some(Vec2::new(200.0, 483.0)),
            ..Default::default()
        };
        let report = tick(&mut state, &input(body, FRAME_TIME), |_| {});
        assert_eq!(report.dropped, 1);
        assert!(report.caught.is_empty());
        assert_eq!(state.score(), 0);
        assert!(state.entities().is_empty());
    }

    #[test]
    fn test_entity_at_bottom_edge_persists() {
        let mut state = quiet_state(PlayMode::HandsOnly);
        state.spawn_entity(EntityKind::FruitB, 200.0, 2.0);
        state.entities_mut()[0].y = 478.0;
        let report = tick(&mut state, &input(BodyPoints::default(), FRAME_TIME), |_| {});
        assert_eq!(report.dropped, 0);
        assert_eq!(state.entities()[0].y, 480.0);
    }

    #[test]
    fn test_nobody_in_view_full_session() {
        let config = SessionConfig::new(Difficulty::Medium, 30, PlayMode::HandsOnly);
        let mut state = GameState::new(config, Footprints::default(), 99, Duration::ZERO);

        let mut now = Duration::ZERO;
        let mut spawned = 0;
        while state.phase == GamePhase::Playing {
            now += FRAME_TIME;
            let report = tick(&mut state, &input(BodyPoints::default(), now), |_| {});
            spawned += report.spawned.is_some() as u32;
            assert!(report.caught.is_empty());
            assert!(now <= Duration::from_secs(31), "session did not end");
        }
        assert!(now >= Duration::from_secs(30));
        assert_eq!(state.score(), 0);
        assert!(spawned > 0);
        assert_eq!(state.remaining(now), 0.0);
    }

    #[test]
    fn test_tick_after_results_is_noop() {
        let mut state = quiet_state(PlayMode::HandsOnly);
        state.spawn_entity(EntityKind::FruitA, 200.0, 4.0);
        tick(&mut state, &input(BodyPoints::default(), Duration::from_secs(60)), |_| {});
        assert_eq!(state.phase, GamePhase::Results);

        let y = state.entities()[0].y;
        tick(&mut state, &input(BodyPoints::default(), Duration::from_secs(61)), |_| {});
        assert_eq!(state.entities()[0].y, y);
    }

    #[test]
    fn test_score_never_decreases() {
        let config = SessionConfig::new(Difficulty::Hard, 30, PlayMode::FullBody);
        let mut state = GameState::new(config, Footprints::default(), 5, Duration::ZERO);
        state.spawn.chance = 0.5;

        // Hands and feet parked across the frame
        let body = BodyPoints {
            right_hand: Some(Vec2::new(160.0, 200.0)),
            left_hand: Some(Vec2::new(480.0, 200.0)),
            left_foot: Some(Vec2::new(320.0, 440.0)),
            right_foot: None,
        };
        let mut last = 0;
        let mut now = Duration::ZERO;
        for _ in 0..600 {
            now += FRAME_TIME;
            tick(&mut state, &input(body, now), |_| {});
            assert!(state.score() >= last);
            last = state.score();
        }
        assert!(last > 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed spawn identically
        let config = SessionConfig::new(Difficulty::Medium, 30, PlayMode::FullBody);
        let mut state1 = GameState::new(config, Footprints::default(), 777, Duration::ZERO);
        let mut state2 = GameState::new(config, Footprints::default(), 777, Duration::ZERO);

        let mut now = Duration::ZERO;
        for _ in 0..300 {
            now += FRAME_TIME;
            tick(&mut state1, &input(BodyPoints::default(), now), |_| {});
            tick(&mut state2, &input(BodyPoints::default(), now), |_| {});
        }
        assert_eq!(state1.entities(), state2.entities());
    }
}
