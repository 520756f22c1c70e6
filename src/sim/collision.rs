//! Catch detection
//!
//! An entity is caught when the body part matching its kind comes within
//! the entity's catch radius of its center. Checked once per entity per
//! tick; the first matching rule wins.

use glam::Vec2;

use super::entity::{EntityKind, FallingEntity};
use crate::pose::BodyPoints;

/// Which body part made the catch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catcher {
    RightHand,
    LeftHand,
    LeftFoot,
    RightFoot,
}

/// Strictly closer than `radius` to `center`. A missing point never reaches.
#[inline]
pub fn within_reach(center: Vec2, point: Option<Vec2>, radius: f32) -> bool {
    point.is_some_and(|p| center.distance(p) < radius)
}

/// Catch rule for one entity.
///
/// Fruit A only answers to the right hand, fruit B only to the left hand,
/// balls only to the feet (left foot first) and only in full body mode.
pub fn catch_check(entity: &FallingEntity, body: &BodyPoints, full_body: bool) -> Option<Catcher> {
    let center = entity.center();
    let radius = entity.catch_radius;

    match entity.kind {
        EntityKind::FruitA if within_reach(center, body.right_hand, radius) => {
            Some(Catcher::RightHand)
        }
        EntityKind::FruitB if within_reach(center, body.left_hand, radius) => {
            Some(Catcher::LeftHand)
        }
        EntityKind::Ball if full_body => {
            if within_reach(center, body.left_foot, radius) {
                Some(Catcher::LeftFoot)
            } else if within_reach(center, body.right_foot, radius) {
                Some(Catcher::RightFoot)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec2;

    fn entity(kind: EntityKind, x: f32, y: f32) -> FallingEntity {
        let mut e = FallingEntity::new(1, kind, x, 4.0, UVec2::splat(100));
        e.y = y;
        e
    }

    #[test]
    fn test_fruit_a_needs_right_hand() {
        let e = entity(EntityKind::FruitA, 200.0, 40.0);
        let on_target = Some(Vec2::new(210.0, 40.0));

        let left_only = BodyPoints {
            left_hand: on_target,
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &left_only, true), None);

        let right = BodyPoints {
            right_hand: on_target,
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &right, false), Some(Catcher::RightHand));
    }

    #[test]
    fn test_fruit_b_needs_left_hand() {
        let e = entity(EntityKind::FruitB, 200.0, 40.0);
        let right_only = BodyPoints {
            right_hand: Some(Vec2::new(200.0, 40.0)),
            left_foot: Some(Vec2::new(200.0, 40.0)),
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &right_only, true), None);

        let left = BodyPoints {
            left_hand: Some(Vec2::new(200.0, 40.0)),
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &left, false), Some(Catcher::LeftHand));
    }

    #[test]
    fn test_radius_is_strict() {
        let e = entity(EntityKind::FruitA, 200.0, 40.0);
        let at_edge = BodyPoints {
            right_hand: Some(Vec2::new(200.0 + e.catch_radius, 40.0)),
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &at_edge, false), None);

        let inside = BodyPoints {
            right_hand: Some(Vec2::new(200.0 + e.catch_radius - 0.5, 40.0)),
            ..Default::default()
        };
        assert!(catch_check(&e, &inside, false).is_some());
    }

    #[test]
    fn test_ball_only_in_full_body_mode() {
        let e = entity(EntityKind::Ball, 300.0, 400.0);
        let feet = BodyPoints {
            left_foot: Some(Vec2::new(300.0, 400.0)),
            right_foot: Some(Vec2::new(300.0, 400.0)),
            right_hand: Some(Vec2::new(300.0, 400.0)),
            left_hand: Some(Vec2::new(300.0, 400.0)),
        };
        assert_eq!(catch_check(&e, &feet, false), None);
        // Left foot is checked first
        assert_eq!(catch_check(&e, &feet, true), Some(Catcher::LeftFoot));

        let right_foot = BodyPoints {
            right_foot: Some(Vec2::new(290.0, 410.0)),
            ..Default::default()
        };
        assert_eq!(catch_check(&e, &right_foot, true), Some(Catcher::RightFoot));
    }

    #[test]
    fn test_nobody_catches_nothing() {
        for kind in EntityKind::ALL {
            let e = entity(kind, 100.0, 100.0);
            assert_eq!(catch_check(&e, &BodyPoints::default(), true), None);
        }
    }
}
