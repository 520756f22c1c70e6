//! Dwell-to-select
//!
//! Tracks which region the pointer occupies and since when. A selection
//! fires once the pointer has stayed inside the same region for the hold
//! time, and only once per continuous stay.

use std::time::Duration;

use glam::Vec2;

use super::Rect;
use crate::consts::HOVER_TIME_REQUIRED;

#[derive(Debug, Clone)]
pub struct HoverSelector<R> {
    hold: Duration,
    /// Region occupied on the previous update
    current: Option<R>,
    /// Set exactly when `current` is set
    dwell_start: Option<Duration>,
    /// The current stay already produced its selection
    fired: bool,
}

impl<R: Copy + PartialEq> Default for HoverSelector<R> {
    fn default() -> Self {
        Self::new(HOVER_TIME_REQUIRED)
    }
}

impl<R: Copy + PartialEq> HoverSelector<R> {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            current: None,
            dwell_start: None,
            fired: false,
        }
    }

    /// Feed one frame. Returns the selected region on the first frame the
    /// dwell reaches the hold time.
    ///
    /// With overlapping regions the first one in `regions` wins.
    pub fn update(&mut self, pointer: Option<Vec2>, regions: &[(R, Rect)], now: Duration) -> Option<R> {
        let occupied = pointer.and_then(|p| {
            regions
                .iter()
                .find(|(_, rect)| rect.contains(p))
                .map(|(id, _)| *id)
        });

        if occupied != self.current {
            self.current = occupied;
            self.dwell_start = occupied.map(|_| now);
            self.fired = false;
            return None;
        }

        let (Some(id), Some(start)) = (self.current, self.dwell_start) else {
            return None;
        };
        if self.fired || now.saturating_sub(start) < self.hold {
            return None;
        }
        self.fired = true;
        Some(id)
    }

    /// Region the pointer is in, if any
    pub fn hovered(&self) -> Option<R> {
        self.current
    }

    pub fn dwell_start(&self) -> Option<Duration> {
        self.dwell_start
    }

    /// Dwell progress in `[0, 1]` for the progress bar
    pub fn progress(&self, now: Duration) -> f32 {
        match self.dwell_start {
            Some(start) => (now.saturating_sub(start).as_secs_f32() / self.hold.as_secs_f32()).min(1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TICK: Duration = Duration::from_millis(33);

    fn regions() -> Vec<(u8, Rect)> {
        vec![
            (0, Rect { x1: 0, y1: 0, x2: 99, y2: 99 }),
            (1, Rect { x1: 0, y1: 100, x2: 99, y2: 199 }),
        ]
    }

    const IN_0: Option<Vec2> = Some(Vec2::new(50.0, 50.0));
    const IN_1: Option<Vec2> = Some(Vec2::new(50.0, 150.0));

    #[test]
    fn test_fires_once_at_hold_time() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        let mut now = Duration::ZERO;
        let mut fired_at = Vec::new();

        for _ in 0..200 {
            if let Some(id) = sel.update(IN_0, &regions, now) {
                fired_at.push((id, now));
            }
            now += TICK;
        }

        // Dwell starts at t=0; 46 * 33ms = 1518ms is the first tick >= 1.5s
        assert_eq!(fired_at, vec![(0, Duration::from_millis(1518))]);
    }

    #[test]
    fn test_fires_exactly_at_threshold() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(100)), None);
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(1599)), None);
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(1600)), Some(1));
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(5000)), None);
    }

    #[test]
    fn test_switching_resets_dwell() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        sel.update(IN_0, &regions, Duration::from_millis(0));
        sel.update(IN_0, &regions, Duration::from_millis(1400));
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(1450)), None);
        assert_eq!(sel.hovered(), Some(1));
        assert_eq!(sel.dwell_start(), Some(Duration::from_millis(1450)));
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(2000)), None);
        assert_eq!(sel.update(IN_1, &regions, Duration::from_millis(2950)), Some(1));
    }

    #[test]
    fn test_leaving_clears_state() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        sel.update(IN_0, &regions, Duration::ZERO);
        assert_eq!(sel.update(None, &regions, Duration::from_millis(1000)), None);
        assert_eq!(sel.hovered(), None);
        assert_eq!(sel.dwell_start(), None);
        assert_eq!(sel.progress(Duration::from_millis(1000)), 0.0);

        // Outside every region counts the same as no pointer
        sel.update(IN_0, &regions, Duration::from_millis(1100));
        sel.update(Some(Vec2::new(500.0, 500.0)), &regions, Duration::from_millis(1200));
        assert_eq!(sel.hovered(), None);
    }

    #[test]
    fn test_refires_after_leaving_and_returning() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        sel.update(IN_0, &regions, Duration::ZERO);
        assert_eq!(sel.update(IN_0, &regions, Duration::from_millis(1500)), Some(0));
        sel.update(None, &regions, Duration::from_millis(1600));
        sel.update(IN_0, &regions, Duration::from_millis(1700));
        assert_eq!(sel.update(IN_0, &regions, Duration::from_millis(3200)), Some(0));
    }

    #[test]
    fn test_progress() {
        let mut sel = HoverSelector::default();
        let regions = regions();
        sel.update(IN_0, &regions, Duration::from_secs(1));
        assert_eq!(sel.progress(Duration::from_secs(1)), 0.0);
        assert!((sel.progress(Duration::from_millis(1750)) - 0.5).abs() < 1e-6);
        assert_eq!(sel.progress(Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_first_region_wins_on_overlap() {
        let mut sel = HoverSelector::default();
        let overlapping = vec![
            ('a', Rect { x1: 0, y1: 0, x2: 100, y2: 100 }),
            ('b', Rect { x1: 50, y1: 50, x2: 150, y2: 150 }),
        ];
        sel.update(Some(Vec2::new(75.0, 75.0)), &overlapping, Duration::ZERO);
        assert_eq!(sel.hovered(), Some('a'));
    }

    proptest! {
        /// Stays shorter than the hold time never select anything
        #[test]
        fn prop_short_stays_never_fire(stays in prop::collection::vec((0u8..3, 1u64..45), 1..40)) {
            let mut sel = HoverSelector::default();
            let regions = regions();
            let mut now = Duration::ZERO;
            let mut last: Option<u8> = None;
            for (target, ticks) in stays {
                // Consecutive stays in the same place merge into one
                if last == Some(target) {
                    continue;
                }
                last = Some(target);
                let pointer = match target {
                    0 => IN_0,
                    1 => IN_1,
                    _ => None,
                };
                for _ in 0..ticks {
                    prop_assert_eq!(sel.update(pointer, &regions, now), None);
                    now += TICK;
                }
            }
        }

        /// A long enough stay fires exactly once, never before the hold time
        #[test]
        fn prop_long_stay_fires_once(entry_ms in 0u64..10_000, step_ms in 1u64..200, ticks in 60usize..300) {
            let mut sel = HoverSelector::default();
            let regions = regions();
            let entry = Duration::from_millis(entry_ms);
            let step = Duration::from_millis(step_ms);
            let mut fired = Vec::new();
            for i in 0..ticks {
                let now = entry + step * i as u32;
                if sel.update(IN_0, &regions, now).is_some() {
                    fired.push(now);
                }
            }
            let span = step * (ticks as u32 - 1);
            if span >= HOVER_TIME_REQUIRED {
                prop_assert_eq!(fired.len(), 1);
                prop_assert!(fired[0] - entry >= HOVER_TIME_REQUIRED);
                prop_assert!(fired[0] - entry < HOVER_TIME_REQUIRED + step);
            } else {
                prop_assert!(fired.is_empty());
            }
        }
    }
}
