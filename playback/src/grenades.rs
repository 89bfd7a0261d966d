//! Grenade lifecycle at a point in time.
//!
//! The active set is rebuilt from the full grenade list on every query, no
//! state is carried between frames, so seeking in either direction is safe.

use common::{GrenadeEvent, GrenadeKind, TrajectoryPoint};

use crate::locator::locate;
use crate::math::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrenadePhase {
    InFlight,
    Effect,
}

/// A grenade that should currently be drawn, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGrenade {
    pub kind: GrenadeKind,
    pub thrower: u64,
    pub x: f64,
    pub y: f64,
    pub phase: GrenadePhase,
    pub trail: Vec<TrajectoryPoint>,
}

/// Collects every grenade active at `time`.
///
/// `trail_length` bounds the trail of in-flight grenades, including the live
/// point at `time`.
pub fn active_grenades(
    grenades: &[GrenadeEvent],
    time: f64,
    trail_length: usize,
) -> Vec<ActiveGrenade> {
    grenades
        .iter()
        .filter_map(|grenade| active_grenade(grenade, time, trail_length))
        .collect()
}

pub fn active_grenade(
    grenade: &GrenadeEvent,
    time: f64,
    trail_length: usize,
) -> Option<ActiveGrenade> {
    if time < grenade.throw_time {
        return None;
    }

    let in_flight = grenade
        .detonation_time()
        .map(|detonate| time < detonate)
        .unwrap_or(true);

    if in_flight {
        let (x, y) = trajectory_position(&grenade.trajectory, time)
            .unwrap_or((grenade.throw_x, grenade.throw_y));

        return Some(ActiveGrenade {
            kind: grenade.kind,
            thrower: grenade.thrower,
            x,
            y,
            phase: GrenadePhase::InFlight,
            trail: trail(&grenade.trajectory, time, trail_length),
        });
    }

    let effect_end = grenade.effect_end()?;
    if time >= effect_end {
        return None;
    }

    Some(ActiveGrenade {
        kind: grenade.kind,
        thrower: grenade.thrower,
        x: grenade.detonate_x,
        y: grenade.detonate_y,
        phase: GrenadePhase::Effect,
        trail: Vec::new(),
    })
}

/// Position along the trajectory polyline, clamped to its ends.
pub fn trajectory_position(points: &[TrajectoryPoint], time: f64) -> Option<(f64, f64)> {
    let bracket = locate(points, time)?;

    Some((
        lerp(bracket.prev.x, bracket.next.x, bracket.ratio),
        lerp(bracket.prev.y, bracket.next.y, bracket.ratio),
    ))
}

/// Trajectory samples up to `time` followed by the live position.
pub fn trail(points: &[TrajectoryPoint], time: f64, max_points: usize) -> Vec<TrajectoryPoint> {
    let (x, y) = match trajectory_position(points, time) {
        Some(pos) => pos,
        None => return Vec::new(),
    };
    if max_points == 0 {
        return Vec::new();
    }

    let passed = points.partition_point(|p| p.t <= time);
    let start = passed.saturating_sub(max_points - 1);

    let mut trail = Vec::with_capacity(passed - start + 1);
    trail.extend_from_slice(&points[start..passed]);
    trail.push(TrajectoryPoint { t: time, x, y });
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline() -> Vec<TrajectoryPoint> {
        (0..10)
            .map(|i| TrajectoryPoint {
                t: i as f64,
                x: i as f64 * 2.0,
                y: 0.0,
            })
            .collect()
    }

    #[test]
    fn trail_is_bounded() {
        let trail = trail(&polyline(), 6.5, 4);

        let times: Vec<_> = trail.iter().map(|p| p.t).collect();
        assert_eq!(vec![4.0, 5.0, 6.0, 6.5], times);
        assert_eq!(13.0, trail[3].x);
    }

    #[test]
    fn trail_of_one_is_live_point() {
        let trail = trail(&polyline(), 2.25, 1);

        assert_eq!(vec![TrajectoryPoint { t: 2.25, x: 4.5, y: 0.0 }], trail);
    }

    #[test]
    fn trail_before_first_sample() {
        let trail = trail(&polyline(), -1.0, 8);

        assert_eq!(vec![TrajectoryPoint { t: -1.0, x: 0.0, y: 0.0 }], trail);
    }

    #[test]
    fn empty_trajectory() {
        assert!(trajectory_position(&[], 1.0).is_none());
        assert!(trail(&[], 1.0, 8).is_empty());
    }
}
