//! Finding the pair of samples that bracket a query time.

use common::{Snapshot, TrajectoryPoint};

/// Anything that is sampled at a point in time within a round.
pub trait Timed {
    fn time(&self) -> f64;
}

impl Timed for Snapshot {
    fn time(&self) -> f64 {
        self.time_in_round
    }
}

impl Timed for TrajectoryPoint {
    fn time(&self) -> f64 {
        self.t
    }
}

/// Two samples surrounding a query time plus the position between them.
///
/// Outside the covered time span both ends point at the same boundary sample.
#[derive(Debug)]
pub struct Bracket<'s, T> {
    pub prev: &'s T,
    pub next: &'s T,
    pub prev_index: usize,
    pub next_index: usize,
    pub ratio: f64,
}

impl<'s, T> Clone for Bracket<'s, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, T> Copy for Bracket<'s, T> {}

impl<'s, T> Bracket<'s, T> {
    fn single(samples: &'s [T], index: usize) -> Self {
        Self {
            prev: &samples[index],
            next: &samples[index],
            prev_index: index,
            next_index: index,
            ratio: 0.0,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.prev_index == self.next_index
    }

    /// Index of the sample used for values that are not interpolated.
    ///
    /// The closer endpoint wins, ties go to `next`.
    pub fn authoritative_index(&self) -> usize {
        if self.ratio < 0.5 {
            self.prev_index
        } else {
            self.next_index
        }
    }

    pub fn authoritative(&self) -> &'s T {
        if self.ratio < 0.5 {
            self.prev
        } else {
            self.next
        }
    }
}

/// Locates `time` in a time ordered slice of samples.
///
/// Returns `None` for an empty slice. Runs in `O(log n)`.
pub fn locate<T>(samples: &[T], time: f64) -> Option<Bracket<'_, T>>
where
    T: Timed,
{
    let first = samples.first()?;
    let last_index = samples.len() - 1;

    if samples.len() == 1 || time <= first.time() {
        return Some(Bracket::single(samples, 0));
    }
    if time >= samples[last_index].time() {
        return Some(Bracket::single(samples, last_index));
    }

    // First sample strictly after `time`, always in 1..=last_index here
    let next_index = samples.partition_point(|s| s.time() <= time);
    let prev_index = next_index - 1;

    let prev = &samples[prev_index];
    let next = &samples[next_index];

    let span = next.time() - prev.time();
    let ratio = if span > 0.0 {
        (time - prev.time()) / span
    } else {
        0.0
    };

    Some(Bracket {
        prev,
        next,
        prev_index,
        next_index,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(times: &[f64]) -> Vec<TrajectoryPoint> {
        times
            .iter()
            .map(|t| TrajectoryPoint { t: *t, x: 0.0, y: 0.0 })
            .collect()
    }

    #[test]
    fn empty() {
        assert!(locate::<TrajectoryPoint>(&[], 1.0).is_none());
    }

    #[test]
    fn exact_hit_on_inner_sample() {
        let samples = points(&[0.0, 1.0, 2.0, 3.0]);

        let bracket = locate(&samples, 2.0).unwrap();
        assert_eq!((2, 3), (bracket.prev_index, bracket.next_index));
        assert_eq!(0.0, bracket.ratio);
    }

    #[test]
    fn midpoint_prefers_later() {
        let samples = points(&[0.0, 1.0]);

        let bracket = locate(&samples, 0.5).unwrap();
        assert_eq!(1, bracket.authoritative_index());

        let bracket = locate(&samples, 0.49).unwrap();
        assert_eq!(0, bracket.authoritative_index());
    }
}
